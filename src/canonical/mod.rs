//! URL canonicalization core.
//!
//! # Data Flow
//! ```text
//! RequestView (method, scheme, authority, path, query)
//!     + CanonicalOptions (global, immutable)
//!     + Exemptions (resolved per route by the caller)
//!     → evaluate.rs (trailing slash + lowercase checks)
//!     → Decision::Canonical | Decision::Redirect(location, fixes)
//! ```
//!
//! # Design Decisions
//! - Pure and synchronous: no I/O, no shared mutable state
//! - All checks are cumulative and folded into a single redirect
//! - The root path is always canonical
//! - Exemptions are plain booleans; looking them up is the caller's job

pub mod decision;
pub mod evaluate;
pub mod options;

pub use decision::{Decision, Fixes, Redirect};
pub use evaluate::{build_location, evaluate};
pub use options::{CanonicalOptions, Exemptions, RequestView};
