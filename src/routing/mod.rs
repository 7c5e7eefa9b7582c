//! Route resolution for per-endpoint exemptions.
//!
//! # Data Flow
//! ```text
//! Incoming request (host, path)
//!     → router.rs (route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: the matched route's Exemptions, or none
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Sort by priority
//!     → Compile matchers
//!     → Freeze as immutable ExemptionRouter
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Path matching ignores ASCII case and trailing slashes, so every
//!   non-canonical variant resolves to the same route as its canonical form
//! - First match wins (ordered by priority)
//! - No match means no exemptions

pub mod matcher;
pub mod router;

pub use router::{CompiledRoute, ExemptionRouter};
