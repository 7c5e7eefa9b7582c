//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, origin + RequestView extraction)
//!     → escape.rs (decode escaped non-ASCII text for case checks)
//!     → middleware/canonical.rs (exemption lookup, canonical decision)
//!         → 301 via response.rs, handler never runs
//!         → or the page handler
//!     → Send to client
//! ```

pub mod escape;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use middleware::canonical::{canonical_middleware, CanonicalState};
pub use request::{MakeRequestUuid, Origin, X_REQUEST_ID};
pub use server::HttpServer;
