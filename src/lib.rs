//! SEO canonical URL redirects.
//!
//! Inspects every GET request before routing and answers non-canonical
//! URLs (wrong case, inconsistent trailing slash, mixed-case query) with a
//! `301 Moved Permanently` to the canonical form.

pub mod canonical;
pub mod check;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use canonical::{evaluate, CanonicalOptions, Decision, Exemptions, RequestView};
pub use config::CanonicalConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
