//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Canonical middleware produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision and redirect counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line about a request
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
