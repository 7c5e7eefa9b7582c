//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::canonical::{CanonicalOptions, Exemptions};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CanonicalConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// How redirect targets are built and requests are bounded.
    pub server: ServerConfig,

    /// Global canonicalization rules.
    pub canonical: CanonicalOptions,

    /// Routes carrying per-endpoint exemptions.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Request handling settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Scheme used in redirect targets when the request URI carries none.
    pub public_scheme: String,

    /// Honour X-Forwarded-Proto and X-Forwarded-Host when building targets.
    pub trust_forwarded_headers: bool,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            public_scheme: "http".to_string(),
            trust_forwarded_headers: false,
            request_timeout_secs: 30,
        }
    }
}

/// A route and the canonicalization rules it opts out of.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging.
    pub name: String,

    /// Host header to match (exact match, case-insensitive).
    pub host: Option<String>,

    /// Exact path to match (case-insensitive, trailing slashes ignored).
    pub path: Option<String>,

    /// Path prefix to match (case-insensitive).
    pub path_prefix: Option<String>,

    /// Route priority (higher = checked first).
    #[serde(default)]
    pub priority: u32,

    #[serde(default)]
    pub no_trailing_slash_rule: bool,

    #[serde(default)]
    pub no_lowercase_query_string_rule: bool,
}

impl RouteConfig {
    pub fn exemptions(&self) -> Exemptions {
        Exemptions {
            no_trailing_slash_rule: self.no_trailing_slash_rule,
            no_lowercase_query_string_rule: self.no_lowercase_query_string_rule,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
