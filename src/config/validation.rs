//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, schemes and timeouts
//! - Check every route can match something and names are unique
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CanonicalConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::CanonicalConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),

    #[error("unsupported public scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("route {0:?} has neither path nor path_prefix")]
    RouteWithoutPath(String),

    #[error("route {route:?}: {value:?} must start with '/'")]
    RelativeRoutePath { route: String, value: String },

    #[error("duplicate route name {0:?}")]
    DuplicateRoute(String),
}

pub fn validate_config(config: &CanonicalConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if !matches!(config.server.public_scheme.as_str(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme(
            config.server.public_scheme.clone(),
        ));
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut names = HashSet::new();
    for route in &config.routes {
        if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.name.clone()));
        }

        if route.path.is_none() && route.path_prefix.is_none() {
            errors.push(ValidationError::RouteWithoutPath(route.name.clone()));
        }

        for value in [&route.path, &route.path_prefix].into_iter().flatten() {
            if !value.starts_with('/') {
                errors.push(ValidationError::RelativeRoutePath {
                    route: route.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
