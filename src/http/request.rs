//! Request inspection.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Work out the public scheme and authority of a request
//! - Split the URI into the path and `?query` the canonicalizer expects
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Forwarded headers are only trusted when configured
//! - Only the first value of a comma-separated forwarded header counts

use axum::http::{header, HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::config::ServerConfig;

pub const X_REQUEST_ID: &str = "x-request-id";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Generates a fresh UUID v4 for requests arriving without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID header value, or "unknown".
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Scheme and host[:port] the client used to reach us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: String,
    pub authority: String,
}

impl Origin {
    pub fn from_request<B>(request: &Request<B>, server: &ServerConfig) -> Self {
        let uri = request.uri();
        let headers = request.headers();
        let trusted = server.trust_forwarded_headers;

        let scheme = uri
            .scheme_str()
            .map(str::to_owned)
            .or_else(|| trusted.then(|| first_value(headers, X_FORWARDED_PROTO)).flatten())
            .unwrap_or_else(|| server.public_scheme.clone());

        let authority = uri
            .authority()
            .map(|a| a.as_str().to_owned())
            .or_else(|| trusted.then(|| first_value(headers, X_FORWARDED_HOST)).flatten())
            .or_else(|| first_value(headers, header::HOST.as_str()))
            .unwrap_or_default();

        Self { scheme, authority }
    }

    /// Host used for route matching; `None` when unknown.
    pub fn host(&self) -> Option<&str> {
        (!self.authority.is_empty()).then_some(self.authority.as_str())
    }
}

/// The `?query` suffix of a request URI, or empty.
pub fn query_suffix<B>(request: &Request<B>) -> String {
    request
        .uri()
        .query()
        .map(|q| format!("?{}", q))
        .unwrap_or_default()
}

fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
