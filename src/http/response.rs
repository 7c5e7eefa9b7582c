//! Response construction.
//!
//! # Responsibilities
//! - Build the permanent redirect sent for non-canonical URLs
//!
//! # Design Decisions
//! - Always 301: search engines transfer ranking to the target
//! - Empty body; the Location header carries everything

use axum::http::header::{self, InvalidHeaderValue};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// `301 Moved Permanently` to `location`.
pub fn permanent_redirect(location: &str) -> Result<Response, InvalidHeaderValue> {
    let location = HeaderValue::from_str(location)?;
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
