//! Canonical URL middleware.
//! Redirects non-canonical GET requests before they reach a handler.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::canonical::{CanonicalOptions, Decision, RequestView};
use crate::config::{CanonicalConfig, ServerConfig};
use crate::http::escape::{decode_non_ascii, evaluate_escaped};
use crate::http::request::{query_suffix, request_id, Origin};
use crate::http::response::permanent_redirect;
use crate::observability::metrics;
use crate::routing::{CompiledRoute, ExemptionRouter};

/// Everything the middleware needs, shared read-only across requests.
#[derive(Debug)]
pub struct CanonicalState {
    pub options: CanonicalOptions,
    pub server: ServerConfig,
    pub router: ExemptionRouter,
}

impl CanonicalState {
    pub fn from_config(config: &CanonicalConfig) -> Self {
        Self {
            options: config.canonical,
            server: config.server.clone(),
            router: ExemptionRouter::from_config(config.routes.clone()),
        }
    }

    /// Canonicalization decision for `request`, with the route that
    /// supplied its exemptions.
    pub fn decide<B>(&self, request: &Request<B>) -> (Decision, Option<&CompiledRoute>) {
        let origin = Origin::from_request(request, &self.server);
        let path = request.uri().path();
        let query = query_suffix(request);
        let route = self.router.resolve_route(origin.host(), &decode_non_ascii(path));
        let exemptions = route.map(|r| r.exemptions).unwrap_or_default();

        let view = RequestView {
            method: request.method().as_str(),
            scheme: &origin.scheme,
            authority: &origin.authority,
            path,
            query: &query,
        };
        (evaluate_escaped(&view, &self.options, exemptions), route)
    }
}

pub async fn canonical_middleware(
    State(state): State<Arc<CanonicalState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let (decision, route) = state.decide(&req);
    metrics::record_decision(&decision);

    let Decision::Redirect(redirect) = decision else {
        return next.run(req).await;
    };

    match permanent_redirect(&redirect.location) {
        Ok(response) => {
            debug!(
                request_id = %request_id(&req),
                route = route.map(|r| r.name.as_str()).unwrap_or("none"),
                from = %req.uri(),
                to = %redirect.location,
                fixes = %redirect.fixes,
                "Redirecting to canonical URL"
            );
            response
        }
        Err(e) => {
            warn!(
                request_id = %request_id(&req),
                location = %redirect.location,
                error = %e,
                "Canonical location is not a valid header value, passing through"
            );
            next.run(req).await
        }
    }
}
