//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page handler
//! - Wire up middleware (tracing, request ID, timeout, canonical redirects)
//! - Serve on a listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{http::Uri, middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::CanonicalConfig;
use crate::http::middleware::canonical::{canonical_middleware, CanonicalState};
use crate::http::request::MakeRequestUuid;

/// HTTP server fronting the handlers with canonical redirects.
pub struct HttpServer {
    router: Router,
    config: CanonicalConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: CanonicalConfig) -> Self {
        let state = Arc::new(CanonicalState::from_config(&config));
        tracing::debug!(routes = state.router.len(), "Exemption routes compiled");

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &CanonicalConfig, state: Arc<CanonicalState>) -> Router {
        Router::new()
            .route("/", any(page_handler))
            .route("/{*path}", any(page_handler))
            .layer(middleware::from_fn_with_state(state, canonical_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            append_trailing_slash = self.config.canonical.append_trailing_slash,
            lowercase_urls = self.config.canonical.lowercase_urls,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Stand-in page: echoes the URL it was reached by.
async fn page_handler(uri: Uri) -> String {
    format!("page: {}\n", uri)
}
