//! Shared helpers for integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use canonical_redirect::config::{CanonicalConfig, RouteConfig};
use canonical_redirect::HttpServer;
use tower::ServiceExt;

/// Layered application router for `config`.
pub fn app(config: CanonicalConfig) -> Router {
    HttpServer::new(config).router()
}

pub fn config(append_trailing_slash: bool, lowercase_urls: bool) -> CanonicalConfig {
    let mut config = CanonicalConfig::default();
    config.canonical.append_trailing_slash = append_trailing_slash;
    config.canonical.lowercase_urls = lowercase_urls;
    config.observability.metrics_enabled = false;
    config
}

pub fn route(name: &str, path: &str) -> RouteConfig {
    RouteConfig {
        name: name.into(),
        host: None,
        path: Some(path.into()),
        path_prefix: None,
        priority: 0,
        no_trailing_slash_rule: false,
        no_lowercase_query_string_rule: false,
    }
}

/// Send one request through `app` with a Host header of example.com.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    send_with(app, method, uri, &[]).await
}

pub async fn send_with(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Host", "example.com");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// The Location header, if any.
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
