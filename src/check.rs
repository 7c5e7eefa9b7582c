//! Evaluation of absolute URLs: offline against a configuration, or live
//! against a running server.

use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use serde::Serialize;
use url::{Position, Url};

use crate::canonical::{Decision, RequestView};
use crate::config::CanonicalConfig;
use crate::http::escape::{decode_non_ascii, evaluate_escaped};
use crate::routing::ExemptionRouter;

/// Evaluate `raw` as if it arrived as a GET request.
///
/// The `url` crate lowercases hosts and percent-encodes non-ASCII path
/// characters while parsing, exactly as a client would before sending.
pub fn check_url(raw: &str, config: &CanonicalConfig) -> Result<Decision, url::ParseError> {
    let router = ExemptionRouter::from_config(config.routes.clone());
    Ok(check_parsed(&Url::parse(raw)?, config, &router))
}

pub fn check_parsed(url: &Url, config: &CanonicalConfig, router: &ExemptionRouter) -> Decision {
    let authority = &url[Position::BeforeHost..Position::AfterPort];
    let query = url.query().map(|q| format!("?{}", q)).unwrap_or_default();
    let host = (!authority.is_empty()).then_some(authority);
    let exemptions = router.resolve(host, &decode_non_ascii(url.path()));

    let view = RequestView::get(url.path(), &query).with_origin(url.scheme(), authority);
    evaluate_escaped(&view, &config.canonical, exemptions)
}

/// What a live server answered for one GET.
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub url: String,
    pub status: u16,
    pub canonical: bool,
    pub location: Option<String>,
}

/// Send a GET to `url` without following redirects.
pub async fn fetch(url: &str) -> Result<FetchReport, reqwest::Error> {
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
    fetch_with(&client, url).await
}

/// Like [`fetch`], with a caller-built client. The client should not follow
/// redirects, or the report describes the final hop.
pub async fn fetch_with(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchReport, reqwest::Error> {
    let res = client.get(url).send().await?;

    let location = res
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    Ok(FetchReport {
        url: url.to_owned(),
        status: res.status().as_u16(),
        canonical: !res.status().is_redirection(),
        location,
    })
}
