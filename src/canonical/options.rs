//! Inputs to the canonicalization decision.

use serde::{Deserialize, Serialize};

/// Global canonicalization rules, loaded once from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CanonicalOptions {
    /// Canonical URLs end with "/" when true, never end with "/" when false.
    /// The bare root is exempt either way.
    pub append_trailing_slash: bool,

    /// Canonical path and query string are lowercase.
    pub lowercase_urls: bool,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self {
            append_trailing_slash: false,
            lowercase_urls: true,
        }
    }
}

/// Per-route rule suppressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Exemptions {
    /// Suppresses trailing slash appending. Also suppresses lowercasing.
    pub no_trailing_slash_rule: bool,

    /// Suppresses query string lowercasing.
    pub no_lowercase_query_string_rule: bool,
}

impl Exemptions {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Read-only view of an inbound request.
///
/// `query` carries its leading `?`, or is empty. `authority` may be empty,
/// in which case redirects are origin-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestView<'a> {
    pub method: &'a str,
    pub scheme: &'a str,
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
}

impl<'a> RequestView<'a> {
    /// A GET request with no known origin.
    pub fn get(path: &'a str, query: &'a str) -> Self {
        Self {
            method: "GET",
            scheme: "http",
            authority: "",
            path,
            query,
        }
    }

    /// Attach the scheme and host[:port] used to rebuild absolute redirects.
    pub fn with_origin(mut self, scheme: &'a str, authority: &'a str) -> Self {
        self.scheme = scheme;
        self.authority = authority;
        self
    }

    pub fn with_method(mut self, method: &'a str) -> Self {
        self.method = method;
        self
    }
}
