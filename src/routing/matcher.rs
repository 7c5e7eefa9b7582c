//! Route matching logic.
//!
//! # Responsibilities
//! - Match host header (exact match, case-insensitive)
//! - Match exact path or path prefix (case-insensitive)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Matching works on borrowed host/path so it can run outside a request
//! - Empty condition = always matches (wildcard)
//! - No regex to guarantee O(n) matching

/// Trait for matching a request target against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the host and path match this condition.
    fn matches(&self, host: Option<&str>, path: &str) -> bool;
}

/// Matches the Host header.
#[derive(Debug, Clone)]
pub struct HostMatcher {
    expected_host: String,
}

impl HostMatcher {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            expected_host: host.into(),
        }
    }
}

impl Matcher for HostMatcher {
    fn matches(&self, host: Option<&str>, _path: &str) -> bool {
        host.map(|h| h.eq_ignore_ascii_case(&self.expected_host))
            .unwrap_or(false)
    }
}

/// Matches one path, whatever its casing or trailing slashes.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, _host: Option<&str>, path: &str) -> bool {
        path.trim_end_matches('/')
            .eq_ignore_ascii_case(self.path.trim_end_matches('/'))
    }
}

/// Matches the request path prefix, ignoring ASCII case.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, _host: Option<&str>, path: &str) -> bool {
        let prefix = self.prefix.as_bytes();
        path.as_bytes()
            .get(..prefix.len())
            .map(|head| head.eq_ignore_ascii_case(prefix))
            .unwrap_or(false)
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, host: Option<&str>, path: &str) -> bool {
        self.matchers.iter().all(|m| m.matches(host, path))
    }
}
