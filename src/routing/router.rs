//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the route serving a request
//! - Hand back that route's exemptions, or none
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in priority order (acceptable for typical route counts)

use crate::canonical::Exemptions;
use crate::config::RouteConfig;
use crate::routing::matcher::{AndMatcher, ExactPathMatcher, HostMatcher, Matcher, PathPrefixMatcher};

/// A route ready for matching.
#[derive(Debug)]
pub struct CompiledRoute {
    pub name: String,
    pub priority: u32,
    pub exemptions: Exemptions,
    matcher: AndMatcher,
}

impl CompiledRoute {
    pub fn compile(config: RouteConfig) -> Self {
        let exemptions = config.exemptions();
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();
        if let Some(host) = config.host {
            matchers.push(Box::new(HostMatcher::new(host)));
        }
        if let Some(path) = config.path {
            matchers.push(Box::new(ExactPathMatcher::new(path)));
        }
        if let Some(prefix) = config.path_prefix {
            matchers.push(Box::new(PathPrefixMatcher::new(prefix)));
        }

        Self {
            name: config.name,
            priority: config.priority,
            exemptions,
            matcher: AndMatcher::new(matchers),
        }
    }

    pub fn matches(&self, host: Option<&str>, path: &str) -> bool {
        self.matcher.matches(host, path)
    }
}

/// Resolves the exemptions of the route a request lands on.
#[derive(Debug, Default)]
pub struct ExemptionRouter {
    routes: Vec<CompiledRoute>,
}

impl ExemptionRouter {
    pub fn from_config(routes: Vec<RouteConfig>) -> Self {
        let mut routes: Vec<CompiledRoute> = routes.into_iter().map(CompiledRoute::compile).collect();
        // Stable: equal priorities keep declaration order.
        routes.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { routes }
    }

    /// The first route, by priority, matching `host` and `path`.
    pub fn resolve_route(&self, host: Option<&str>, path: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|route| route.matches(host, path))
    }

    pub fn resolve(&self, host: Option<&str>, path: &str) -> Exemptions {
        self.resolve_route(host, path)
            .map(|route| route.exemptions)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
