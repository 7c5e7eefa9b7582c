//! Canonicalization decision logic.
//!
//! # Responsibilities
//! - Trailing slash normalization (append or strip, per configuration)
//! - Lowercasing of path and query string
//! - Rebuilding the redirect target from the corrected parts
//!
//! # Design Decisions
//! - Stripping slashes ignores `no_trailing_slash_rule`; only appending honours it
//! - `no_trailing_slash_rule` also gates lowercasing, path and query alike
//! - Lengths are byte lengths; request paths start with an ASCII `/`

use std::borrow::Cow;

use crate::canonical::decision::{Decision, Fixes, Redirect};
use crate::canonical::options::{CanonicalOptions, Exemptions, RequestView};

/// Decide whether `request` is in canonical form.
///
/// Non-GET requests are always reported canonical. Every rule that fires
/// contributes to the same redirect target.
pub fn evaluate(
    request: &RequestView<'_>,
    options: &CanonicalOptions,
    exemptions: Exemptions,
) -> Decision {
    if !request.method.eq_ignore_ascii_case("GET") {
        return Decision::Canonical;
    }

    let mut path = Cow::Borrowed(request.path);
    let mut query = Cow::Borrowed(request.query);
    let mut fixes = Fixes::default();

    let beyond_root = request.path.len() > 1;
    let has_query = !request.query.is_empty();

    if beyond_root {
        if options.append_trailing_slash {
            if !exemptions.no_trailing_slash_rule && !path.ends_with('/') {
                path.to_mut().push('/');
                fixes.trailing_slash = true;
            }
        } else if path.ends_with('/') {
            path = Cow::Owned(path.trim_end_matches('/').to_owned());
            fixes.trailing_slash = true;
        }
    }

    if (beyond_root || has_query) && options.lowercase_urls && !exemptions.no_trailing_slash_rule {
        if has_uppercase(&path) {
            path = Cow::Owned(path.to_lowercase());
            fixes.lowercase_path = true;
        }

        if has_query && !exemptions.no_lowercase_query_string_rule && has_uppercase(&query) {
            query = Cow::Owned(query.to_lowercase());
            fixes.lowercase_query = true;
        }
    }

    if fixes.is_empty() {
        return Decision::Canonical;
    }

    Decision::Redirect(Redirect {
        location: build_location(request.scheme, request.authority, &path, &query),
        fixes,
    })
}

/// Rebuild a redirect target from its parts.
///
/// An empty path becomes `/`. Without an authority the target is
/// origin-relative.
pub fn build_location(scheme: &str, authority: &str, path: &str, query: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    if authority.is_empty() {
        format!("{}{}", path, query)
    } else {
        format!("{}://{}{}{}", scheme, authority, path, query)
    }
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPEND: CanonicalOptions = CanonicalOptions {
        append_trailing_slash: true,
        lowercase_urls: false,
    };

    const STRIP: CanonicalOptions = CanonicalOptions {
        append_trailing_slash: false,
        lowercase_urls: false,
    };

    const APPEND_LOWER: CanonicalOptions = CanonicalOptions {
        append_trailing_slash: true,
        lowercase_urls: true,
    };

    const STRIP_LOWER: CanonicalOptions = CanonicalOptions {
        append_trailing_slash: false,
        lowercase_urls: true,
    };

    const ALL_OPTIONS: [CanonicalOptions; 4] = [APPEND, STRIP, APPEND_LOWER, STRIP_LOWER];

    const NO_SLASH_RULE: Exemptions = Exemptions {
        no_trailing_slash_rule: true,
        no_lowercase_query_string_rule: false,
    };

    const NO_QUERY_RULE: Exemptions = Exemptions {
        no_trailing_slash_rule: false,
        no_lowercase_query_string_rule: true,
    };

    fn check(path: &str, query: &str, options: CanonicalOptions, exemptions: Exemptions) -> Decision {
        evaluate(&RequestView::get(path, query), &options, exemptions)
    }

    fn location(path: &str, query: &str, options: CanonicalOptions) -> Option<String> {
        check(path, query, options, Exemptions::none())
            .location()
            .map(str::to_owned)
    }

    #[test]
    fn test_append_trailing_slash() {
        for path in ["/about", "/a", "/blog/post-1", "/x.html"] {
            assert_eq!(location(path, "", APPEND), Some(format!("{}/", path)));
            assert!(check(&format!("{}/", path), "", APPEND, Exemptions::none()).is_canonical());
        }
    }

    #[test]
    fn test_strip_trailing_slash() {
        for path in ["/contact", "/a", "/blog/post-1"] {
            assert_eq!(location(&format!("{}/", path), "", STRIP), Some(path.to_string()));
            assert_eq!(location(&format!("{}///", path), "", STRIP), Some(path.to_string()));
            assert!(check(path, "", STRIP, Exemptions::none()).is_canonical());
        }
    }

    #[test]
    fn test_root_is_always_canonical() {
        for options in ALL_OPTIONS {
            for path in ["/", ""] {
                assert!(check(path, "", options, Exemptions::none()).is_canonical());
                assert!(check(path, "", options, NO_SLASH_RULE).is_canonical());
            }
        }
    }

    #[test]
    fn test_lowercase_path() {
        assert_eq!(location("/About/Us", "", STRIP_LOWER), Some("/about/us".into()));
        assert_eq!(location("/ÉCOLE", "", STRIP_LOWER), Some("/école".into()));
        assert_eq!(location("/About/Us", "", STRIP), None);
    }

    #[test]
    fn test_lowercase_query_string() {
        assert_eq!(location("/search", "?Q=Rust", STRIP_LOWER), Some("/search?q=rust".into()));
        assert_eq!(location("/", "?Q=Rust", STRIP_LOWER), Some("/?q=rust".into()));
        assert_eq!(location("", "?Q=Rust", STRIP_LOWER), Some("/?q=rust".into()));
        assert_eq!(location("/search", "?Q=Rust", STRIP), None);

        let decision = check("/search", "?Q=Rust", STRIP_LOWER, NO_QUERY_RULE);
        assert!(decision.is_canonical());

        let decision = check("/Search", "?Q=Rust", STRIP_LOWER, NO_QUERY_RULE);
        assert_eq!(decision.location(), Some("/search?Q=Rust"));
        assert_eq!(
            decision.fixes(),
            Fixes {
                lowercase_path: true,
                ..Fixes::default()
            }
        );
    }

    #[test]
    fn test_combined_fixes_yield_single_redirect() {
        let decision = check("/About", "?Page=2", APPEND_LOWER, Exemptions::none());
        assert_eq!(decision.location(), Some("/about/?page=2"));
        assert_eq!(
            decision.fixes(),
            Fixes {
                trailing_slash: true,
                lowercase_path: true,
                lowercase_query: true,
            }
        );

        let decision = check("/Contact//", "", STRIP_LOWER, Exemptions::none());
        assert_eq!(decision.location(), Some("/contact"));
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!(location("/About", "", APPEND_LOWER), Some("/about/".into()));
        assert_eq!(location("/contact/", "", STRIP), Some("/contact".into()));
        assert_eq!(location("/contact/", "", STRIP_LOWER), Some("/contact".into()));
        for options in ALL_OPTIONS {
            assert_eq!(location("/", "", options), None);
        }
    }

    #[test]
    fn test_redirect_target_is_canonical() {
        let cases = [
            ("/About", ""),
            ("/About/", "?A=B"),
            ("/a//", "?x=Y"),
            ("//", ""),
            ("/ÉCOLE/", ""),
            ("/", "?Z=1"),
        ];
        for options in ALL_OPTIONS {
            for (path, query) in cases {
                let first = evaluate(
                    &RequestView::get(path, query).with_origin("https", "example.com"),
                    &options,
                    Exemptions::none(),
                );
                let Some(target) = first.location() else { continue };
                let rest = target.strip_prefix("https://example.com").unwrap();
                let (next_path, next_query) = match rest.find('?') {
                    Some(i) => rest.split_at(i),
                    None => (rest, ""),
                };
                let second = evaluate(
                    &RequestView::get(next_path, next_query).with_origin("https", "example.com"),
                    &options,
                    Exemptions::none(),
                );
                assert!(second.is_canonical(), "{:?} then {} for {:?}", path, target, options);
            }
        }
    }

    #[test]
    fn test_append_respects_slash_exemption() {
        assert!(check("/feed.xml", "", APPEND, NO_SLASH_RULE).is_canonical());
    }

    #[test]
    fn test_strip_ignores_slash_exemption() {
        let decision = check("/feed/", "", STRIP, NO_SLASH_RULE);
        assert_eq!(decision.location(), Some("/feed"));
    }

    #[test]
    fn test_slash_exemption_suppresses_lowercasing() {
        assert!(check("/Feed.XML", "?A=1", APPEND_LOWER, NO_SLASH_RULE).is_canonical());

        let decision = check("/Feed/", "?A=1", STRIP_LOWER, NO_SLASH_RULE);
        assert_eq!(decision.location(), Some("/Feed?A=1"));
    }

    #[test]
    fn test_non_get_is_canonical() {
        for method in ["POST", "PUT", "DELETE", "HEAD"] {
            let view = RequestView::get("/About", "?Q=1").with_method(method);
            assert!(evaluate(&view, &APPEND_LOWER, Exemptions::none()).is_canonical());
        }
        let view = RequestView::get("/About", "").with_method("get");
        assert!(!evaluate(&view, &APPEND_LOWER, Exemptions::none()).is_canonical());
    }

    #[test]
    fn test_absolute_location() {
        let view = RequestView::get("/About", "?Q=1").with_origin("https", "Example.com:8443");
        let decision = evaluate(&view, &STRIP_LOWER, Exemptions::none());
        assert_eq!(decision.location(), Some("https://Example.com:8443/about?q=1"));
    }

    #[test]
    fn test_build_location() {
        assert_eq!(build_location("http", "", "", ""), "/");
        assert_eq!(build_location("http", "", "/a", "?b"), "/a?b");
        assert_eq!(build_location("https", "h.io", "", "?q=1"), "https://h.io/?q=1");
    }
}
