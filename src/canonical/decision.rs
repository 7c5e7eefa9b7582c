//! Outcome of a canonicalization check.

use std::fmt;

use serde::Serialize;

/// Which rules fired for a non-canonical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Fixes {
    pub trailing_slash: bool,
    pub lowercase_path: bool,
    pub lowercase_query: bool,
}

impl Fixes {
    pub fn is_empty(&self) -> bool {
        !(self.trailing_slash || self.lowercase_path || self.lowercase_query)
    }

    /// Metric/log labels of the rules that fired.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.trailing_slash, "trailing_slash"),
            (self.lowercase_path, "lowercase_path"),
            (self.lowercase_query, "lowercase_query"),
        ]
        .into_iter()
        .filter_map(|(fired, label)| fired.then_some(label))
    }
}

impl fmt::Display for Fixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// A permanent redirect to the canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Fully qualified target, or origin-relative when the host is unknown.
    pub location: String,
    pub fixes: Fixes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The request URL is already canonical; proceed normally.
    Canonical,
    /// The request URL must be redirected (301) to the canonical form.
    Redirect(Redirect),
}

impl Decision {
    pub fn is_canonical(&self) -> bool {
        matches!(self, Decision::Canonical)
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Decision::Canonical => None,
            Decision::Redirect(redirect) => Some(&redirect.location),
        }
    }

    pub fn fixes(&self) -> Fixes {
        match self {
            Decision::Canonical => Fixes::default(),
            Decision::Redirect(redirect) => redirect.fixes,
        }
    }
}
