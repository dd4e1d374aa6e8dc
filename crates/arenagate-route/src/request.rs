//! The values that flow in and out of a guard.

use std::fmt;

// ---------------------------------------------------------------------------
// NavigationRequest
// ---------------------------------------------------------------------------

/// One navigation attempt, handed to the guards before it completes.
///
/// `target_path` is the *full* requested path, including any query string
/// or fragment (`/tournaments?new=1`). Route matching uses only the path
/// portion, see [`path`](Self::path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: String,
    pub origin_path: String,
}

impl NavigationRequest {
    pub fn new(target_path: impl Into<String>, origin_path: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
            origin_path: origin_path.into(),
        }
    }

    /// The target without its query string or fragment.
    pub fn path(&self) -> &str {
        let end = self.target_path.find(['?', '#']).unwrap_or(self.target_path.len());
        &self.target_path[..end]
    }

    /// `true` if there is nothing to route on (empty or blank target).
    pub fn is_malformed(&self) -> bool {
        self.path().trim().is_empty()
    }

    /// Looks up a query parameter on the target and percent-decodes it.
    ///
    /// Returns the first occurrence, or `None` if the parameter is absent
    /// or does not decode to valid UTF-8.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let before_fragment = self.target_path.split('#').next().unwrap_or_default();
        let query = before_fragment.split_once('?')?.1;

        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
    }
}

// ---------------------------------------------------------------------------
// GuardDecision
// ---------------------------------------------------------------------------

/// What the navigation layer must do with an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation complete.
    Proceed,

    /// Abandon the navigation and go here instead.
    RedirectTo(String),
}

impl GuardDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// The redirect target, if this is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo(path) => Some(path),
        }
    }
}

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed => write!(f, "Proceed"),
            Self::RedirectTo(path) => write!(f, "RedirectTo({path})"),
        }
    }
}
