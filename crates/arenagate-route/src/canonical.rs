//! Legacy path canonicalization.

use std::collections::BTreeMap;

use crate::{AuthState, GuardDecision, NavigationGuard, NavigationRequest};

/// Redirects legacy aliases (`/home`) to their canonical path (`/`).
///
/// Stateless and independent of the session: the same alias redirects
/// whether or not anyone is signed in.
#[derive(Debug, Clone, Default)]
pub struct CanonicalGuard {
    aliases: BTreeMap<String, String>,
}

impl CanonicalGuard {
    pub fn new(aliases: BTreeMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Adds or replaces one alias.
    pub fn alias(mut self, legacy: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(legacy.into(), canonical.into());
        self
    }

    pub fn evaluate(&self, request: &NavigationRequest) -> GuardDecision {
        match self.aliases.get(request.path()) {
            Some(canonical) => GuardDecision::RedirectTo(canonical.clone()),
            None => GuardDecision::Proceed,
        }
    }
}

impl NavigationGuard for CanonicalGuard {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn check(&self, request: &NavigationRequest, _state: AuthState) -> GuardDecision {
        self.evaluate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_alias() -> CanonicalGuard {
        CanonicalGuard::default().alias("/home", "/")
    }

    #[test]
    fn test_alias_redirects_regardless_of_state() {
        let guard = home_alias();
        let req = NavigationRequest::new("/home", "/about");

        for state in [AuthState::Authenticated, AuthState::Unauthenticated] {
            assert_eq!(guard.check(&req, state), GuardDecision::RedirectTo("/".into()));
        }
    }

    #[test]
    fn test_alias_matches_path_ignoring_query() {
        let req = NavigationRequest::new("/home?ref=nav", "/");
        assert_eq!(home_alias().evaluate(&req), GuardDecision::RedirectTo("/".into()));
    }

    #[test]
    fn test_non_alias_proceeds() {
        let guard = home_alias();

        assert!(guard.evaluate(&NavigationRequest::new("/", "/home")).is_proceed());
        assert!(guard.evaluate(&NavigationRequest::new("/homepage", "/")).is_proceed());
        assert!(guard.evaluate(&NavigationRequest::new("", "/")).is_proceed());
    }
}
