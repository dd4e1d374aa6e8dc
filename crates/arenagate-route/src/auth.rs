//! Auth-driven navigation rules.
//!
//! Rules, checked in this order for every attempt:
//!
//! ```text
//! 1. target is login or register  AND authenticated    → RedirectTo(home)
//! 2. target is not login          AND unauthenticated  → RedirectTo(login?redirect=<target>)
//! 3. otherwise                                          → Proceed
//! ```
//!
//! The login page stays reachable while signed out (rule 2 excludes it),
//! otherwise nobody could ever sign in. Registration is *not* excluded:
//! a signed-out actor asking for it is sent to login like any other page.

use crate::{AuthState, GuardDecision, NavigationGuard, NavigationRequest, RouteConfig};

/// Allows, or redirects, a navigation based on whether anyone is signed in.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    config: RouteConfig,
}

impl RouteGuard {
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Applies the three rules to `request`.
    ///
    /// An empty or blank target is let through (fail-open) so a broken
    /// link can never start a redirect loop.
    pub fn evaluate(&self, request: &NavigationRequest, state: AuthState) -> GuardDecision {
        if request.is_malformed() {
            tracing::warn!(
                to = %request.target_path,
                from = %request.origin_path,
                "navigation target is empty, letting it through"
            );
            return GuardDecision::Proceed;
        }

        let path = request.path();
        let to_login = path == self.config.login;
        let to_register = path == self.config.register;

        match state {
            AuthState::Authenticated if to_login || to_register => {
                GuardDecision::RedirectTo(self.config.home.clone())
            }
            AuthState::Unauthenticated if !to_login => {
                GuardDecision::RedirectTo(self.login_url(&request.target_path))
            }
            _ => GuardDecision::Proceed,
        }
    }

    /// The login URL carrying `full_path` as the redirect parameter.
    pub fn login_url(&self, full_path: &str) -> String {
        format!(
            "{}?{}={}",
            self.config.login,
            self.config.redirect_param,
            urlencoding::encode(full_path)
        )
    }

    /// Where to go after a successful login from `login_request`.
    ///
    /// Reads the redirect parameter this guard put on the login URL. Only
    /// same-site absolute paths are honoured; anything else (missing,
    /// undecodable, `//evil.example`, `https://...`) falls back to home.
    pub fn resume_target(&self, login_request: &NavigationRequest) -> String {
        login_request
            .query_param(&self.config.redirect_param)
            .filter(|target| is_local_path(target))
            .unwrap_or_else(|| self.config.home.clone())
    }
}

impl NavigationGuard for RouteGuard {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn check(&self, request: &NavigationRequest, state: AuthState) -> GuardDecision {
        self.evaluate(request, state)
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}
