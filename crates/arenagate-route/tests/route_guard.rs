//! Navigation scenarios run through the standard guard chain.
//!
//! Each test is one row of the decision table: session state + target in,
//! decision out.

use arenagate_route::{GuardChain, GuardDecision, NavigationRequest, RouteConfig, RouteGuard};

use arenagate_route::AuthState::{Authenticated, Unauthenticated};

fn chain() -> GuardChain {
    GuardChain::standard(&RouteConfig::default())
}

fn nav(target: &str, origin: &str) -> NavigationRequest {
    NavigationRequest::new(target, origin)
}

fn redirect(path: &str) -> GuardDecision {
    GuardDecision::RedirectTo(path.into())
}

// =========================================================================
// Auth rules
// =========================================================================

#[test]
fn test_unauthenticated_dashboard_redirects_to_login_with_intent() {
    let decision = chain().evaluate(&nav("/dashboard", "/dashboard"), Unauthenticated);
    assert_eq!(decision, redirect("/login?redirect=%2Fdashboard"));
}

#[test]
fn test_authenticated_login_redirects_home() {
    assert_eq!(chain().evaluate(&nav("/login", "/"), Authenticated), redirect("/"));
}

#[test]
fn test_unauthenticated_login_proceeds() {
    assert_eq!(chain().evaluate(&nav("/login", "/"), Unauthenticated), GuardDecision::Proceed);
}

#[test]
fn test_authenticated_tournaments_proceeds() {
    assert_eq!(chain().evaluate(&nav("/tournaments", "/"), Authenticated), GuardDecision::Proceed);
}

#[test]
fn test_empty_target_proceeds_in_both_states() {
    for state in [Authenticated, Unauthenticated] {
        assert_eq!(chain().evaluate(&nav("", "/"), state), GuardDecision::Proceed);
    }
}

// =========================================================================
// Canonicalization
// =========================================================================

#[test]
fn test_home_alias_redirects_to_root_regardless_of_state() {
    for state in [Authenticated, Unauthenticated] {
        assert_eq!(chain().evaluate(&nav("/home", "/faq"), state), redirect("/"));
    }
}

#[test]
fn test_aliases_come_from_config() {
    let config: RouteConfig = serde_json::from_str(r#"{"aliases": {"/events": "/tournaments"}}"#).unwrap();
    let chain = GuardChain::standard(&config);

    assert_eq!(chain.evaluate(&nav("/events", "/"), Authenticated), redirect("/tournaments"));
    // Replacing the table drops the default `/home` alias.
    assert_eq!(chain.evaluate(&nav("/home", "/"), Authenticated), GuardDecision::Proceed);
}

// =========================================================================
// Full redirect round trip
// =========================================================================

#[test]
fn test_login_redirect_then_resume_reaches_original_target() {
    let chain = chain();
    let guard = RouteGuard::new(RouteConfig::default());
    let wanted = nav("/tournaments?new=1", "/");

    // 1. Signed out: sent to login with the full target preserved.
    let login_url = match chain.evaluate(&wanted, Unauthenticated) {
        GuardDecision::RedirectTo(url) => url,
        GuardDecision::Proceed => panic!("signed-out navigation must redirect"),
    };

    // 2. The login page itself is reachable.
    let login = nav(&login_url, "/");
    assert!(chain.evaluate(&login, Unauthenticated).is_proceed());

    // 3. After login the navigation layer resumes the original target,
    //    which now proceeds.
    let resumed = guard.resume_target(&login);
    assert_eq!(resumed, "/tournaments?new=1");
    assert!(chain.evaluate(&nav(&resumed, &login_url), Authenticated).is_proceed());
}
