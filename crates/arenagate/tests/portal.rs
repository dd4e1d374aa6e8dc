//! End-to-end tests for `Portal`: session, loading and guards together.
//!
//! Time is paused so the simulated login round trip resolves instantly
//! and observers can sample state at fixed points in between.

use std::sync::Arc;
use std::time::Duration;

use arenagate::prelude::*;
use tokio::time::sleep;

// =========================================================================
// Helpers
// =========================================================================

fn portal() -> Portal<SimulatedAuthenticator> {
    Portal::builder().build_simulated().expect("default config is valid")
}

fn nav(target: &str) -> NavigationRequest {
    NavigationRequest::new(target, "/")
}

fn redirect(path: &str) -> GuardDecision {
    GuardDecision::RedirectTo(path.into())
}

/// Rejects every credential.
struct Locked;

impl Authenticator for Locked {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<Identity, AuthError> {
        sleep(Duration::from_millis(200)).await;
        Err(AuthError::Transport("auth service unreachable".into()))
    }
}

/// Keeps everyone out of `/admin`.
struct AdminOnly;

impl NavigationGuard for AdminOnly {
    fn name(&self) -> &'static str {
        "admin"
    }

    fn check(&self, request: &NavigationRequest, _state: AuthState) -> GuardDecision {
        if request.path() == "/admin" {
            GuardDecision::RedirectTo("/".into())
        } else {
            GuardDecision::Proceed
        }
    }
}

// =========================================================================
// Navigation across the session lifecycle
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_navigation_follows_login_and_logout() {
    let portal = portal();

    assert_eq!(portal.navigate(&nav("/tournaments")), redirect("/login?redirect=%2Ftournaments"));
    assert_eq!(portal.navigate(&nav("/login")), GuardDecision::Proceed);

    portal.login("nightowl", "pw").await.unwrap();

    assert_eq!(portal.navigate(&nav("/tournaments")), GuardDecision::Proceed);
    assert_eq!(portal.navigate(&nav("/login")), redirect("/"));
    assert_eq!(portal.navigate(&nav("/register")), redirect("/"));

    portal.logout();
    portal.logout();

    assert!(portal.identity().is_none());
    assert_eq!(portal.navigate(&nav("/profile")), redirect("/login?redirect=%2Fprofile"));
}

#[tokio::test(start_paused = true)]
async fn test_home_alias_redirects_in_both_states() {
    let portal = portal();
    assert_eq!(portal.navigate(&nav("/home")), redirect("/"));

    portal.login("nightowl", "pw").await.unwrap();
    assert_eq!(portal.navigate(&nav("/home")), redirect("/"));
}

#[tokio::test(start_paused = true)]
async fn test_navigation_during_login_sees_pre_login_state() {
    let portal = portal();

    let observer = async {
        sleep(Duration::from_millis(500)).await;
        assert!(portal.is_busy());
        // The login has not completed, so the guard still sees a signed-out actor.
        assert_eq!(portal.navigate(&nav("/dashboard")), redirect("/login?redirect=%2Fdashboard"));
    };
    let (result, ()) = tokio::join!(portal.login("nightowl", "pw"), observer);

    result.unwrap();
    assert!(!portal.is_busy());
    assert_eq!(portal.navigate(&nav("/dashboard")), GuardDecision::Proceed);
}

#[tokio::test(start_paused = true)]
async fn test_resume_target_after_login_redirect() {
    let portal = portal();

    let GuardDecision::RedirectTo(login_url) = portal.navigate(&nav("/tournaments?new=1")) else {
        panic!("signed-out navigation must redirect");
    };
    portal.login("nightowl", "pw").await.unwrap();

    let resumed = portal.resume_target(&nav(&login_url));
    assert_eq!(resumed, "/tournaments?new=1");
    assert!(portal.navigate(&nav(&resumed)).is_proceed());
}

// =========================================================================
// Failures
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_failed_login_surfaces_auth_error_and_leaves_state_clean() {
    let portal = Portal::builder().build(Locked).unwrap();

    let result = portal.login("nightowl", "pw").await;

    assert!(matches!(result, Err(ArenagateError::Auth(AuthError::Transport(_)))));
    assert!(!portal.is_authenticated());
    assert!(!portal.is_busy());
    assert_eq!(portal.loading().active_count(), 0);
}

#[test]
fn test_build_rejects_invalid_routes() {
    let config = PortalConfig {
        routes: RouteConfig {
            login: "login".into(),
            ..RouteConfig::default()
        },
        ..PortalConfig::default()
    };

    let result = Portal::builder().config(config).build_simulated();

    assert!(matches!(result, Err(ArenagateError::Route(_))));
}

// =========================================================================
// Builder options
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_extra_guard_runs_after_builtins() {
    let portal = Portal::builder().guard(AdminOnly).build_simulated().unwrap();
    portal.login("nightowl", "pw").await.unwrap();

    assert_eq!(portal.navigate(&nav("/admin")), redirect("/"));
    assert_eq!(portal.navigate(&nav("/faq")), GuardDecision::Proceed);
}

#[tokio::test(start_paused = true)]
async fn test_config_controls_paths_and_login_delay() {
    let config = PortalConfig::from_json_str(
        r#"{"routes": {"login": "/sign-in", "redirect_param": "next"}, "login_delay_ms": 50}"#,
    )
    .unwrap();
    let portal = Portal::builder().config(config).build_simulated().unwrap();

    assert_eq!(portal.navigate(&nav("/faq")), redirect("/sign-in?next=%2Ffaq"));

    let start = tokio::time::Instant::now();
    portal.login("nightowl", "pw").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert!(start.elapsed() < Duration::from_secs(1));
}

// =========================================================================
// Shared loading state
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_data_loads_and_login_share_one_busy_signal() {
    let portal = Arc::new(portal());
    let mut busy = portal.loading().subscribe();

    let loader = Arc::clone(&portal);
    let fetch = tokio::spawn(async move {
        let pages = [1u64, 2, 3].map(|secs| sleep(Duration::from_secs(secs)));
        loader.loading().track_all(pages).await;
    });

    assert_eq!(busy.changed().await, Some(true));
    portal.login("nightowl", "pw").await.unwrap();
    // Login (1s) finished, the 3s fetch has not.
    assert!(portal.is_busy());

    assert_eq!(busy.changed().await, Some(false));
    fetch.await.unwrap();
    assert!(portal.is_authenticated());
}
