use std::time::Duration;

use arenagate::prelude::*;
use arenagate::init_tracing;
use tracing::{info, warn};

/// Redirect hops the navigation layer follows before giving up.
const MAX_HOPS: usize = 5;

// ---------------------------------------------------------------------------
// Navigation layer
// ---------------------------------------------------------------------------

/// Follows guard redirects until a navigation proceeds.
///
/// Returns the path that was finally rendered, or `None` if the guards
/// kept redirecting past `MAX_HOPS`.
fn follow<A: Authenticator>(portal: &Portal<A>, target: &str, origin: &str) -> Option<String> {
    let mut request = NavigationRequest::new(target, origin);

    for _ in 0..MAX_HOPS {
        match portal.navigate(&request) {
            GuardDecision::Proceed => return Some(request.target_path),
            GuardDecision::RedirectTo(next) => {
                info!(from = %request.target_path, to = %next, "redirect");
                request = NavigationRequest::new(next, request.target_path);
            }
        }
    }

    warn!(path = %target, "too many redirects");
    None
}

/// Signs in registered players only, after the simulated round trip.
struct Roster {
    backend: SimulatedAuthenticator,
    players: &'static [&'static str],
}

impl Authenticator for Roster {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let identity = self.backend.authenticate(credentials).await?;
        if !self.players.contains(&identity.handle.as_str()) {
            return Err(AuthError::InvalidCredential(format!("{} is not registered", identity.handle)));
        }
        Ok(identity)
    }
}

/// Simulated page data loads for the landing page sections.
async fn fetch_landing_sections(loading: &LoadingCoordinator) {
    let sections = [("featured-games", 1), ("top-teams", 2), ("tournaments", 3)].map(|(name, secs)| async move {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        name
    });

    for name in loading.track_all(sections).await {
        info!(section = name, "section loaded");
    }
}

// ---------------------------------------------------------------------------
// Walkthrough
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), ArenagateError> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => PortalConfig::from_file(path)?,
        None => PortalConfig::default(),
    };
    let roster = Roster {
        backend: SimulatedAuthenticator::new(config.login_delay()),
        players: &["nightowl", "kestrel"],
    };
    let portal = Portal::builder().config(config).build(roster)?;

    // Report busy/idle flips the way a loading spinner would.
    let mut busy = portal.loading().subscribe();
    tokio::spawn(async move {
        while let Some(is_busy) = busy.changed().await {
            info!(is_busy, "loading indicator");
        }
    });

    // A signed-out visitor follows a deep link.
    let landed = follow(&portal, "/tournaments?new=1", "/");
    info!(landed = ?landed, "visitor deep link");
    follow(&portal, "/home", "/");

    // An unregistered player is turned away; the session stays signed out.
    if let Err(e) = portal.login("ghost", "pw").await {
        warn!(error = %e, "login rejected");
    }

    // Log in while the landing page loads its sections.
    let (login, ()) = tokio::join!(portal.login("nightowl", "hunter2"), fetch_landing_sections(portal.loading()));
    login?;

    // Continue to where the visitor originally wanted to go.
    if let Some(login_page) = landed {
        let resumed = portal.resume_target(&NavigationRequest::new(login_page, "/"));
        follow(&portal, &resumed, "/login");
    }

    // Signed in: login is off limits.
    follow(&portal, "/login", "/profile");

    portal.logout();
    portal.logout();
    info!(authenticated = portal.is_authenticated(), "signed out");

    portal.loading().wait_idle().await;
    Ok(())
}
