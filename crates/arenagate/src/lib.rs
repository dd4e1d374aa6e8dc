//! # Arenagate
//!
//! Client-side session and route authorization core for tournament portals.
//!
//! Arenagate keeps track of who is signed in, decides whether each
//! navigation may proceed or must be redirected, and tells the UI when
//! something is still loading. The navigation and UI layers stay outside:
//! they hand in a [`NavigationRequest`] and get a [`GuardDecision`] back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arenagate::prelude::*;
//!
//! # async fn run() -> Result<(), ArenagateError> {
//! let portal = Portal::builder().build_simulated()?;
//!
//! // Signed out: protected pages bounce to login, remembering the target.
//! let decision = portal.navigate(&NavigationRequest::new("/dashboard", "/"));
//! assert_eq!(decision, GuardDecision::RedirectTo("/login?redirect=%2Fdashboard".into()));
//!
//! portal.login("nightowl", "secret").await?;
//! assert!(portal.is_authenticated());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod portal;
mod telemetry;

pub use config::PortalConfig;
pub use error::ArenagateError;
pub use portal::{Portal, PortalBuilder};
pub use telemetry::init_tracing;

pub use arenagate_loading::{BusySignal, LoadingCoordinator, OperationHandle, ProtocolError};
pub use arenagate_route::{
    AuthState, CanonicalGuard, GuardChain, GuardDecision, NavigationGuard, NavigationRequest,
    RouteConfig, RouteError, RouteGuard,
};
pub use arenagate_session::{
    AuthError, Authenticator, Credentials, Identity, SessionStore, SimulatedAuthenticator,
};

pub mod prelude {
    pub use crate::{
        ArenagateError, AuthError, AuthState, Authenticator, Credentials, GuardDecision, Identity,
        LoadingCoordinator, NavigationGuard, NavigationRequest, Portal, PortalConfig, RouteConfig,
        SimulatedAuthenticator,
    };
}
