//! Navigation guards for Arenagate.
//!
//! Every navigation attempt is checked before it completes. A guard looks
//! at the requested path and a snapshot of the session state and answers
//! with a [`GuardDecision`]: proceed, or redirect somewhere else. Guards
//! are synchronous and never suspend.
//!
//! # Key types
//!
//! - [`NavigationGuard`] — the trait every guard implements
//! - [`RouteGuard`] — login/registration redirects driven by session state
//! - [`CanonicalGuard`] — rewrites legacy path aliases to canonical paths
//! - [`GuardChain`] — runs guards in order, first redirect wins
//! - [`RouteConfig`] — which paths are home, login, registration, aliases

mod auth;
mod canonical;
mod config;
mod error;
mod guard;
mod request;

pub use arenagate_session::AuthState;
pub use auth::RouteGuard;
pub use canonical::CanonicalGuard;
pub use config::RouteConfig;
pub use error::RouteError;
pub use guard::{GuardChain, NavigationGuard};
pub use request::{GuardDecision, NavigationRequest};
