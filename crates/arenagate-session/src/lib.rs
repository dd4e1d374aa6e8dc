//! Session management for Arenagate.
//!
//! This crate holds the portal's notion of "who is signed in":
//!
//! 1. **Authentication** — verifying credentials ([`Authenticator`] trait)
//! 2. **Session state** — the current [`Identity`], or none ([`SessionStore`])
//! 3. **Busy reporting** — every login registers with the shared
//!    [`LoadingCoordinator`](arenagate_loading::LoadingCoordinator)
//!
//! # How it fits in the stack
//!
//! ```text
//! Route Layer (above)  ← reads the session to allow or redirect navigation
//!     ↕
//! Session Layer (this crate)  ← owns identity, runs login/logout
//!     ↕
//! Loading Layer (below)  ← counts in-flight operations for the UI
//! ```

#![allow(async_fn_in_trait)]

mod auth;
mod error;
mod session;
mod store;

pub use auth::{Authenticator, SimulatedAuthenticator};
pub use error::AuthError;
pub use session::{AuthState, Credentials, Identity};
pub use store::SessionStore;
