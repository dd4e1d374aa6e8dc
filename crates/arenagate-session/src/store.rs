//! The session store: the single holder of "who is signed in".
//!
//! Responsibilities:
//! - Running `login` through the injected [`Authenticator`]
//! - Reporting every login to the shared [`LoadingCoordinator`]
//! - Clearing the identity on `logout`
//! - Exposing derived, read-only views (`is_authenticated`, `auth_state`)
//!
//! # Single writer
//!
//! The identity lives in a `tokio::sync::watch` channel whose sender is
//! private to this module. Only `login` and `logout` write it; everyone
//! else reads a snapshot or subscribes to changes. There is no stored
//! "authenticated" flag anywhere, so it cannot drift from the identity.

use arenagate_loading::LoadingCoordinator;
use tokio::sync::watch;

use crate::{AuthError, AuthState, Authenticator, Credentials, Identity};

/// Holds the current session for the lifetime of the process.
///
/// Constructed explicitly and passed to whoever needs it (guards, UI),
/// so tests can build a fresh store each time.
///
/// ## Lifecycle
///
/// ```text
///   new() ──→ [None] ──login() ok──→ [Some(identity)]
///               ↑                           │
///               └─────────logout()──────────┘
///
///   login() err ──→ identity unchanged
/// ```
pub struct SessionStore<A: Authenticator> {
    /// The current identity. `None` means signed out.
    identity: watch::Sender<Option<Identity>>,

    /// Verifies credentials during `login`.
    authenticator: A,

    /// Told about every login so the UI can show a busy indicator.
    loading: LoadingCoordinator,
}

impl<A: Authenticator> SessionStore<A> {
    /// Creates a signed-out store.
    pub fn new(authenticator: A, loading: LoadingCoordinator) -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            identity,
            authenticator,
            loading,
        }
    }

    /// Signs in with the given handle and secret.
    ///
    /// The login is tracked on the loading coordinator for its whole
    /// duration. The tracking handle is released on every exit path:
    /// success, error, or the returned future being dropped before it
    /// completes. Logging in while already signed in replaces the
    /// current identity.
    ///
    /// # Errors
    /// Whatever the authenticator returns. On error the current identity
    /// is left exactly as it was.
    pub async fn login(
        &self,
        handle: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<(), AuthError> {
        let credentials = Credentials::new(handle, secret);
        let _op = self.loading.begin_operation();

        tracing::debug!(?credentials, "login started");

        match self.authenticator.authenticate(&credentials).await {
            Ok(identity) => {
                tracing::info!(handle = %identity.handle, "logged in");
                self.identity.send_replace(Some(identity));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(handle = %credentials.handle, error = %e, "login failed");
                Err(e)
            }
        }
    }

    /// Signs out. Calling it while already signed out is a no-op.
    pub fn logout(&self) {
        match self.identity.send_replace(None) {
            Some(previous) => tracing::info!(handle = %previous.handle, "logged out"),
            None => tracing::debug!("logout with no active session"),
        }
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// `true` while an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// The state guards evaluate navigation against.
    pub fn auth_state(&self) -> AuthState {
        self.identity.borrow().as_ref().into()
    }

    /// Subscribes to identity changes (login and logout).
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    /// The coordinator logins are reported to.
    pub fn loading(&self) -> &LoadingCoordinator {
        &self.loading
    }
}

// =========================================================================
// Tests
// =========================================================================
