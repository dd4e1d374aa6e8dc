//! Session types: who the actor is and what they signed in with.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The signed-in actor.
///
/// Produced by an [`Authenticator`](crate::Authenticator) and held by the
/// [`SessionStore`](crate::SessionStore) until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display handle, e.g. `"nightowl"`.
    pub handle: String,

    /// Reference to the actor's avatar image, if they have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    /// Creates an identity without an avatar.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            avatar: None,
        }
    }

    /// Attaches an avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// What a login form submits.
///
/// `Debug` never prints the secret, so credentials can travel through
/// `tracing` fields without leaking.
#[derive(Clone)]
pub struct Credentials {
    /// The handle the actor wants to sign in as.
    pub handle: String,
    secret: String,
}

impl Credentials {
    pub fn new(handle: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            secret: secret.into(),
        }
    }

    /// The password (or other secret) to verify.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("handle", &self.handle)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// Authentication state as seen by a guard.
///
/// Always derived from a session snapshot, never stored:
///
/// ```text
///   Unauthenticated ──(login ok)──→ Authenticated
///          ↑                             │
///          └───────────(logout)──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for AuthState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

impl<T> From<Option<&T>> for AuthState {
    fn from(identity: Option<&T>) -> Self {
        identity.is_some().into()
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => write!(f, "Authenticated"),
            Self::Unauthenticated => write!(f, "Unauthenticated"),
        }
    }
}
