//! Error types for the session layer.

/// Errors that can occur while logging in.
///
/// Both variants are recoverable: the session store leaves the current
/// identity untouched and the caller (usually the UI) surfaces the
/// message to the user. Retrying is the authenticator's business, not
/// the store's.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The credential was rejected by the
    /// [`Authenticator`](crate::Authenticator).
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The authenticator could not reach whatever verifies credentials.
    #[error("authentication transport failed: {0}")]
    Transport(String),
}
