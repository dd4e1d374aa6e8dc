//! Unified error type for Arenagate.

use arenagate_loading::ProtocolError;
use arenagate_route::RouteError;
use arenagate_session::AuthError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `arenagate` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate. The
/// `#[from]` attributes let `?` convert sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ArenagateError {
    /// Login failed (rejected credential, unreachable backend).
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Loading coordinator misuse.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Invalid route configuration.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The configuration source could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
