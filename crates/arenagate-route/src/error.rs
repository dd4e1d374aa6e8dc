//! Error types for the route layer.

/// Errors from validating a [`RouteConfig`](crate::RouteConfig).
///
/// Guard evaluation itself never fails; only configuration can be wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A configured route is not an absolute path.
    #[error("route `{field}` must start with '/', got {path:?}")]
    InvalidPath { field: &'static str, path: String },

    /// The login redirect parameter name is empty.
    #[error("redirect parameter name must not be empty")]
    EmptyRedirectParam,

    /// An alias points at itself, which would redirect forever.
    #[error("alias {0:?} redirects to itself")]
    AliasLoop(String),
}
