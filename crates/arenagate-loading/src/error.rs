//! Error types for the loading layer.

/// Misuse of the begin/end protocol by a caller.
///
/// These always indicate a programming defect, never a valid state
/// transition. The coordinator logs them at `error` level and clamps,
/// so the active count is never corrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// An operation ended while no operations were outstanding.
    /// The count stays at zero.
    #[error("operation {0} ended with no operations outstanding")]
    Underflow(u64),

    /// A handle was ended on a coordinator that did not begin it.
    /// From this coordinator's point of view that is an end without a
    /// matching begin, so its count is left untouched.
    #[error("operation {0} was ended on a coordinator that did not begin it")]
    ForeignHandle(u64),
}
