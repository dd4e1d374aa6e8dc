//! Loading coordination for Arenagate.
//!
//! Tracks how many asynchronous operations are in flight and exposes one
//! "system busy" signal for the UI layer. Operations may nest and overlap;
//! the coordinator stays busy until the *last* outstanding one ends.
//!
//! # Scoped acquisition
//!
//! Every operation is represented by an [`OperationHandle`]. Beginning an
//! operation increments the counter, and the handle decrements it exactly
//! once: either explicitly through [`LoadingCoordinator::end_operation`]
//! or implicitly when the handle is dropped. Because release lives in
//! `Drop`, an operation that fails, panics, or is cancelled (its future
//! dropped mid-await) can never leave the counter stuck above zero.
//!
//! ```ignore
//! let loading = LoadingCoordinator::new();
//! let _op = loading.begin_operation();
//! fetch_tournaments().await?; // early return still releases `_op`
//! ```

mod coordinator;
mod error;

pub use coordinator::{BusySignal, LoadingCoordinator, OperationHandle};
pub use error::ProtocolError;
