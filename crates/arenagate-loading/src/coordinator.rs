//! The coordinator itself and the handle that scopes one operation.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::join_all;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Inner {
    /// Number of outstanding operations. The watch channel is the single
    /// storage location, so subscribers always see the same value that
    /// `is_busy` derives from.
    active: watch::Sender<usize>,
    /// Source of operation ids, used only for logging and errors.
    next_id: AtomicU64,
}

impl Inner {
    fn acquire(&self) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.active.send_modify(|count| *count += 1);
        debug!(operation = id, active = *self.active.borrow(), "operation started");
        id
    }

    /// Decrements the count, clamping at zero.
    fn release(&self, id: u64) -> Result<(), ProtocolError> {
        let mut underflow = false;
        self.active.send_if_modified(|count| {
            if *count == 0 {
                underflow = true;
                false
            } else {
                *count -= 1;
                true
            }
        });

        if underflow {
            error!(operation = id, "operation ended with none outstanding; count clamped at zero");
            return Err(ProtocolError::Underflow(id));
        }

        debug!(operation = id, active = *self.active.borrow(), "operation ended");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LoadingCoordinator
// ---------------------------------------------------------------------------

/// Counts in-flight operations and derives a single busy/idle signal.
///
/// Cloning is cheap and every clone observes the same counter, so one
/// coordinator can be injected into the session store, the UI layer and
/// any data fetchers at once.
#[derive(Debug, Clone)]
pub struct LoadingCoordinator {
    inner: Arc<Inner>,
}

impl LoadingCoordinator {
    /// Creates an idle coordinator (count zero).
    pub fn new() -> Self {
        let (active, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                active,
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Registers a new in-flight operation.
    ///
    /// The returned handle must be kept alive for as long as the
    /// operation runs. Dropping it (or passing it to
    /// [`end_operation`](Self::end_operation)) ends the operation.
    pub fn begin_operation(&self) -> OperationHandle {
        let id = self.inner.acquire();
        OperationHandle {
            id,
            owner: Some(Arc::clone(&self.inner)),
        }
    }

    /// Ends an operation explicitly.
    ///
    /// # Errors
    /// - [`ProtocolError::ForeignHandle`] if `handle` was issued by another
    ///   coordinator. This coordinator is left untouched; the handle still
    ///   releases its own coordinator when it is dropped here.
    /// - [`ProtocolError::Underflow`] if no operations were outstanding.
    ///   The count stays at zero.
    pub fn end_operation(&self, mut handle: OperationHandle) -> Result<(), ProtocolError> {
        let id = handle.id;
        let Some(owner) = handle.owner.take() else {
            return Ok(());
        };

        if Arc::ptr_eq(&owner, &self.inner) {
            owner.release(id)
        } else {
            handle.owner = Some(owner);
            error!(operation = id, "operation ended on a coordinator that did not begin it");
            Err(ProtocolError::ForeignHandle(id))
        }
    }

    /// Number of operations currently in flight.
    pub fn active_count(&self) -> usize {
        *self.inner.active.borrow()
    }

    /// `true` while at least one operation is outstanding.
    pub fn is_busy(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns a reactive view of the busy state.
    pub fn subscribe(&self) -> BusySignal {
        BusySignal {
            rx: self.inner.active.subscribe(),
        }
    }

    /// Resolves once no operations are outstanding.
    ///
    /// Returns immediately if the coordinator is already idle.
    pub async fn wait_idle(&self) {
        let mut rx = self.inner.active.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|count| *count == 0).await;
    }

    /// Runs `fut` as one tracked operation.
    ///
    /// The operation is registered when the returned future is first
    /// polled and released when it completes or is dropped.
    pub async fn track<F>(&self, fut: F) -> F::Output
    where
        F: Future,
    {
        let _op = self.begin_operation();
        fut.await
    }

    /// Runs several operations concurrently, each tracked separately.
    ///
    /// All operations are registered together on first poll and each one
    /// releases its handle as soon as it finishes, so the coordinator
    /// reports busy until the slowest has completed. Results come back in
    /// input order.
    pub async fn track_all<I, F>(&self, futures: I) -> Vec<F::Output>
    where
        I: IntoIterator<Item = F>,
        F: Future,
    {
        let tracked: Vec<_> = futures
            .into_iter()
            .map(|fut| {
                let op = self.begin_operation();
                async move {
                    let output = fut.await;
                    drop(op);
                    output
                }
            })
            .collect();

        join_all(tracked).await
    }
}

impl Default for LoadingCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// OperationHandle
// ---------------------------------------------------------------------------

/// Proof that one operation is outstanding.
///
/// Not `Clone`: a handle closes exactly once, either through
/// [`LoadingCoordinator::end_operation`] or on drop.
#[must_use = "dropping the handle ends the operation immediately"]
#[derive(Debug)]
pub struct OperationHandle {
    id: u64,
    owner: Option<Arc<Inner>>,
}

impl OperationHandle {
    /// Identifier of this operation, unique per coordinator.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for OperationHandle {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.take() {
            // Underflow is already logged inside `release`.
            let _ = owner.release(self.id);
        }
    }
}

// ---------------------------------------------------------------------------
// BusySignal
// ---------------------------------------------------------------------------

/// Reactive busy/idle view for the UI layer.
#[derive(Debug, Clone)]
pub struct BusySignal {
    rx: watch::Receiver<usize>,
}

impl BusySignal {
    /// Current busy state.
    pub fn is_busy(&self) -> bool {
        *self.rx.borrow() > 0
    }

    /// Waits until the busy state flips and returns the new state.
    ///
    /// Count changes that keep the same busy state (two operations
    /// becoming three) do not wake the caller. Returns `None` once the
    /// coordinator and all its handles are gone.
    pub async fn changed(&mut self) -> Option<bool> {
        let was_busy = self.is_busy();
        let count = self.rx.wait_for(|count| (*count > 0) != was_busy).await.ok()?;
        Some(*count > 0)
    }
}
