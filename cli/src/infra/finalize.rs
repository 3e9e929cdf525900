//! Finalize-once latch.
//!
//! Several event sources race to report the outcome of one execution. The
//! first to call [`Finalizer::finalize`] delivers its value to the single
//! receiver; every later call is a no-op that returns `false`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::oneshot;

/// Single-assignment result slot shared by competing event sources.
#[derive(Debug)]
pub struct Finalizer<T> {
    done: AtomicBool,
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> Finalizer<T> {
    /// Create a latch and the receiver that observes the winning value.
    #[must_use]
    pub fn new() -> (Arc<Self>, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        let finalizer = Arc::new(Self {
            done: AtomicBool::new(false),
            sender: Mutex::new(Some(tx)),
        });
        (finalizer, rx)
    }

    /// Try to finalize with `value`. Returns `true` only for the winner.
    ///
    /// The winner is decided by one compare-and-swap on the latch; the mutex
    /// around the sender is only ever taken by that winner.
    pub fn finalize(&self, value: T) -> bool {
        if self
            .done
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(tx) = sender {
            // Receiver gone means the caller stopped waiting; still finalized.
            let _ = tx.send(value);
        }
        true
    }

    /// Whether some source has already won.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}
