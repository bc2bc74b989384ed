//! Coalescing scheduler for high-frequency UI updates
//!
//! Many events, at most one pending update per frame. A guard flag is set
//! when an update is scheduled and cleared by the update itself, so events
//! that arrive in between are dropped instead of queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Roughly one terminal redraw
pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Drop-frame throttle: schedule-if-not-pending, run-then-clear.
#[derive(Debug, Clone)]
pub struct CoalescingScheduler {
    pending: Arc<AtomicBool>,
    frame: Duration,
}

impl Default for CoalescingScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME)
    }
}

impl CoalescingScheduler {
    pub fn new(frame: Duration) -> Self {
        Self {
            pending: Arc::new(AtomicBool::new(false)),
            frame,
        }
    }

    /// Whether an update is waiting for its frame.
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Schedule `update` for the next frame unless one is already pending.
    ///
    /// Returns `false` when the request was coalesced into the pending one.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, update: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.pending.swap(true, Ordering::AcqRel) {
            return false;
        }

        let pending = Arc::clone(&self.pending);
        let frame = self.frame;
        tokio::spawn(async move {
            tokio::time::sleep(frame).await;
            update();
            pending.store(false, Ordering::Release);
        });
        true
    }
}
