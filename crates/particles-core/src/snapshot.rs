//! Latest-value hand-off between a hand-tracking loop and the frame loop.
//!
//! The tracker publishes whole frames; the renderer reads whichever frame is
//! newest when its own callback fires. Frames are swapped as a single
//! `Arc`, so a reader never sees a half-written frame, and the lock is held
//! only for the pointer swap. Reading the same frame twice is normal.

use std::sync::{Arc, Mutex, PoisonError};

use crate::hand::HandFrame;

#[derive(Clone, Default)]
pub struct HandSnapshot {
    latest: Arc<Mutex<Arc<HandFrame>>>,
}

impl HandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current frame.
    pub fn publish(&self, frame: HandFrame) {
        let frame = Arc::new(frame);
        // the slot only ever holds a complete frame, poisoned or not
        let mut slot = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = frame;
    }

    /// Most recently published frame (empty until the first publish).
    pub fn latest(&self) -> Arc<HandFrame> {
        let slot = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot)
    }
}
