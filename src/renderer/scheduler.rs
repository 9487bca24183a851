use crate::renderer::{FrameHandle, FrameScheduler};
use crate::utils::time::{Duration, Instant};

/// Frame scheduler driven by hand.
///
/// Holds at most one pending frame and a clock that only moves when
/// [`advance`](Self::advance) is called. Native hosts can drive it from their
/// own event loop; tests use it to step frames deterministically.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    base: Instant,
    offset: Duration,
    next_handle: u64,
    pending: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Duration::ZERO,
            next_handle: 1,
            pending: None,
            requested: 0,
            cancelled: 0,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.offset += by;
    }

    /// The frame waiting to be delivered, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Takes the pending frame for delivery.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    #[must_use]
    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    #[must_use]
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle::new(self.next_handle);
        self.next_handle += 1;
        self.requested += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }

    fn now(&self) -> Instant {
        self.base + self.offset
    }
}
