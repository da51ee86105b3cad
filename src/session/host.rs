use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque handle for one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(
    /// Host-assigned identifier.
    pub u64,
);

/// The environment that schedules frames and delivers resize notifications.
///
/// A browser binding maps these onto `requestAnimationFrame` and a resize observer; tests and the
/// CLI use [`HeadlessHost`](crate::session::headless::HeadlessHost).
pub trait FrameHost {
    /// Schedule the next frame callback.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a scheduled frame callback. Cancelling an already-fired request is a no-op.
    fn cancel_frame(&mut self, id: FrameRequestId);

    /// Stop delivering resize notifications to the session.
    fn detach_resize(&mut self);
}

/// Shared scroll-progress scalar.
///
/// Written by whoever observes scrolling, read once at the start of every frame. Cloning shares
/// the same cell. Stores `f64` bits with relaxed ordering: a stale read costs one frame of lag.
#[derive(Clone, Debug, Default)]
pub struct ProgressHandle {
    bits: Arc<AtomicU64>,
}

impl ProgressHandle {
    /// A handle initialized to `progress`.
    pub fn new(progress: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(progress.to_bits())),
        }
    }

    /// Publish a new progress value. Range clamping happens on read, in the progress mapper.
    pub fn set(&self, progress: f64) {
        self.bits.store(progress.to_bits(), Ordering::Relaxed);
    }

    /// Latest published progress.
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
