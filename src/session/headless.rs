use crate::session::host::{FrameHost, FrameRequestId};

/// A [`FrameHost`] with no display: frame requests are recorded and fired by the caller.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    next_id: u64,
    pending: Option<FrameRequestId>,
    requested: u64,
    cancelled: Vec<FrameRequestId>,
    resize_attached: bool,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    /// A host with its resize listener attached and nothing scheduled.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: None,
            requested: 0,
            cancelled: Vec::new(),
            resize_attached: true,
        }
    }

    /// The request that would fire next, if any.
    pub fn pending(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Fire the pending request: returns it and clears the schedule.
    pub fn fire(&mut self) -> Option<FrameRequestId> {
        self.pending.take()
    }

    /// Total frames requested so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Requests cancelled before firing.
    pub fn cancelled(&self) -> &[FrameRequestId] {
        &self.cancelled
    }

    /// Whether resize notifications are still delivered.
    pub fn resize_attached(&self) -> bool {
        self.resize_attached
    }
}

impl FrameHost for HeadlessHost {
    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending == Some(id) {
            self.pending = None;
            self.cancelled.push(id);
        }
    }

    fn detach_resize(&mut self) {
        self.resize_attached = false;
    }
}
