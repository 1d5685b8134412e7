//! src/frame.rs
//!
//! Repaint scheduling. A graph asks its scheduler for "one callback before the
//! next repaint" and the host drains the due requests each time it repaints.
//!
//! Two schedulers are provided:
//! - [`RepaintScheduler`]: every pending request is due at the next repaint.
//! - [`TimerScheduler`]: fixed-delay fallback pacing requests ~16 ms apart.

use log::trace;

use crate::clock::Clock;

/// Opaque handle for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Repaint-scheduling capability.
pub trait FrameScheduler {
    /// Register interest in one callback at the next repaint.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Remove and return the requests whose callback is due now.
    fn due_frames(&mut self) -> Vec<FrameHandle>;

    /// Number of requests still waiting.
    fn pending(&self) -> usize;
}

/// Every request made before a repaint fires at that repaint.
#[derive(Debug, Default)]
pub struct RepaintScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl RepaintScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }

    fn due_frames(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Nominal repaint period of the timer fallback.
pub const FALLBACK_FRAME_MS: f64 = 16.0;

/// Timer-based fallback: each request is due `16 - (now - previous request)`
/// milliseconds after it is made (never negative), approximating a 60 Hz
/// repaint without display synchronisation.
pub struct TimerScheduler {
    clock: Box<dyn Clock + Send + Sync>,
    next_id: u64,
    prev: Option<f64>,
    pending: Vec<(FrameHandle, f64)>,
}

impl TimerScheduler {
    pub fn new(clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            clock,
            next_id: 0,
            prev: None,
            pending: Vec::new(),
        }
    }
}

impl FrameScheduler for TimerScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let curr = self.clock.now();
        let prev = self.prev.unwrap_or(curr);
        let delay = (FALLBACK_FRAME_MS - (curr - prev)).max(0.0);
        self.prev = Some(curr);
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        trace!("timer frame {} due in {:.1}ms", handle.0, delay);
        self.pending.push((handle, curr + delay));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    fn due_frames(&mut self) -> Vec<FrameHandle> {
        let now = self.clock.now();
        let mut due = Vec::new();
        self.pending.retain(|&(handle, at)| {
            if at <= now {
                due.push(handle);
                false
            } else {
                true
            }
        });
        due
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}
