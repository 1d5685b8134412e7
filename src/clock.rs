//! src/clock.rs
//!
//! Monotonic millisecond clocks injected into the graph's frame pacing.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of the current time in milliseconds.
///
/// Only differences between readings matter, so the origin is arbitrary.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle while the graph owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        let clock = Self::default();
        clock.set(start);
        clock
    }

    pub fn set(&self, millis: f64) {
        self.millis.store(millis.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, millis: f64) {
        self.set(self.now() + millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(100.0);
        let handle = clock.clone();
        handle.advance(16.0);
        assert_eq!(clock.now(), 116.0);
        clock.set(5.0);
        assert_eq!(handle.now(), 5.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
