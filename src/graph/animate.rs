//! src/graph/animate.rs
//!
//! Timing state for the sampling loop. Frame callbacks arrive at the repaint
//! rate; these types decide when a sample tick is due and derive the
//! per-second rates.

/// Milliseconds in one statistics window.
pub const RATE_WINDOW_MS: f64 = 1000.0;

/// Gates sample ticks to one per `interval` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePacer {
    start: f64,
    interval: f64,
}

impl FramePacer {
    pub fn new(now: f64, interval: f64) -> Self {
        Self {
            start: now,
            interval,
        }
    }

    /// Start of the current sample interval.
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// True once more than one interval has elapsed.
    ///
    /// The start moves to `now - (elapsed % interval)` rather than `now`, so
    /// late callbacks do not push every later tick back. Missed intervals are
    /// not replayed: one call yields at most one tick.
    pub fn due(&mut self, now: f64) -> bool {
        let delta = now - self.start;
        if delta > self.interval {
            self.start = now - delta % self.interval;
            true
        } else {
            false
        }
    }
}

/// Rates published at the end of a statistics window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateSample {
    pub hits_per_second: u64,
    pub frames_per_second: u64,
}

/// Rolling one-second window of ticked hits and sample frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerSecondWindow {
    start: f64,
    hits: u64,
    frames: u64,
}

impl PerSecondWindow {
    pub fn new(now: f64) -> Self {
        Self {
            start: now,
            hits: 0,
            frames: 0,
        }
    }

    pub fn record_frame(&mut self, hits: u64) {
        self.hits = self.hits.saturating_add(hits);
        self.frames += 1;
    }

    /// Close the window once a second has passed, phase-corrected like
    /// [`FramePacer::due`].
    pub fn roll(&mut self, now: f64) -> Option<RateSample> {
        let delta = now - self.start;
        if delta < RATE_WINDOW_MS {
            return None;
        }
        let secs = delta / 1000.0;
        let sample = RateSample {
            hits_per_second: (self.hits as f64 / secs).round() as u64,
            frames_per_second: (self.frames as f64 / secs).round() as u64,
        };
        self.start = now - delta % RATE_WINDOW_MS;
        self.hits = 0;
        self.frames = 0;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_gaps_never_tick() {
        let mut p = FramePacer::new(0.0, 100.0);
        for now in [10.0, 40.0, 70.0, 99.0, 100.0] {
            assert!(!p.due(now));
        }
        assert_eq!(p.start(), 0.0);
    }

    #[test]
    fn tick_advances_by_one_interval() {
        let mut p = FramePacer::new(0.0, 100.0);
        assert!(p.due(116.0));
        assert_eq!(p.start(), 100.0);
        assert!(!p.due(180.0));
        assert!(p.due(212.0));
        assert_eq!(p.start(), 200.0);
    }

    #[test]
    fn long_stall_ticks_once() {
        let mut p = FramePacer::new(0.0, 100.0);
        assert!(p.due(350.0));
        assert_eq!(p.start(), 300.0);
        assert!(!p.due(360.0));
    }

    #[test]
    fn long_run_rate_is_preserved() {
        // irregular 16/17ms callbacks against a 50ms interval
        let mut p = FramePacer::new(0.0, 50.0);
        let mut now = 0.0;
        let mut ticks = 0;
        for i in 0..600 {
            now += if i % 3 == 0 { 17.0 } else { 16.0 };
            if p.due(now) {
                ticks += 1;
            }
        }
        // 600 callbacks cover 9800ms
        assert!((195..=196).contains(&ticks), "{ticks}");
    }

    #[test]
    fn window_publishes_once_per_second() {
        let mut w = PerSecondWindow::new(0.0);
        w.record_frame(10);
        assert_eq!(w.roll(999.0), None);
        assert_eq!(
            w.roll(1008.0),
            Some(RateSample {
                hits_per_second: 10,
                frames_per_second: 1
            })
        );
        assert_eq!(w.roll(1500.0), None);
        assert_eq!(w.roll(2000.0).map(|s| s.hits_per_second), Some(0));
    }
}
