//! src/graph/data.rs
//!
//! Hit accumulator and the fixed-length sliding history window.

use std::collections::VecDeque;

/// Hits counted since the last sample tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    pending: u64,
}

impl Accumulator {
    pub fn add(&mut self, hits: u64) {
        self.pending = self.pending.saturating_add(hits);
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Hand over the pending count and start again from zero.
    pub fn take(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }
}

/// Per-interval hit counts, oldest at the front. The length never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    values: VecDeque<u64>,
}

impl HistoryBuffer {
    /// A window of `len` zeroed intervals.
    pub fn new(len: usize) -> Self {
        Self {
            values: std::iter::repeat_n(0, len).collect(),
        }
    }

    /// Drop the oldest interval and append `latest`.
    ///
    /// Returns the dropped value; a zero-length window stays empty.
    pub fn rotate(&mut self, latest: u64) -> Option<u64> {
        let dropped = self.values.pop_front()?;
        self.values.push_back(latest);
        Some(dropped)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest interval count, 0 for an empty window.
    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn latest(&self) -> Option<u64> {
        self.values.back().copied()
    }

    pub fn get(&self, idx: usize) -> Option<u64> {
        self.values.get(idx).copied()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    /// Newest to oldest, matching right-to-left bar order.
    pub fn recent(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.values.iter().copied().collect()
    }
}

impl From<Vec<u64>> for HistoryBuffer {
    fn from(values: Vec<u64>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_resets_accumulator() {
        let mut acc = Accumulator::default();
        acc.add(1);
        acc.add(2);
        assert_eq!(acc.take(), 3);
        assert_eq!(acc.pending(), 0);
    }

    #[test]
    fn rotate_shifts_left_and_appends() {
        let mut h = HistoryBuffer::from(vec![10, 0, 3, 7]);
        let before = h.to_vec();
        assert_eq!(h.rotate(5), Some(10));
        let after = h.to_vec();
        assert_eq!(after.len(), before.len());
        for i in 0..after.len() - 1 {
            assert_eq!(after[i], before[i + 1]);
        }
        assert_eq!(h.latest(), Some(5));
    }

    #[test]
    fn empty_window_stays_empty() {
        let mut h = HistoryBuffer::new(0);
        assert_eq!(h.rotate(4), None);
        assert!(h.is_empty());
        assert_eq!(h.max(), 0);
    }

    #[test]
    fn recent_is_newest_first() {
        let h = HistoryBuffer::from(vec![0, 1, 2]);
        assert_eq!(h.recent().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(h.max(), 2);
    }
}
