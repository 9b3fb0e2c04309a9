//! Timeline (Gantt record) model.
//!
//! A timeline is the ordered sequence of CPU intervals produced by one
//! scheduling run. Slices are appended in time order and never modified
//! afterwards. Gaps between slices are idle CPU time.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// One contiguous interval `[start, stop)` during which a single process
/// holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process running during this interval.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: Ticks,
    /// Stop time (exclusive).
    pub stop: Ticks,
}

impl TimeSlice {
    /// Creates a new time slice.
    pub fn new(process_id: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

/// Ordered, append-only sequence of [`TimeSlice`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// Slices must arrive in time order and must not overlap the previous one;
    /// zero-length slices are dropped.
    pub fn push(&mut self, slice: TimeSlice) {
        if slice.duration() <= 0 {
            return;
        }
        debug_assert!(
            self.slices.last().map_or(true, |last| last.stop <= slice.start),
            "time slice {slice:?} overlaps the previous slice"
        );
        self.slices.push(slice);
    }

    /// Records that `process_id` ran over `[start, stop)`.
    pub fn record(&mut self, process_id: ProcessId, start: Ticks, stop: Ticks) {
        self.push(TimeSlice::new(process_id, start, stop));
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Iterates over slices in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlice> {
        self.slices.iter()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no process ever ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Stop time of the last slice (0 for an empty timeline).
    pub fn makespan(&self) -> Ticks {
        self.slices.last().map_or(0, |s| s.stop)
    }

    /// Returns all slices of one process.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&TimeSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time received by one process.
    pub fn service_time(&self, process_id: ProcessId) -> Ticks {
        self.slices_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Total time any process held the CPU.
    pub fn busy_time(&self) -> Ticks {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> Ticks {
        self.makespan() - self.busy_time()
    }

    /// CPU utilization: busy time / makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Start of the first slice of a process (its first dispatch).
    pub fn first_start(&self, process_id: ProcessId) -> Option<Ticks> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimeSlice;
    type IntoIter = std::slice::Iter<'a, TimeSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
