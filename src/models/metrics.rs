//! Per-process rows and run-level metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Wait | Time ready but not running: turnaround - burst |
//! | Turnaround | completion - arrival |
//! | Average wait / turnaround | Mean over all processes |
//! | Throughput | process count / last completion |
//! | CPU utilization | busy time / last completion |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Process, ProcessId, Ticks, Timeline};
use crate::error::SimulationError;

/// Final timing record of one process in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub id: ProcessId,
    pub priority: i64,
    pub burst: Ticks,
    pub arrival: Ticks,
    pub wait: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}

impl ScheduleRow {
    /// Builds the row of a process that finished at `completion`.
    ///
    /// Turnaround and wait follow from the completion time, so the identities
    /// `turnaround = completion - arrival` and `wait = turnaround - burst`
    /// hold for every row by construction.
    pub fn completed(process: &Process, completion: Ticks) -> Self {
        let turnaround = completion - process.arrival_time;
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst_duration,
            arrival: process.arrival_time,
            wait: turnaround - process.burst_duration,
            turnaround,
            completion,
        }
    }
}

/// Aggregate metrics of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per tick: count / makespan.
    pub throughput: f64,
    /// Last completion time.
    pub makespan: Ticks,
    /// Largest single wait.
    pub max_wait: Ticks,
    /// Fraction of [0, makespan) during which the CPU was busy.
    pub cpu_utilization: f64,
}

/// Running sums for one scheduling run.
///
/// Rows are keyed by process id, so the finished table is ordered by id
/// regardless of completion order.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    rows: BTreeMap<ProcessId, ScheduleRow>,
    total_wait: i128,
    total_turnaround: i128,
    last_completion: Ticks,
    max_wait: Ticks,
}

impl MetricsAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed process.
    pub fn record(&mut self, row: ScheduleRow) {
        self.total_wait += i128::from(row.wait);
        self.total_turnaround += i128::from(row.turnaround);
        self.last_completion = self.last_completion.max(row.completion);
        self.max_wait = self.max_wait.max(row.wait);
        let previous = self.rows.insert(row.id, row);
        debug_assert!(previous.is_none(), "process {} completed twice", row.id);
    }

    /// Number of completed processes.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Latest completion observed so far.
    pub fn last_completion(&self) -> Ticks {
        self.last_completion
    }

    /// Computes the final metrics.
    ///
    /// # Errors
    /// [`SimulationError::ArithmeticDegenerate`] when no process completed or
    /// the last completion is at t=0, since every average would divide by zero.
    pub fn metrics(&self, timeline: &Timeline) -> Result<RunMetrics, SimulationError> {
        if self.rows.is_empty() || self.last_completion <= 0 {
            return Err(SimulationError::ArithmeticDegenerate);
        }
        let count = self.rows.len() as f64;
        let makespan = self.last_completion as f64;

        Ok(RunMetrics {
            average_wait: self.total_wait as f64 / count,
            average_turnaround: self.total_turnaround as f64 / count,
            throughput: count / makespan,
            makespan: self.last_completion,
            max_wait: self.max_wait,
            cpu_utilization: timeline.busy_time() as f64 / makespan,
        })
    }

    /// Finalizes metrics and returns the id-ordered rows.
    pub fn finish(
        self,
        timeline: &Timeline,
    ) -> Result<(Vec<ScheduleRow>, RunMetrics), SimulationError> {
        let metrics = self.metrics(timeline)?;
        Ok((self.rows.into_values().collect(), metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_identities() {
        let p = Process::new(2, 1, 4).with_priority(3);
        let row = ScheduleRow::completed(&p, 7);
        assert_eq!(row.turnaround, 6);
        assert_eq!(row.wait, 2);
        assert_eq!(row.priority, 3);
    }

    #[test]
    fn test_accumulator_averages() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 3);
        timeline.record(2, 3, 7);

        let mut acc = MetricsAccumulator::new();
        acc.record(ScheduleRow::completed(&Process::new(1, 0, 3), 3));
        acc.record(ScheduleRow::completed(&Process::new(2, 1, 4), 7));

        let m = acc.metrics(&timeline).unwrap();
        assert!((m.average_wait - 1.0).abs() < 1e-10);
        assert!((m.average_turnaround - 4.5).abs() < 1e-10); // (3 + 6) / 2
        assert!((m.throughput - 2.0 / 7.0).abs() < 1e-10);
        assert_eq!(m.makespan, 7);
        assert_eq!(m.max_wait, 2);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rows_ordered_by_id() {
        let mut timeline = Timeline::new();
        timeline.record(3, 0, 1);
        timeline.record(1, 1, 2);

        let mut acc = MetricsAccumulator::new();
        acc.record(ScheduleRow::completed(&Process::new(3, 0, 1), 1));
        acc.record(ScheduleRow::completed(&Process::new(1, 0, 1), 2));

        let (rows, _) = acc.finish(&timeline).unwrap();
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 3);
    }

    #[test]
    fn test_sums_do_not_overflow_near_clock_limit() {
        let big = i64::MAX / 2;
        let mut timeline = Timeline::new();
        timeline.record(1, 0, big);
        timeline.record(2, big, 2 * big);

        let mut acc = MetricsAccumulator::new();
        acc.record(ScheduleRow::completed(&Process::new(1, 0, big), big));
        acc.record(ScheduleRow::completed(&Process::new(2, 0, big), 2 * big));

        let m = acc.metrics(&timeline).unwrap();
        // turnarounds big and 2*big: their sum exceeds i64::MAX
        let expected = 1.5 * big as f64;
        assert!((m.average_turnaround - expected).abs() / expected < 1e-9);
        assert_eq!(m.max_wait, big);
    }

    #[test]
    fn test_empty_accumulator_is_degenerate() {
        let acc = MetricsAccumulator::new();
        assert_eq!(
            acc.metrics(&Timeline::new()),
            Err(SimulationError::ArithmeticDegenerate)
        );
    }
}
