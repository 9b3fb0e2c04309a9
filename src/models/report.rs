//! Scheduling run result.
//!
//! A report is everything a result renderer needs for one algorithm: the
//! title, the Gantt timeline, one row per process, and the run metrics.

use serde::{Deserialize, Serialize};

use super::{MetricsAccumulator, ProcessId, RunMetrics, ScheduleRow, Timeline};
use crate::error::SimulationError;

/// Scheduling discipline that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first, reordered at dispatch boundaries.
    Sjf,
    /// Shortest job first with priority tie-break, reordered at dispatch boundaries.
    Priority,
    /// Fixed-quantum round robin.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Sjf => "Shortest-job-first (preemptive)",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }

    /// Whether a running process can lose the CPU before its burst ends.
    pub fn preempts_mid_burst(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub title: String,
    pub algorithm: Algorithm,
    pub timeline: Timeline,
    /// One row per process. Schedulers emit them ordered by id; lookups do
    /// not rely on that order.
    pub rows: Vec<ScheduleRow>,
    pub metrics: RunMetrics,
}

impl ScheduleReport {
    /// Finalizes a run.
    ///
    /// # Errors
    /// Propagates [`SimulationError::ArithmeticDegenerate`] from the accumulator.
    pub fn build(
        algorithm: Algorithm,
        timeline: Timeline,
        accumulator: MetricsAccumulator,
    ) -> Result<Self, SimulationError> {
        let (rows, metrics) = accumulator.finish(&timeline)?;
        Ok(Self {
            title: algorithm.title().to_string(),
            algorithm,
            timeline,
            rows,
            metrics,
        })
    }

    /// Looks up the row of a process.
    pub fn row(&self, id: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Completion time of a process.
    pub fn completion_of(&self, id: ProcessId) -> Option<i64> {
        self.row(id).map(|r| r.completion)
    }

    /// Number of processes in the report.
    pub fn process_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_report() -> ScheduleReport {
        let mut timeline = Timeline::new();
        timeline.record(2, 0, 2);
        timeline.record(5, 2, 5);

        let mut acc = MetricsAccumulator::new();
        acc.record(ScheduleRow::completed(&Process::new(2, 0, 2), 2));
        acc.record(ScheduleRow::completed(&Process::new(5, 0, 3), 5));
        ScheduleReport::build(Algorithm::Fcfs, timeline, acc).unwrap()
    }

    #[test]
    fn test_row_lookup_by_sparse_id() {
        let report = sample_report();
        assert_eq!(report.row(5).unwrap().wait, 2);
        assert_eq!(report.completion_of(2), Some(2));
        assert!(report.row(3).is_none());
        assert_eq!(report.process_count(), 2);
    }

    #[test]
    fn test_row_lookup_in_unsorted_rows() {
        let mut report = sample_report();
        report.rows.reverse();
        assert_eq!(report.row(2).unwrap().completion, 2);
        assert_eq!(report.row(5).unwrap().completion, 5);

        let json = serde_json::to_string(&report).unwrap();
        let restored: ScheduleReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.row(2).unwrap().wait, 0);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Algorithm::Fcfs.title(), "First-come, first-serve");
        assert_eq!(Algorithm::RoundRobin.title(), "Round-robin");
        assert!(Algorithm::RoundRobin.preempts_mid_burst());
        assert!(!Algorithm::Sjf.preempts_mid_burst());
    }

    #[test]
    fn test_report_serializes() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["title"], "First-come, first-serve");
        assert_eq!(json["algorithm"], "fcfs");
        assert_eq!(json["rows"][1]["id"], 5);
        assert_eq!(json["timeline"]["slices"][0]["stop"], 2);
    }
}
