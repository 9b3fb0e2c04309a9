//! First-come, first-served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable, so input order breaks ties).
//! 2. Each process starts at `max(clock, arrival)`; an idle gap moves the
//!    clock forward to the arrival.
//! 3. It runs its whole burst; the clock advances to its completion.
//!
//! # Complexity
//! O(n log n) for the arrival sort, O(n) for the simulation.

use log::{debug, trace};

use super::Scheduler;
use crate::error::SimulationError;
use crate::models::{
    working_copies, Algorithm, MetricsAccumulator, Process, ScheduleReport, ScheduleRow, Ticks,
    Timeline,
};
use crate::validation::ensure_valid;

/// Non-preemptive, arrival-ordered scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 4)];
/// let report = FcfsScheduler::new().schedule(&processes).unwrap();
///
/// assert_eq!(report.row(2).unwrap().wait, 2);
/// assert_eq!(report.metrics.average_wait, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleReport, SimulationError> {
        ensure_valid(processes)?;

        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut clock: Ticks = 0;

        for process in working_copies(processes) {
            let start = clock.max(process.arrival_time());
            if start > clock {
                trace!("fcfs: cpu idle {clock}..{start}");
            }
            let stop = start + process.burst_duration();

            debug!("fcfs: P{} runs {start}..{stop}", process.id());
            timeline.record(process.id(), start, stop);
            metrics.record(ScheduleRow::completed(&process.process, stop));
            clock = stop;
        }

        ScheduleReport::build(Algorithm::Fcfs, timeline, metrics)
    }
}
