//! Dispatch-boundary scheduler (SJF and priority-SJF).
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived to the back of the ready queue.
//! 2. If nothing is ready, the CPU idles until the next arrival.
//! 3. Otherwise scan the ready queue with the selection rule, remove the
//!    winner and run it to completion.
//! 4. Repeat until nothing is pending or ready.
//!
//! Selection happens only when the CPU becomes free; a running process is
//! never interrupted. Each process produces exactly one time slice.
//!
//! # Complexity
//! O(n^2) in the worst case (every dispatch scans the whole ready queue).

use std::collections::VecDeque;

use log::{debug, trace};

use super::{admit_arrivals, next_arrival, Scheduler};
use crate::dispatching::rules::{ShortestJob, ShortestJobPriority};
use crate::dispatching::{select_best, SelectionRule};
use crate::error::SimulationError;
use crate::models::{
    working_copies, Algorithm, MetricsAccumulator, Process, RuntimeProcess, ScheduleReport,
    ScheduleRow, Ticks, Timeline,
};
use crate::validation::ensure_valid;

/// Scheduler that reorders the ready queue at every dispatch boundary.
///
/// The rule is the only difference between the SJF and priority variants.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{DispatchScheduler, Scheduler};
///
/// // P2 is shorter but arrives while P1 runs: it waits for P1 to finish.
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 2)];
/// let report = DispatchScheduler::sjf().schedule(&processes).unwrap();
///
/// assert_eq!(report.completion_of(1), Some(5));
/// assert_eq!(report.completion_of(2), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct DispatchScheduler<R> {
    rule: R,
    algorithm: Algorithm,
}

impl DispatchScheduler<ShortestJob> {
    /// Shortest-job-first.
    pub fn sjf() -> Self {
        Self::new(ShortestJob, Algorithm::Sjf)
    }
}

impl DispatchScheduler<ShortestJobPriority> {
    /// Shortest-job-first with priority tie-break.
    pub fn priority() -> Self {
        Self::new(ShortestJobPriority, Algorithm::Priority)
    }
}

impl<R: SelectionRule> DispatchScheduler<R> {
    /// Creates a scheduler driven by `rule`, reporting as `algorithm`.
    ///
    /// `algorithm` only labels the report and must be [`Algorithm::Sjf`] or
    /// [`Algorithm::Priority`]; other labels would misreport the title and
    /// preemption behavior. Checked in debug builds.
    pub fn new(rule: R, algorithm: Algorithm) -> Self {
        debug_assert!(
            matches!(algorithm, Algorithm::Sjf | Algorithm::Priority),
            "{algorithm:?} is not a dispatch-boundary algorithm"
        );
        Self { rule, algorithm }
    }

    /// The selection rule in use.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: SelectionRule> Scheduler for DispatchScheduler<R> {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleReport, SimulationError> {
        ensure_valid(processes)?;

        let mut pending: VecDeque<RuntimeProcess> = working_copies(processes).into();
        let mut ready: Vec<RuntimeProcess> = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut now: Ticks = 0;

        loop {
            admit_arrivals(&mut pending, &mut ready, now);

            let Some(index) = select_best(&self.rule, &ready) else {
                match next_arrival(&pending) {
                    Some(arrival) => {
                        trace!("{}: cpu idle {now}..{arrival}", self.rule.name());
                        now = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let mut process = ready.remove(index);
            let start = now;
            now += process.run_for(process.remaining);

            debug!(
                "{}: P{} runs {start}..{now} ({} still ready)",
                self.rule.name(),
                process.id(),
                ready.len()
            );
            timeline.record(process.id(), start, now);
            metrics.record(ScheduleRow::completed(&process.process, now));
        }

        ScheduleReport::build(self.algorithm, timeline, metrics)
    }
}
