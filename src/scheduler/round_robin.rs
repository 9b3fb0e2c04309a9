//! Round-robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit arrivals to the back of a FIFO ready queue.
//! 2. Pop the head and run it for `min(remaining, quantum)`.
//! 3. If it still needs CPU time, first admit everything that arrived while
//!    it ran, then put it at the back of the queue.
//! 4. Idle until the next arrival when the queue is empty.
//!
//! # Complexity
//! O(sum(burst) / quantum + n) dispatches.

use std::collections::VecDeque;

use log::{debug, trace};

use super::{admit_arrivals, next_arrival, Scheduler};
use crate::error::SimulationError;
use crate::models::{
    working_copies, Algorithm, MetricsAccumulator, Process, RuntimeProcess, ScheduleReport,
    ScheduleRow, Ticks, Timeline,
};
use crate::validation::{ensure_quantum, ensure_valid};

/// Conventional round-robin quantum.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Fixed-quantum round-robin scheduler.
///
/// The only discipline here that takes the CPU away from a process before
/// its burst is complete.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, TimeSlice};
/// use u_cpusched::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 2)];
/// let report = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
///
/// assert_eq!(
///     report.timeline.slices(),
///     &[TimeSlice::new(1, 0, 2), TimeSlice::new(2, 2, 4), TimeSlice::new(1, 4, 6)]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is checked when scheduling; a non-positive value makes
    /// every run fail with [`SimulationError::InvalidQuantum`].
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }

    /// The time slice granted per dispatch.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Scheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleReport, SimulationError> {
        ensure_quantum(self.quantum)?;
        ensure_valid(processes)?;

        let mut pending: VecDeque<RuntimeProcess> = working_copies(processes).into();
        let mut ready: VecDeque<RuntimeProcess> = VecDeque::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut now: Ticks = 0;

        loop {
            admit_arrivals(&mut pending, &mut ready, now);

            let Some(mut process) = ready.pop_front() else {
                match next_arrival(&pending) {
                    Some(arrival) => {
                        trace!("rr: cpu idle {now}..{arrival}");
                        now = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let start = now;
            now += process.run_for(self.quantum);
            debug!(
                "rr: P{} runs {start}..{now}, {} remaining",
                process.id(),
                process.remaining
            );
            timeline.record(process.id(), start, now);

            if process.is_finished() {
                metrics.record(ScheduleRow::completed(&process.process, now));
            } else {
                admit_arrivals(&mut pending, &mut ready, now);
                ready.push_back(process);
            }
        }

        ScheduleReport::build(Algorithm::RoundRobin, timeline, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_rr_rotation() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 2)];
        let report = RoundRobinScheduler::new(2).schedule(&processes).unwrap();

        assert_eq!(
            report.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 6),
            ]
        );
        assert_eq!(report.row(1).unwrap().wait, 2);
        assert_eq!(report.row(2).unwrap().wait, 2);
        assert_eq!(report.completion_of(1), Some(6));
        assert_eq!(report.completion_of(2), Some(4));
    }

    #[test]
    fn test_rr_new_arrivals_before_requeue() {
        // P2 arrives exactly when P1's quantum expires: it is queued ahead of P1.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let report = RoundRobinScheduler::new(2).schedule(&processes).unwrap();

        let order: Vec<i64> = report.timeline.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
        assert_eq!(report.row(2).unwrap().wait, 0);
        assert_eq!(report.row(1).unwrap().wait, 2);
    }

    #[test]
    fn test_rr_two_quanta_two_slices() {
        let report = RoundRobinScheduler::new(3)
            .schedule(&[Process::new(1, 0, 6)])
            .unwrap();
        assert_eq!(
            report.timeline.slices(),
            &[TimeSlice::new(1, 0, 3), TimeSlice::new(1, 3, 6)]
        );
        assert_eq!(report.row(1).unwrap().wait, 0);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        let processes = vec![
            Process::new(1, 0, 7),
            Process::new(2, 1, 3),
            Process::new(3, 2, 5),
            Process::new(4, 20, 2),
        ];
        let quantum = 3;
        let report = RoundRobinScheduler::new(quantum)
            .schedule(&processes)
            .unwrap();

        assert!(report.timeline.iter().all(|s| s.duration() <= quantum));
        for p in &processes {
            assert_eq!(report.timeline.service_time(p.id), p.burst_duration);
        }
        assert_eq!(report.timeline.first_start(4), Some(20));
    }

    #[test]
    fn test_rr_wait_uses_original_burst() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let report = RoundRobinScheduler::new(1).schedule(&processes).unwrap();
        // P1: 0,2,4 → completes 5; P2: 1,3,5 → completes 6
        let p1 = report.row(1).unwrap();
        assert_eq!(p1.completion, 5);
        assert_eq!(p1.wait, 2);
        let p2 = report.row(2).unwrap();
        assert_eq!(p2.completion, 6);
        assert_eq!(p2.wait, 3);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        let processes = vec![Process::new(1, 0, 3)];
        assert_eq!(
            RoundRobinScheduler::new(0).schedule(&processes),
            Err(SimulationError::InvalidQuantum(0))
        );
        assert!(RoundRobinScheduler::new(-2)
            .schedule(&processes)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_rr_empty_input() {
        let err = RoundRobinScheduler::new(2).schedule(&[]).unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_rr_clock_overflow_rejected() {
        let err = RoundRobinScheduler::new(2)
            .schedule(&[Process::new(1, i64::MAX - 1, 5)])
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::HorizonOverflow
        );
    }

    #[test]
    fn test_rr_default_quantum() {
        assert_eq!(RoundRobinScheduler::default().quantum(), DEFAULT_QUANTUM);
    }
}
