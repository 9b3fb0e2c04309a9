//! CPU schedulers.
//!
//! Each scheduler simulates a single CPU over its own working copy of the
//! input and returns a [`ScheduleReport`].
//!
//! # Preemption
//!
//! | Scheduler | When the running process can change |
//! |-----------|-------------------------------------|
//! | `FcfsScheduler` | only at completion, arrival order |
//! | `DispatchScheduler` (SJF, Priority) | only at completion, rule order |
//! | `RoundRobinScheduler` | after every quantum |
//!
//! The SJF and priority variants are labeled "preemptive" in reports, but
//! they only reorder the ready queue when the CPU becomes free. A process
//! that arrives with a shorter burst waits for the running one to finish.
//! Only round-robin takes the CPU away mid-burst.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod dispatch;
mod fcfs;
mod round_robin;

pub use dispatch::DispatchScheduler;
pub use fcfs::FcfsScheduler;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::{Algorithm, Process, RuntimeProcess, ScheduleReport, Ticks};

/// A single-CPU scheduling discipline.
///
/// Implementations hold only configuration, so one scheduler may serve any
/// number of runs, including concurrent ones.
pub trait Scheduler: Send + Sync + Debug {
    /// Discipline implemented by this scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the workload.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidInput`] if the process list fails validation.
    /// - [`SimulationError::InvalidQuantum`] for a non-positive round-robin quantum.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleReport, SimulationError>;
}

/// Moves every pending process that has arrived by `now` to the back of
/// `ready`, keeping arrival order. Returns the number admitted.
fn admit_arrivals<Q>(pending: &mut VecDeque<RuntimeProcess>, ready: &mut Q, now: Ticks) -> usize
where
    Q: Extend<RuntimeProcess>,
{
    let mut admitted = 0;
    while pending.front().is_some_and(|p| p.arrival_time() <= now) {
        if let Some(process) = pending.pop_front() {
            ready.extend(Some(process));
            admitted += 1;
        }
    }
    admitted
}

/// Arrival time of the next pending process, if any.
fn next_arrival(pending: &VecDeque<RuntimeProcess>) -> Option<Ticks> {
    pending.front().map(RuntimeProcess::arrival_time)
}
