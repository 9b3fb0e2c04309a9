//! Simulation driver.
//!
//! Runs every configured algorithm over the same workload, each on its own
//! working copy, and collects one report per algorithm in configuration
//! order.

use log::info;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Algorithm, Process, ScheduleReport};
use crate::scheduler::{DispatchScheduler, FcfsScheduler, RoundRobinScheduler, Scheduler};
use crate::validation::ensure_valid;

/// Runs the configured algorithms in sequence.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::{SimulationConfig, Simulator};
///
/// let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 4)];
/// let reports = Simulator::new(SimulationConfig::default())
///     .run(&processes)
///     .unwrap();
///
/// let titles: Vec<&str> = reports.iter().map(|r| r.title.as_str()).collect();
/// assert_eq!(
///     titles,
///     ["First-come, first-serve", "Shortest-job-first (preemptive)", "Priority", "Round-robin"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a driver for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the scheduler for one algorithm.
    pub fn scheduler_for(&self, algorithm: Algorithm) -> Box<dyn Scheduler> {
        match algorithm {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjf => Box::new(DispatchScheduler::sjf()),
            Algorithm::Priority => Box::new(DispatchScheduler::priority()),
            Algorithm::RoundRobin => Box::new(RoundRobinScheduler::new(self.config.quantum)),
        }
    }

    /// Runs a single algorithm.
    pub fn run_one(
        &self,
        algorithm: Algorithm,
        processes: &[Process],
    ) -> Result<ScheduleReport, SimulationError> {
        let report = self.scheduler_for(algorithm).schedule(processes)?;
        info!(
            "{}: {} processes, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}/t",
            report.title,
            report.process_count(),
            report.metrics.average_wait,
            report.metrics.average_turnaround,
            report.metrics.throughput
        );
        Ok(report)
    }

    /// Runs every configured algorithm.
    ///
    /// Configuration and input are validated once, up front; nothing runs if
    /// either is invalid.
    pub fn run(&self, processes: &[Process]) -> Result<Vec<ScheduleReport>, SimulationError> {
        self.config.validate()?;
        ensure_valid(processes)?;

        self.config
            .algorithms
            .iter()
            .map(|&algorithm| self.run_one(algorithm, processes))
            .collect()
    }
}
