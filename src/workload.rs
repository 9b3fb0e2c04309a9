//! Random workload generation.
//!
//! Produces reproducible process lists for experiments and property checks.
//! At every tick a process arrives with probability `arrival_probability`;
//! bursts and priorities are drawn uniformly from their ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::{Process, Ticks};

/// Seeded generator of arrival-ordered process lists.
///
/// Ids are dense (1..=N) in arrival order, matching what a table loader
/// would produce.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    horizon: Ticks,
    arrival_probability: f64,
    burst: RangeInclusive<Ticks>,
    priority: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator with defaults: 50 ticks, 30% arrival chance,
    /// bursts 1..=8, priorities 0..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            horizon: 50,
            arrival_probability: 0.3,
            burst: 1..=8,
            priority: 0..=5,
        }
    }

    /// Sets the number of ticks during which processes may arrive.
    pub fn with_horizon(mut self, horizon: Ticks) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the per-tick arrival probability (clamped to 0.0..=1.0).
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the burst range. The lower bound is raised to 1 if needed.
    pub fn with_burst_range(mut self, burst: RangeInclusive<Ticks>) -> Self {
        let (lo, hi) = burst.into_inner();
        let lo = lo.max(1);
        self.burst = lo..=hi.max(lo);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, priority: RangeInclusive<i64>) -> Self {
        let (lo, hi) = priority.into_inner();
        self.priority = lo..=hi.max(lo);
        self
    }

    /// Generates the workload. Same seed, same workload.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes = Vec::new();

        for t in 0..self.horizon.max(0) {
            if rng.random::<f64>() < self.arrival_probability {
                let id = processes.len() as i64 + 1;
                let burst = rng.random_range(self.burst.clone());
                let priority = rng.random_range(self.priority.clone());
                processes.push(Process::new(id, t, burst).with_priority(priority));
            }
        }

        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_same_seed_same_workload() {
        let a = WorkloadGenerator::new(7).generate();
        let b = WorkloadGenerator::new(7).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_workload_is_valid() {
        let processes = WorkloadGenerator::new(42)
            .with_horizon(200)
            .with_arrival_probability(0.5)
            .generate();
        assert!(!processes.is_empty());
        assert!(validate_processes(&processes).is_ok());
        assert!(processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as i64 + 1);
            assert!((1..=8).contains(&p.burst_duration));
            assert!((0..=5).contains(&p.priority));
        }
    }

    #[test]
    fn test_every_tick_arrival() {
        let processes = WorkloadGenerator::new(1)
            .with_horizon(10)
            .with_arrival_probability(1.0)
            .with_burst_range(0..=0)
            .generate();
        assert_eq!(processes.len(), 10);
        assert!(processes.iter().all(|p| p.burst_duration == 1));
    }

    #[test]
    fn test_zero_probability_is_empty() {
        let processes = WorkloadGenerator::new(3)
            .with_arrival_probability(0.0)
            .generate();
        assert!(processes.is_empty());
    }
}
