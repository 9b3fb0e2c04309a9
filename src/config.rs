//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Algorithm, Ticks};
use crate::scheduler::DEFAULT_QUANTUM;
use crate::validation::ensure_quantum;

/// Which algorithms to run and with what round-robin quantum.
///
/// Missing fields take their defaults when deserializing, so `{}` is the
/// default configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time slice (> 0).
    pub quantum: Ticks,
    /// Algorithms to run, in reporting order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (all algorithms, quantum 2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = quantum;
        self
    }

    /// Replaces the algorithm list.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Checks the configuration.
    ///
    /// The quantum only matters when round-robin is enabled.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.algorithms.contains(&Algorithm::RoundRobin) {
            ensure_quantum(self.quantum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.quantum, 2);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SimulationConfig = serde_json::from_str(r#"{"quantum": 4}"#).unwrap();
        assert_eq!(config.quantum, 4);
        assert_eq!(config.algorithms.len(), 4);

        let config: SimulationConfig =
            serde_json::from_str(r#"{"algorithms": ["round_robin", "fcfs"]}"#).unwrap();
        assert_eq!(
            config.algorithms,
            vec![Algorithm::RoundRobin, Algorithm::Fcfs]
        );
        assert_eq!(config.quantum, 2);
    }

    #[test]
    fn test_invalid_quantum() {
        let config = SimulationConfig::new().with_quantum(0);
        assert_eq!(config.validate(), Err(SimulationError::InvalidQuantum(0)));
    }

    #[test]
    fn test_quantum_ignored_without_round_robin() {
        let config = SimulationConfig::new()
            .with_quantum(-1)
            .with_algorithms([Algorithm::Fcfs, Algorithm::Sjf]);
        assert!(config.validate().is_ok());
    }
}
