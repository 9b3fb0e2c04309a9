//! Simulation errors.

use std::fmt;

use crate::validation::ValidationError;

/// Error returned by every scheduler and by the simulation driver.
///
/// Simulation is deterministic, so every error is a caller-input problem;
/// none of them is worth retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process list failed validation. Holds every detected problem.
    InvalidInput(Vec<ValidationError>),
    /// Round-robin quantum is not positive.
    InvalidQuantum(i64),
    /// Averages would divide by zero (no completed process or zero horizon).
    ArithmeticDegenerate,
}

impl SimulationError {
    /// Whether the error was caused by rejected input rather than a
    /// degenerate computation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidInput(_) | SimulationError::InvalidQuantum(_)
        )
    }

    /// Validation problems, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid process list")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            SimulationError::InvalidQuantum(q) => {
                write!(f, "round-robin quantum must be positive, got {q}")
            }
            SimulationError::ArithmeticDegenerate => {
                write!(f, "no completed processes to average over")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}
