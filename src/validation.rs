//! Input validation for process lists.
//!
//! Checks structural integrity of a workload before any scheduler runs.
//! Detects:
//! - Empty workloads
//! - Non-positive or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst durations
//! - Workloads whose simulated clock could exceed `i64::MAX`
//!
//! Every problem is reported, not just the first one.

use crate::error::SimulationError;
use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload contains no processes.
    EmptyInput,
    /// A process ID is zero or negative.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in the clock type.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. All IDs positive
/// 3. No duplicate IDs
/// 4. No negative arrival times
/// 5. All burst durations positive
/// 6. Latest arrival + sum of bursts fits in `i64` (bounds every clock value)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                format!("Process ID must be positive: {}", p.id),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst_duration),
            ));
        }
    }

    if simulation_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value a scheduler can reach: the CPU is never
/// idle after the latest arrival, so it finishes by then plus all the work.
///
/// Returns `None` on overflow.
fn simulation_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration.max(0)))
}

/// Validates a process list, converting failures into [`SimulationError`].
pub(crate) fn ensure_valid(processes: &[Process]) -> Result<(), SimulationError> {
    validate_processes(processes).map_err(SimulationError::InvalidInput)
}

/// Validates a round-robin quantum.
pub(crate) fn ensure_quantum(quantum: i64) -> Result<(), SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    Ok(())
}
