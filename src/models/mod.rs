//! CPU scheduling domain models.
//!
//! Provides the input record, the per-run working copy, the Gantt timeline,
//! and the result types produced by every scheduler.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | Process | once, by the loader | never |
//! | RuntimeProcess | per run | during the run |
//! | TimeSlice / Timeline | during a run | append-only |
//! | ScheduleRow / RunMetrics | at completion | never |

mod metrics;
mod process;
mod report;
mod timeline;

pub use metrics::{MetricsAccumulator, RunMetrics, ScheduleRow};
pub(crate) use process::working_copies;
pub use process::{Process, ProcessId, RuntimeProcess, Ticks};
pub use report::{Algorithm, ScheduleReport};
pub use timeline::{TimeSlice, Timeline};
