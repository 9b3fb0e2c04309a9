//! Selection rules for dispatch-boundary scheduling.
//!
//! When the CPU becomes free, the ready queue is scanned front to back and a
//! [`SelectionRule`] decides whether each candidate outranks the best process
//! found so far. One dispatch loop serves every rule; the rule is the only
//! difference between SJF and priority-SJF.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best};
//! use u_cpusched::models::{Process, RuntimeProcess};
//!
//! let queue = vec![
//!     RuntimeProcess::new(Process::new(1, 0, 5).with_priority(1)),
//!     RuntimeProcess::new(Process::new(2, 0, 2).with_priority(1)),
//! ];
//! assert_eq!(select_best(&rules::ShortestJob, &queue), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod engine;
pub mod rules;

pub use engine::select_best;

use crate::models::RuntimeProcess;
use std::fmt::Debug;

/// A rule deciding whether one ready process outranks another.
///
/// Rules are pure: the answer depends only on the two processes.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Whether `candidate` should replace `best` as the process to dispatch.
    ///
    /// Returning `false` on ties keeps the earlier-queued process.
    fn outranks(&self, candidate: &RuntimeProcess, best: &RuntimeProcess) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
