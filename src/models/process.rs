//! Process model.
//!
//! A process is the unit of work handed to the simulated CPU. The input
//! record is immutable; every scheduling run works on its own
//! [`RuntimeProcess`] copies so runs never interfere.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within one workload.
pub type ProcessId = i64;

/// Simulated time in abstract ticks relative to t=0.
pub type Ticks = i64;

/// A process record (input to every scheduler).
///
/// # Priority
/// The meaning of `priority` depends on the selection rule consuming it.
/// Loaders without a priority column leave it at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (> 0).
    pub id: ProcessId,
    /// Time at which the process becomes ready (>= 0).
    pub arrival_time: Ticks,
    /// Total CPU time required (> 0).
    pub burst_duration: Ticks,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_duration: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Mutable working copy of a [`Process`] owned by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProcess {
    /// The immutable input record.
    pub process: Process,
    /// CPU time still owed to this process.
    pub remaining: Ticks,
}

impl RuntimeProcess {
    /// Creates a working copy with the full burst outstanding.
    pub fn new(process: Process) -> Self {
        Self {
            remaining: process.burst_duration,
            process,
        }
    }

    #[inline]
    pub fn id(&self) -> ProcessId {
        self.process.id
    }

    #[inline]
    pub fn arrival_time(&self) -> Ticks {
        self.process.arrival_time
    }

    #[inline]
    pub fn burst_duration(&self) -> Ticks {
        self.process.burst_duration
    }

    #[inline]
    pub fn priority(&self) -> i64 {
        self.process.priority
    }

    /// Runs the process for up to `slice` ticks and returns the ticks used.
    pub fn run_for(&mut self, slice: Ticks) -> Ticks {
        let used = self.remaining.min(slice);
        self.remaining -= used;
        used
    }

    /// Whether the full burst has been served.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

/// Builds arrival-ordered working copies for one run.
///
/// The sort is stable, so input that is already arrival-ordered keeps its
/// exact order (ties stay in input order).
pub(crate) fn working_copies(processes: &[Process]) -> Vec<RuntimeProcess> {
    let mut copies: Vec<RuntimeProcess> =
        processes.iter().copied().map(RuntimeProcess::new).collect();
    copies.sort_by_key(RuntimeProcess::arrival_time);
    copies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 4, 5).with_priority(2);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_duration, 5);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_run_for_clamps_to_remaining() {
        let mut rp = RuntimeProcess::new(Process::new(1, 0, 5));
        assert_eq!(rp.run_for(2), 2);
        assert_eq!(rp.remaining, 3);
        assert_eq!(rp.run_for(10), 3);
        assert!(rp.is_finished());
        assert_eq!(rp.burst_duration(), 5);
    }

    #[test]
    fn test_working_copies_stable_by_arrival() {
        let input = vec![
            Process::new(1, 4, 1),
            Process::new(2, 0, 1),
            Process::new(3, 4, 1),
            Process::new(4, 0, 1),
        ];
        let ids: Vec<ProcessId> = working_copies(&input).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_priority_defaults_when_missing() {
        let p: Process =
            serde_json::from_str(r#"{"id":1,"arrival_time":0,"burst_duration":3}"#).unwrap();
        assert_eq!(p.priority, 0);
    }
}
