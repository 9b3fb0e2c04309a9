//! Built-in selection rules.
//!
//! Both rules read only the candidate's priority, the candidate's burst and
//! the current best's burst. Tie-breaks follow the established behavior
//! exactly, including comparisons that look accidental (see each rule).

use super::SelectionRule;
use crate::models::RuntimeProcess;

/// Shortest Job First.
///
/// Prefers the shorter burst, with a special case keyed on the candidate's
/// priority value:
///
/// 1. candidate priority equals both bursts → no
/// 2. candidate priority equals the candidate's burst → yes
/// 3. candidate priority equals the best's burst → no
/// 4. otherwise → candidate burst is strictly shorter
///
/// With priorities that never coincide with a burst length this is plain
/// shortest-burst-wins with ties going to the earlier-queued process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn outranks(&self, candidate: &RuntimeProcess, best: &RuntimeProcess) -> bool {
        let priority = candidate.priority();
        let candidate_burst = candidate.burst_duration();
        let best_burst = best.burst_duration();

        if priority == candidate_burst && priority == best_burst {
            return false;
        }
        if priority == candidate_burst {
            return true;
        }
        if priority == best_burst {
            return false;
        }
        candidate_burst < best_burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Job First with priority tie-break.
///
/// Prefers the strictly shorter burst. The equal-burst case compares the
/// candidate's priority with itself, which is never greater, so equal bursts
/// always keep the earlier-queued process and priority has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobPriority;

impl SelectionRule for ShortestJobPriority {
    fn name(&self) -> &'static str {
        "SJF-PRIORITY"
    }

    fn outranks(&self, candidate: &RuntimeProcess, best: &RuntimeProcess) -> bool {
        candidate.burst_duration() < best.burst_duration()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First, priority on ties"
    }
}
