//! Ready-queue selection.

use super::SelectionRule;
use crate::models::RuntimeProcess;

/// Returns the index of the process to dispatch next.
///
/// Starts from the head of the queue and moves the choice to a later
/// candidate only when the rule says it outranks the current best, so ties
/// resolve to the earliest-queued process.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    queue: &[RuntimeProcess],
) -> Option<usize> {
    if queue.is_empty() {
        return None;
    }

    let mut best = 0;
    for (i, candidate) in queue.iter().enumerate().skip(1) {
        if rule.outranks(candidate, &queue[best]) {
            best = i;
        }
    }
    Some(best)
}
