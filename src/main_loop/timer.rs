use crate::dispatch::Callback;

use std::cmp::Ordering;
use std::time::Instant;

/// An entry in the loop's timer queue.
///
/// Entries live in a `BinaryHeap` ordered so that the earliest deadline
/// pops first. Entries with the same deadline pop in insertion order.
pub(crate) struct TimerEntry {
    /// The time at which the callback becomes due.
    pub(crate) deadline: Instant,

    /// Insertion counter, breaks ties between equal deadlines.
    pub(crate) seq: u64,

    pub(crate) callback: Callback,
}

impl Eq for TimerEntry {}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Ord for TimerEntry {
    /// Reversed comparison, so `BinaryHeap<TimerEntry>` is a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
