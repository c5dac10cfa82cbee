//! Pending-activation queue.
//!
//! All outstanding timers -- per-event activations and per-track settle
//! entries -- live in one min-heap ordered by absolute due instant. The heap
//! is owned exclusively by the scheduler and never exposed; cancellation is
//! `clear()`, after which a drained entry can never fire.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::track::Track;

/// What a due entry does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Activate event `index` on `track`.
    Activate { track: Track, index: usize },
    /// Transition `track` to `completed` and attach its report.
    Settle { track: Track },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    due_ms: u64,
    /// Insertion sequence; breaks ties so equal instants fire in the order
    /// they were scheduled.
    seq: u64,
    action: Action,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest entry on top.
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActivationQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ActivationQueue {
    pub fn schedule(&mut self, due_ms: u64, action: Action) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            due_ms,
            seq,
            action,
        });
    }

    /// Pop the earliest entry if it is due at `now_ms`. Returns the entry's
    /// scheduled instant along with its action, so follow-up entries can be
    /// chained off the ideal instant rather than the (possibly late) tick.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, Action)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|e| (e.due_ms, e.action))
    }

    /// Void every outstanding entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.due_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut q = ActivationQueue::default();
        q.schedule(300, Action::Settle { track: Track::Mvp });
        q.schedule(100, Action::Activate { track: Track::Mvp, index: 0 });
        q.schedule(200, Action::Activate { track: Track::Mvp, index: 1 });

        let (due, _) = q.pop_due(1000).unwrap();
        assert_eq!(due, 100);
        let (due, _) = q.pop_due(1000).unwrap();
        assert_eq!(due, 200);
        let (due, _) = q.pop_due(1000).unwrap();
        assert_eq!(due, 300);
        assert!(q.pop_due(1000).is_none());
    }

    #[test]
    fn equal_instants_fire_in_scheduling_order() {
        let mut q = ActivationQueue::default();
        q.schedule(500, Action::Activate { track: Track::Mvp, index: 0 });
        q.schedule(500, Action::Activate { track: Track::TwoMonth, index: 0 });

        let (_, first) = q.pop_due(500).unwrap();
        let (_, second) = q.pop_due(500).unwrap();
        assert_eq!(first, Action::Activate { track: Track::Mvp, index: 0 });
        assert_eq!(second, Action::Activate { track: Track::TwoMonth, index: 0 });
    }

    #[test]
    fn nothing_pops_before_its_instant() {
        let mut q = ActivationQueue::default();
        q.schedule(500, Action::Settle { track: Track::Mvp });
        assert!(q.pop_due(499).is_none());
        assert!(q.pop_due(500).is_some());
    }

    #[test]
    fn clear_voids_everything() {
        let mut q = ActivationQueue::default();
        q.schedule(100, Action::Settle { track: Track::Mvp });
        q.schedule(200, Action::Settle { track: Track::TwoMonth });
        q.clear();
        assert!(q.is_empty());
        assert!(q.pop_due(u64::MAX).is_none());
        assert_eq!(q.next_due_ms(), None);
    }
}
