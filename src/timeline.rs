//! Cooperative timer queue on a virtual millisecond clock
//!
//! Events fire in due-time order; events due at the same instant fire in the
//! order they were scheduled. Nothing is ever cancelled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<E> {
    due_ms: u64,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // Reversed so the max-heap pops the earliest entry
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Timeline<E> {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Entry<E>>,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Due time of the earliest pending event
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.due_ms)
    }

    /// Schedule `event` to fire `delay_ms` from now
    pub fn schedule_in(&mut self, delay_ms: u64, event: E) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due_ms, seq, event });
    }

    /// Pop the earliest event due at or before `until_ms`, moving the clock to
    /// its due time
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        if self.next_due_ms()? > until_ms {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.event)
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(300, "c");
        timeline.schedule_in(0, "a");
        timeline.schedule_in(200, "b");

        let mut fired = Vec::new();
        while let Some(event) = timeline.pop_due(u64::MAX) {
            fired.push((timeline.now_ms(), event));
        }

        assert_eq!(fired, vec![(0, "a"), (200, "b"), (300, "c")]);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut timeline = Timeline::new();
        for name in ["first", "second", "third"] {
            timeline.schedule_in(100, name);
        }

        assert_eq!(timeline.pop_due(100), Some("first"));
        assert_eq!(timeline.pop_due(100), Some("second"));
        assert_eq!(timeline.pop_due(100), Some("third"));
        assert_eq!(timeline.next_due_ms(), None);
    }

    #[test]
    fn test_pop_respects_horizon() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(500, 1);

        assert_eq!(timeline.pop_due(499), None);
        assert_eq!(timeline.now_ms(), 0);
        assert_eq!(timeline.next_due_ms(), Some(500));
        assert_eq!(timeline.pop_due(500), Some(1));
        assert_eq!(timeline.now_ms(), 500);
    }

    #[test]
    fn test_schedule_relative_to_clock() {
        let mut timeline = Timeline::new();
        timeline.set_now(1000);
        timeline.schedule_in(50, ());

        assert_eq!(timeline.next_due_ms(), Some(1050));

        // the clock never runs backwards
        timeline.set_now(10);
        assert_eq!(timeline.now_ms(), 1000);
    }
}
