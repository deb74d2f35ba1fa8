//! One-shot deferred tasks on the engine clock.
//!
//! Tasks are tagged with the `Generation` of the session that scheduled them.
//! The scheduler only orders and releases them; deciding whether a released
//! task is stale is up to the engine.

use serde::{Deserialize, Serialize};

use crate::core::Generation;

/// Work the engine defers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deferred {
    /// End the memorize window: hide every card and start play.
    HidePreview,
    /// Compare the two selected cards.
    ResolveSelection,
}

/// A queued task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Clock time (ms) at which the task becomes due.
    pub due_ms: u64,
    /// Insertion order; breaks ties between tasks due at the same time.
    pub seq: u64,
    pub generation: Generation,
    pub kind: Deferred,
}

/// Virtual clock plus pending one-shot tasks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `kind` to run `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, generation: Generation, kind: Deferred) -> ScheduledTask {
        let task = ScheduledTask {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            generation,
            kind,
        };
        self.next_seq += 1;
        self.pending.push(task);
        task
    }

    /// Milliseconds until the earliest pending task is due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|task| task.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Move the clock forward.
    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    /// Remove and return the earliest task that is due, if any.
    pub fn pop_due(&mut self) -> Option<ScheduledTask> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= self.now_ms)
            .min_by_key(|(_, task)| (task.due_ms, task.seq))?;
        Some(self.pending.remove(index))
    }

    /// Number of queued tasks, stale ones included.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let scheduler = Scheduler::new();
        assert_eq!(scheduler.now_ms(), 0);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.time_until_next(), None);
    }

    #[test]
    fn test_task_not_due_early() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(3000, Generation(1), Deferred::HidePreview);

        scheduler.advance_clock(2999);
        assert_eq!(scheduler.pop_due(), None);
        assert_eq!(scheduler.time_until_next(), Some(1));

        scheduler.advance_clock(1);
        let task = scheduler.pop_due().unwrap();
        assert_eq!(task.kind, Deferred::HidePreview);
        assert_eq!(task.due_ms, 3000);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_due_order_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(2000, Generation(1), Deferred::HidePreview);
        scheduler.schedule(1000, Generation(1), Deferred::ResolveSelection);
        scheduler.schedule(1000, Generation(2), Deferred::HidePreview);

        scheduler.advance_clock(5000);

        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due())
            .map(|task| (task.generation, task.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                (Generation(1), Deferred::ResolveSelection),
                (Generation(2), Deferred::HidePreview),
                (Generation(1), Deferred::HidePreview),
            ]
        );
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_clock(500);

        let task = scheduler.schedule(1000, Generation(0), Deferred::ResolveSelection);

        assert_eq!(task.due_ms, 1500);
        assert_eq!(scheduler.time_until_next(), Some(1000));
    }
}
