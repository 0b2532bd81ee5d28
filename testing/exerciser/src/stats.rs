//! Atomic statistics for the exerciser loop.

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for task outcomes.
#[derive(Debug, Default)]
pub struct Stats {
    /// Tasks that ran to completion.
    pub tasks_completed: AtomicU64,
    /// Tasks suppressed because the contract reverted.
    pub tasks_reverted: AtomicU64,
}

impl Stats {
    /// Creates a new stats collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a task that completed without error.
    pub fn record_completed(&self) {
        self.tasks_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a task that ended in a contract revert.
    pub fn record_reverted(&self) {
        self.tasks_reverted.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of completed tasks.
    pub fn completed(&self) -> u64 {
        self.tasks_completed.load(Ordering::Relaxed)
    }

    /// Returns the number of reverted tasks.
    pub fn reverted(&self) -> u64 {
        self.tasks_reverted.load(Ordering::Relaxed)
    }

    /// Total number of tasks executed.
    pub fn total(&self) -> u64 {
        self.completed() + self.reverted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = Stats::new();
        stats.record_completed();
        stats.record_completed();
        stats.record_reverted();

        assert_eq!(stats.completed(), 2);
        assert_eq!(stats.reverted(), 1);
        assert_eq!(stats.total(), 3);
    }
}
