//! RollHistory - bounded, most-recent-first log of outcomes for one session

use super::RollOutcome;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Default number of outcomes a session keeps
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Somewhere the roll engine can record outcomes
pub trait RollLog {
    /// Put `outcome` at the front and evict past capacity, as one step
    fn record(&mut self, outcome: RollOutcome);

    fn clear(&mut self);
}

/// Process-local roll log owned by a single session
#[derive(Debug, Clone)]
pub struct RollHistory {
    entries: VecDeque<RollOutcome>,
    capacity: usize,
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history holding at most `capacity` outcomes (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        RollHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest entries if it shrank
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent outcome
    pub fn latest(&self) -> Option<&RollOutcome> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&RollOutcome> {
        self.entries.get(index)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &RollOutcome> {
        self.entries.iter()
    }

    /// Serialize the log (newest first) as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl RollLog for RollHistory {
    fn record(&mut self, outcome: RollOutcome) {
        self.entries.push_front(outcome);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            tracing::debug!("Evicted {} roll(s) from history (capacity {})", evicted, self.capacity);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Cloneable handle to one history shared by several callers
///
/// Each record takes the lock once, so append-and-truncate cannot interleave
/// with another caller's update.
#[derive(Debug, Clone, Default)]
pub struct SharedRollHistory {
    inner: Arc<Mutex<RollHistory>>,
}

impl SharedRollHistory {
    pub fn new(history: RollHistory) -> Self {
        SharedRollHistory {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(RollHistory::with_capacity(capacity))
    }

    /// Lock the history. A poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, RollHistory> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current entries, newest first
    pub fn snapshot(&self) -> Vec<RollOutcome> {
        self.lock().iter().cloned().collect()
    }
}

impl RollLog for SharedRollHistory {
    fn record(&mut self, outcome: RollOutcome) {
        self.lock().record(outcome);
    }

    fn clear(&mut self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DieType, RollMode};
    use chrono::Utc;
    use std::thread;

    fn outcome(value: u32) -> RollOutcome {
        RollOutcome::new(DieType::D6, 0, RollMode::Normal, vec![value], vec![], Utc::now(), None)
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = RollHistory::new();
        history.record(outcome(1));
        history.record(outcome(2));
        history.record(outcome(3));

        let sums: Vec<i64> = history.iter().map(|o| o.sum()).collect();
        assert_eq!(sums, vec![3, 2, 1]);
        assert_eq!(history.latest().map(|o| o.sum()), Some(3));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = RollHistory::with_capacity(2);
        history.record(outcome(1));
        history.record(outcome(2));
        history.record(outcome(3));

        assert_eq!(history.len(), 2);
        let sums: Vec<i64> = history.iter().map(|o| o.sum()).collect();
        assert_eq!(sums, vec![3, 2]);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(RollHistory::new().capacity(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(RollHistory::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_shrinking_capacity_truncates() {
        let mut history = RollHistory::with_capacity(5);
        for v in 1..=5 {
            history.record(outcome(v));
        }
        history.set_capacity(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).map(|o| o.sum()), Some(4));
    }

    #[test]
    fn test_clear() {
        let mut history = RollHistory::new();
        history.record(outcome(4));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_to_json_is_array() {
        let mut history = RollHistory::new();
        history.record(outcome(6));
        let json = history.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["kept_values"][0], 6);
    }

    #[test]
    fn test_shared_history_concurrent_records() {
        let shared = SharedRollHistory::with_capacity(10);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut log = shared.clone();
                thread::spawn(move || {
                    for v in 1..=25 {
                        log.record(outcome(v % 6 + 1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 10);
        assert_eq!(shared.snapshot().len(), 10);
    }
}
