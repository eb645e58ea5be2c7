//! Progress ledger
//!
//! Ordered history of daily completion counts, one entry per calendar day.
//! The last entry is updated in place while the day key is unchanged; a new
//! day appends. Entries are never deleted, and this module is the sole
//! writer of the history aggregate.

use crate::error::TrackerError;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Store key for the serialized history sequence.
pub const HISTORY_KEY: &str = "history";

/// One calendar-day snapshot of the completed-task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub completed: u32,
}

/// Insertion-ordered daily history with at most one entry per date.
#[derive(Debug, Clone, Default)]
pub struct ProgressLedger {
    entries: Vec<HistoryEntry>,
}

impl ProgressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from the store; absent or malformed data yields an empty
    /// history.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(HISTORY_KEY).and_then(|raw| serde_json::from_str(&raw).ok()) {
            Some(entries) => Self { entries },
            None => {
                debug!("no persisted history, starting empty");
                Self::new()
            }
        }
    }

    /// Upsert today's entry: overwrite the last entry's count when its date
    /// matches `today`, otherwise append a new entry. Idempotent for
    /// repeated calls with the same (count, day) pair.
    pub fn record_today(&mut self, completed: u32, today: &str) {
        match self.entries.last_mut() {
            Some(last) if last.date == today => {
                last.completed = completed;
            }
            _ => {
                self.entries.push(HistoryEntry {
                    date: today.to_string(),
                    completed,
                });
            }
        }
    }

    /// History in insertion order. Read-only for callers.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Write the full sequence under the history key.
    pub fn persist(&self, store: &mut dyn KvStore) -> Result<(), TrackerError> {
        let raw = serde_json::to_string(&self.entries)?;
        store.set(HISTORY_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_first_record_appends() {
        let mut ledger = ProgressLedger::new();
        ledger.record_today(2, "6/1/2024");
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(
            ledger.history()[0],
            HistoryEntry { date: "6/1/2024".to_string(), completed: 2 }
        );
    }

    #[test]
    fn test_same_day_updates_in_place() {
        let mut ledger = ProgressLedger::new();
        ledger.record_today(2, "6/1/2024");
        ledger.record_today(3, "6/1/2024");
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.history()[0].completed, 3);
    }

    #[test]
    fn test_new_day_appends_and_preserves_earlier() {
        let mut ledger = ProgressLedger::new();
        ledger.record_today(2, "6/1/2024");
        ledger.record_today(3, "6/1/2024");
        ledger.record_today(3, "6/2/2024");
        assert_eq!(ledger.history().len(), 2);
        assert_eq!(
            ledger.history()[0],
            HistoryEntry { date: "6/1/2024".to_string(), completed: 3 }
        );
        assert_eq!(
            ledger.history()[1],
            HistoryEntry { date: "6/2/2024".to_string(), completed: 3 }
        );
    }

    #[test]
    fn test_repeated_identical_record_is_idempotent() {
        let mut ledger = ProgressLedger::new();
        ledger.record_today(4, "6/1/2024");
        let snapshot = ledger.history().to_vec();
        ledger.record_today(4, "6/1/2024");
        assert_eq!(ledger.history(), &snapshot[..]);
    }

    #[test]
    fn test_at_most_one_entry_per_date() {
        let mut ledger = ProgressLedger::new();
        for count in 0..=9 {
            ledger.record_today(count, "6/1/2024");
        }
        ledger.record_today(9, "6/2/2024");
        for count in (0..=9).rev() {
            ledger.record_today(count, "6/2/2024");
        }
        let mut dates: Vec<&str> = ledger.history().iter().map(|e| e.date.as_str()).collect();
        dates.dedup();
        assert_eq!(dates.len(), ledger.history().len());
        assert_eq!(ledger.history().len(), 2);
    }

    #[test]
    fn test_persist_and_load_round_trip() {
        let mut store = MemoryStore::new();
        let mut ledger = ProgressLedger::new();
        ledger.record_today(1, "6/1/2024");
        ledger.record_today(5, "6/2/2024");
        ledger.persist(&mut store).unwrap();

        let restored = ProgressLedger::load(&store);
        assert_eq!(restored.history(), ledger.history());
    }

    #[test]
    fn test_load_malformed_yields_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "not json at all").unwrap();
        let ledger = ProgressLedger::load(&store);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_load_absent_yields_empty() {
        let store = MemoryStore::new();
        let ledger = ProgressLedger::load(&store);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_zero_count_day_zero_entry() {
        let mut ledger = ProgressLedger::new();
        ledger.record_today(0, "6/1/2024");
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.history()[0].completed, 0);
    }
}
