//! Tracker facade
//!
//! Ties the registry and ledger to an injected store and clock, and runs
//! the full toggle sequence: mutate registry, persist tasks, recompute
//! stats, upsert today's history entry, persist history. All steps run
//! synchronously in that order.

use crate::clock::Clock;
use crate::ledger::{HistoryEntry, ProgressLedger};
use crate::stats::{compute_stats, DerivedStats};
use crate::store::KvStore;
use crate::tasks::{Task, TaskRegistry};
use tracing::warn;

/// The progress tracker exposed to the presentation layer: read accessors
/// for tasks, stats, and history, plus the `toggle` mutator.
pub struct Tracker {
    registry: TaskRegistry,
    ledger: ProgressLedger,
    store: Box<dyn KvStore>,
    clock: Box<dyn Clock>,
}

impl Tracker {
    /// Restore both aggregates from the store and record today's baseline
    /// entry, even when nothing has been toggled yet.
    pub fn open(store: Box<dyn KvStore>, clock: Box<dyn Clock>) -> Self {
        let registry = TaskRegistry::load(store.as_ref());
        let ledger = ProgressLedger::load(store.as_ref());
        let mut tracker = Self { registry, ledger, store, clock };
        tracker.record_history();
        tracker
    }

    /// Toggle a task and run the persistence sequence. Unknown ids change
    /// nothing and write nothing.
    pub fn toggle(&mut self, id: u32) {
        if !self.registry.toggle(id) {
            return;
        }
        if let Err(e) = self.registry.persist(self.store.as_mut()) {
            warn!("failed to persist tasks: {e}");
        }
        self.record_history();
    }

    fn record_history(&mut self) {
        let count = self.registry.completed_count();
        let today = self.clock.today();
        self.ledger.record_today(count, &today);
        if let Err(e) = self.ledger.persist(self.store.as_mut()) {
            warn!("failed to persist history: {e}");
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.registry.tasks()
    }

    pub fn stats(&self) -> DerivedStats {
        compute_stats(self.registry.tasks())
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.ledger.history()
    }
}
