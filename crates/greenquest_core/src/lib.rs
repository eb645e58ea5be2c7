//! GreenQuest Core - gamified checklist tracking
//!
//! A fixed checklist of waste-management tasks drives XP, a derived level,
//! and a persisted per-day history of completion counts. State lives in a
//! string-keyed JSON store injected at construction; a clock collaborator
//! supplies the calendar-day key for the history.

pub mod clock;
pub mod error;
pub mod ledger;
pub mod stats;
pub mod store;
pub mod tasks;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TrackerError;
pub use ledger::{HistoryEntry, ProgressLedger, HISTORY_KEY};
pub use stats::{compute_stats, title_for_level, DerivedStats, XP_PER_TASK};
pub use store::{default_data_dir, FileStore, KvStore, MemoryStore};
pub use tasks::{seed_tasks, Task, TaskRegistry, TASKS_KEY};
pub use tracker::Tracker;
