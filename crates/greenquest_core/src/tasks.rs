//! Task registry
//!
//! Owns the canonical checklist: a closed set of 9 waste-management tasks
//! seeded at first run and restored from the store afterwards. The only
//! mutation is toggling a task's completion flag; the set itself never
//! changes at runtime.

use crate::error::TrackerError;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Store key for the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub label: String,
    pub completed: bool,
}

/// The fixed seed checklist, all incomplete.
pub fn seed_tasks() -> Vec<Task> {
    let labels = [
        "Mandatory Training for Citizens",
        "Phase-wise Training to Waste Workers",
        "Formation of Green Champions Committees",
        "Incentive-based Approach for Segregation",
        "Waste Movement Reporting via App",
        "Community Participation - Clean Day",
        "Penalization System Implementation",
        "Setup Waste Management Facilities",
        "Launch Complete Digital App System",
    ];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Task {
            id: i as u32 + 1,
            label: label.to_string(),
            completed: false,
        })
        .collect()
}

/// Authoritative task list with completion state.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Fresh registry from the seed list.
    pub fn new() -> Self {
        Self { tasks: seed_tasks() }
    }

    /// Restore from the store; absent or malformed data falls back to the
    /// seed list.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(TASKS_KEY).and_then(|raw| serde_json::from_str(&raw).ok()) {
            Some(tasks) => Self { tasks },
            None => {
                debug!("no persisted tasks, starting from seed list");
                Self::new()
            }
        }
    }

    /// Flip completion for the task with this id. Unknown ids are ignored.
    /// Returns true when a task actually changed.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => {
                debug!(id, "toggle ignored: unknown task id");
                false
            }
        }
    }

    /// Tasks in seed order. Order never changes with completion state.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> u32 {
        self.tasks.iter().filter(|t| t.completed).count() as u32
    }

    /// Write the full list under the tasks key.
    pub fn persist(&self, store: &mut dyn KvStore) -> Result<(), TrackerError> {
        let raw = serde_json::to_string(&self.tasks)?;
        store.set(TASKS_KEY, &raw)?;
        Ok(())
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}
