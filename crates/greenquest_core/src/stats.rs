//! Derived gamification stats
//!
//! XP, level, and progress are a pure function of the task list. Nothing
//! here is stored; the numbers are recomputed from the registry on demand.

use crate::tasks::Task;
use serde::{Deserialize, Serialize};

/// XP awarded per completed task.
pub const XP_PER_TASK: u32 = 15;

/// Title bands by level.
pub const TITLE_BANDS: &[(u32, u32, &str)] = &[
    (1, 1, "Seedling"),
    (2, 3, "Sprout"),
    (4, 6, "Green Champion"),
    (7, u32::MAX, "Eco Legend"),
];

/// Title for a level.
pub fn title_for_level(level: u32) -> &'static str {
    TITLE_BANDS
        .iter()
        .find(|(lo, hi, _)| level >= *lo && level <= *hi)
        .map(|(_, _, name)| *name)
        .unwrap_or("Seedling")
}

/// Snapshot of the gamification numbers for the current registry state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub completed_count: u32,
    pub total_count: u32,
    pub xp: u32,
    pub level: u32,
    pub progress_percent: f64,
}

impl DerivedStats {
    pub fn title(&self) -> &'static str {
        title_for_level(self.level)
    }
}

/// Derive stats from the task list. Pure, no side effects.
pub fn compute_stats(tasks: &[Task]) -> DerivedStats {
    let completed_count = tasks.iter().filter(|t| t.completed).count() as u32;
    let total_count = tasks.len() as u32;
    let xp = completed_count * XP_PER_TASK;
    let level = xp / 100 + 1;
    let progress_percent = if total_count == 0 {
        0.0
    } else {
        100.0 * f64::from(completed_count) / f64::from(total_count)
    };
    DerivedStats { completed_count, total_count, xp, level, progress_percent }
}
