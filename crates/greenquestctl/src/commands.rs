//! Command handlers for greenquestctl.

use greenquest_core::{FileStore, SystemClock, Tracker};
use owo_colors::OwoColorize;
use std::path::PathBuf;

const BAR_WIDTH: usize = 20;

/// Open the tracker against the file store, honoring a directory override.
pub fn open_tracker(data_dir: Option<PathBuf>) -> Tracker {
    let store = match data_dir {
        Some(dir) => FileStore::with_dir(dir),
        None => FileStore::new(),
    };
    Tracker::open(Box::new(store), Box::new(SystemClock))
}

/// Show level, title, XP, and the progress bar.
pub fn status(tracker: &Tracker) {
    let stats = tracker.stats();
    println!(
        "{} {} - {}",
        "Level".bold(),
        stats.level.to_string().bold().cyan(),
        stats.title().green()
    );
    println!("XP: {}", stats.xp.to_string().yellow());
    println!(
        "[{}] {:.0}% ({}/{} tasks)",
        progress_bar(stats.progress_percent),
        stats.progress_percent,
        stats.completed_count,
        stats.total_count
    );
}

/// Print the checklist in seed order with completion marks.
pub fn tasks(tracker: &Tracker) {
    for task in tracker.tasks() {
        let mark = if task.completed { "[x]".green().to_string() } else { "[ ]".to_string() };
        println!("{:>2}. {} {}", task.id, mark, task.label);
    }
}

/// Toggle a task and show the resulting stats line.
pub fn toggle(tracker: &mut Tracker, id: u32) {
    let known = tracker.tasks().iter().any(|t| t.id == id);
    tracker.toggle(id);
    if !known {
        println!("{} no task with id {}", "note:".yellow(), id);
        return;
    }
    let stats = tracker.stats();
    println!(
        "{}/{} tasks complete, {} XP, level {}",
        stats.completed_count, stats.total_count, stats.xp, stats.level
    );
}

/// Print the daily completion history.
pub fn history(tracker: &Tracker) {
    let entries = tracker.history();
    if entries.is_empty() {
        println!("no history recorded yet");
        return;
    }
    println!("{:<12} {}", "DATE".bold(), "COMPLETED".bold());
    for entry in entries {
        println!("{:<12} {}", entry.date, entry.completed);
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "-".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(100.0), "#".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_progress_bar_partial() {
        let bar = progress_bar(50.0);
        assert_eq!(bar.matches('#').count(), BAR_WIDTH / 2);
        assert_eq!(bar.len(), BAR_WIDTH);
    }
}
