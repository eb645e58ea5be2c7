//! Error types for GreenQuest.

use thiserror::Error;

/// Errors surfaced by persistence writes.
///
/// Malformed persisted data never produces an error (loads fall back to
/// defaults), and unknown task ids are silent no-ops; only write failures
/// carry through, and the tracker absorbs those after logging them.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
