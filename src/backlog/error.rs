use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating a backlog.
#[derive(Debug, Error)]
pub enum BacklogError {
    /// The backlog file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backlog file is not valid JSON for a backlog.
    #[error("invalid backlog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// `tasks`, `storyPoints` and `priorities` differ in length.
    #[error("the tasks, story-points and priorities do not have the same size")]
    LengthMismatch {
        tasks: usize,
        story_points: usize,
        priorities: usize,
    },
    /// `targetStoryPoints` is negative.
    #[error("target story points must not be negative (got {0})")]
    NegativeCapacity(i64),
    /// A task has negative story points.
    #[error("task {task:?} has negative story points ({value})")]
    NegativeStoryPoints { task: String, value: i64 },
    /// The positive priorities add up to more than an `i64` can hold.
    #[error("priorities overflow at task {task:?}: their sum must fit in a signed 64-bit integer")]
    PriorityOverflow { task: String },
}
