use thiserror::Error;

use crate::backlog::BacklogError;
use crate::config::ConfigError;

/// Top-level error for a planning run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backlog(#[from] BacklogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The optimizer table would exceed the configured cell limit.
    #[error(
        "backlog too large: {tasks} tasks at capacity {capacity} need {cells} table cells (limit {max})"
    )]
    TooLarge {
        tasks: usize,
        capacity: usize,
        /// Saturates at `usize::MAX` when the product overflows.
        cells: usize,
        max: usize,
    },
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
