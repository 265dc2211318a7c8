//! One planning run: validate a backlog file, apply configuration, and
//! hand the result to the optimizer.

use tracing::{debug, info};

use crate::backlog::{Backlog, BacklogFile, Sprint};
use crate::config::Config;
use crate::error::Error;
use crate::optimizer;

/// Validate `file` and select its sprint under `config`.
///
/// The capacity override is applied before the size check, so the limit
/// always reflects the table that would actually be built.
pub fn select_sprint(file: BacklogFile, config: &Config) -> Result<Sprint, Error> {
    let mut backlog = Backlog::try_from(file)?;
    if let Some(capacity) = config.capacity {
        debug!(from = backlog.capacity, to = capacity, "overriding capacity");
        backlog = backlog.with_capacity(capacity);
    }

    check_size(&backlog, config.max_cells)?;

    let sprint = optimizer::optimize(&backlog);
    info!(
        candidates = backlog.len(),
        capacity = backlog.capacity,
        selected = sprint.tasks.len(),
        story_points = sprint.total_story_points,
        priority = sprint.total_priority(),
        "sprint selected"
    );
    Ok(sprint)
}

/// Reject backlogs whose optimizer table exceeds `max_cells`.
pub fn check_size(backlog: &Backlog, max_cells: usize) -> Result<(), Error> {
    let cells = optimizer::table_cells(backlog.len(), backlog.capacity).unwrap_or(usize::MAX);
    if cells > max_cells {
        return Err(Error::TooLarge {
            tasks: backlog.len(),
            capacity: backlog.capacity,
            cells,
            max: max_cells,
        });
    }
    Ok(())
}
