//! Backlog input and sprint output types.
//!
//! A backlog file is a JSON document of parallel arrays:
//! - `targetStoryPoints` - the sprint capacity
//! - `tasks` - task names
//! - `storyPoints` - cost of each task
//! - `priorities` - value of each task
//!
//! [`BacklogFile`] mirrors that document as read from disk. Converting it
//! into a [`Backlog`] validates it; after that the optimizer can trust it.

mod error;
mod model;
mod parse;

#[cfg(test)]
mod tests;

pub use error::BacklogError;
pub use model::{Backlog, Sprint, Task};
pub(crate) use model::SprintDocument;
pub use parse::{BacklogFile, STDIN_PATH};
