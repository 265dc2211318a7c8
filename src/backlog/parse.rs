use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Backlog, BacklogError, Task};

/// Path argument that means "read the backlog from stdin".
pub const STDIN_PATH: &str = "-";

/// A backlog document exactly as it appears on disk.
///
/// Every field is optional; missing fields default to zero or empty.
/// Both camelCase and PascalCase keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BacklogFile {
    /// Sprint capacity in story points.
    #[serde(alias = "TargetStoryPoints")]
    pub target_story_points: i64,
    /// Task names.
    #[serde(alias = "Tasks")]
    pub tasks: Vec<String>,
    /// Story points per task.
    #[serde(alias = "StoryPoints")]
    pub story_points: Vec<i64>,
    /// Priority per task.
    #[serde(alias = "Priorities")]
    pub priorities: Vec<i64>,
}

impl BacklogFile {
    /// Parse a backlog document from JSON text.
    pub fn from_json(content: &str) -> Result<Self, BacklogError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a backlog document.
    ///
    /// `-` reads from stdin.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BacklogError> {
        let path = path.as_ref();
        let content = if path == Path::new(STDIN_PATH) {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| BacklogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            buf
        } else {
            fs::read_to_string(path).map_err(|source| BacklogError::Io {
                path: path.to_path_buf(),
                source,
            })?
        };

        debug!(path = %path.display(), bytes = content.len(), "read backlog");
        Self::from_json(&content)
    }
}

impl TryFrom<BacklogFile> for Backlog {
    type Error = BacklogError;

    fn try_from(file: BacklogFile) -> Result<Self, Self::Error> {
        let BacklogFile {
            target_story_points,
            tasks,
            story_points,
            priorities,
        } = file;

        if tasks.len() != story_points.len() || story_points.len() != priorities.len() {
            return Err(BacklogError::LengthMismatch {
                tasks: tasks.len(),
                story_points: story_points.len(),
                priorities: priorities.len(),
            });
        }

        if target_story_points < 0 {
            return Err(BacklogError::NegativeCapacity(target_story_points));
        }

        let mut validated = Vec::with_capacity(tasks.len());
        let mut positive_total: i64 = 0;
        for ((name, points), priority) in tasks.into_iter().zip(story_points).zip(priorities) {
            if points < 0 {
                return Err(BacklogError::NegativeStoryPoints {
                    task: name,
                    value: points,
                });
            }
            if priority > 0 {
                positive_total = match positive_total.checked_add(priority) {
                    Some(total) => total,
                    None => return Err(BacklogError::PriorityOverflow { task: name }),
                };
            }
            validated.push(Task::new(name, to_usize(points), priority));
        }

        Ok(Backlog::new(to_usize(target_story_points), validated))
    }
}

/// Convert a non-negative count, saturating where `usize` is narrower than `i64`.
fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
