use serde::Serialize;

use super::BacklogError;

/// A single backlog task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name as given in the backlog.
    pub name: String,
    /// Story points the task consumes.
    pub story_points: usize,
    /// Priority value the task contributes when selected.
    pub priority: i64,
}

impl Task {
    /// Create a new task.
    pub fn new(name: impl Into<String>, story_points: usize, priority: i64) -> Self {
        Self {
            name: name.into(),
            story_points,
            priority,
        }
    }
}

/// A validated backlog: the sprint capacity plus the candidate tasks in
/// backlog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backlog {
    /// Maximum total story points the sprint may hold.
    pub capacity: usize,
    /// Candidate tasks, in original order.
    pub tasks: Vec<Task>,
}

impl Backlog {
    /// Create a backlog from tasks.
    pub fn new(capacity: usize, tasks: Vec<Task>) -> Self {
        Self { capacity, tasks }
    }

    /// Build a backlog from parallel name/cost/value sequences.
    ///
    /// Fails when the three sequences differ in length.
    pub fn from_parts(
        capacity: usize,
        names: Vec<String>,
        story_points: Vec<usize>,
        priorities: Vec<i64>,
    ) -> Result<Self, BacklogError> {
        if names.len() != story_points.len() || story_points.len() != priorities.len() {
            return Err(BacklogError::LengthMismatch {
                tasks: names.len(),
                story_points: story_points.len(),
                priorities: priorities.len(),
            });
        }

        let tasks = names
            .into_iter()
            .zip(story_points)
            .zip(priorities)
            .map(|((name, points), priority)| Task::new(name, points, priority))
            .collect();

        Ok(Self { capacity, tasks })
    }

    /// Replace the sprint capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of candidate tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the backlog has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task names in backlog order.
    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Story points in backlog order.
    pub fn story_points(&self) -> Vec<usize> {
        self.tasks.iter().map(|t| t.story_points).collect()
    }

    /// Priorities in backlog order.
    pub fn priorities(&self) -> Vec<i64> {
        self.tasks.iter().map(|t| t.priority).collect()
    }
}

/// The tasks chosen for a sprint, in backlog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprint {
    /// Sum of the selected tasks' story points.
    pub total_story_points: usize,
    /// Selected tasks, in the order they appear in the backlog.
    pub tasks: Vec<Task>,
}

impl Sprint {
    /// Names of the selected tasks.
    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Story points of the selected tasks.
    pub fn story_points(&self) -> Vec<usize> {
        self.tasks.iter().map(|t| t.story_points).collect()
    }

    /// Priorities of the selected tasks.
    pub fn priorities(&self) -> Vec<i64> {
        self.tasks.iter().map(|t| t.priority).collect()
    }

    /// Sum of the selected tasks' priorities, saturating at `i64::MAX`.
    pub fn total_priority(&self) -> i64 {
        self.tasks
            .iter()
            .fold(0i64, |total, t| total.saturating_add(t.priority))
    }

    /// True when nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Wire form of a [`Sprint`], used for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SprintDocument<'a> {
    pub total_story_points: usize,
    pub total_priority: i64,
    pub tasks: Vec<&'a str>,
    pub story_points: Vec<usize>,
    pub priorities: Vec<i64>,
}

impl<'a> From<&'a Sprint> for SprintDocument<'a> {
    fn from(sprint: &'a Sprint) -> Self {
        Self {
            total_story_points: sprint.total_story_points,
            total_priority: sprint.total_priority(),
            tasks: sprint.names(),
            story_points: sprint.story_points(),
            priorities: sprint.priorities(),
        }
    }
}
