//! Rendering a sprint for the operator.
//!
//! The text report keeps the layout the planning tool has always printed:
//!
//! ```text
//! Sprint:
//!  TotalStoryPoints: 5
//!  Tasks: [TaskA TaskB TaskD TaskF]
//!  StoryPoints: [1 1 3 0]
//!  Priorities: [1 2 10 4]
//! ```
//!
//! (the first line carries a trailing space after the colon).

use std::fmt::Display;

use crate::backlog::{Sprint, SprintDocument};
use crate::color::Palette;

/// Output format for a sprint report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    /// Parse a format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Render a sprint in the plain text layout.
pub fn render_text(sprint: &Sprint) -> String {
    render_with(sprint, Palette::plain())
}

/// Render a sprint in the text layout, optionally colored.
pub fn render_with(sprint: &Sprint, palette: Palette) -> String {
    let tasks: Vec<String> = sprint.names().into_iter().map(|n| palette.task(n)).collect();
    let points: Vec<String> = sprint
        .story_points()
        .into_iter()
        .map(|n| palette.number(n))
        .collect();
    let priorities: Vec<String> = sprint
        .priorities()
        .into_iter()
        .map(|n| palette.number(n))
        .collect();

    format!(
        "{} \n {}: {}\n {}: {}\n {}: {}\n {}: {}\n",
        palette.label("Sprint:"),
        palette.label("TotalStoryPoints"),
        palette.number(sprint.total_story_points),
        palette.label("Tasks"),
        bracketed(&tasks),
        palette.label("StoryPoints"),
        bracketed(&points),
        palette.label("Priorities"),
        bracketed(&priorities),
    )
}

/// Render a sprint as pretty-printed JSON (with a trailing newline).
pub fn render_json(sprint: &Sprint) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&SprintDocument::from(sprint))?;
    out.push('\n');
    Ok(out)
}

/// Render a sprint in the requested format.
pub fn render(sprint: &Sprint, format: Format, palette: Palette) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(render_with(sprint, palette)),
        Format::Json => render_json(sprint),
    }
}

/// The per-sequence lengths shown when a backlog's arrays disagree.
pub fn render_length_mismatch(tasks: usize, story_points: usize, priorities: usize) -> String {
    format!(
        "Length of Tasks: {}\nLength of StoryPoints: {}\nLength of Priorities: {}\n",
        tasks, story_points, priorities
    )
}

/// `[a b c]`, like a space-joined list in brackets.
fn bracketed<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}
