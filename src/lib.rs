//! sprint-select: choose the sprint that maximizes backlog priority.
//!
//! Sprint planning is modeled as a 0/1 knapsack problem: every backlog task
//! costs story points and is worth its priority, and the sprint may hold at
//! most its target story points. [`optimizer::optimize`] returns the exact
//! optimum.
//!
//! ## Backlog file
//!
//! ```json
//! {
//!   "targetStoryPoints": 5,
//!   "tasks": ["TaskA", "TaskB"],
//!   "storyPoints": [1, 3],
//!   "priorities": [2, 10]
//! }
//! ```

pub mod backlog;
pub mod color;
pub mod config;
mod error;
pub mod logging;
pub mod optimizer;
pub mod plan;
pub mod report;
#[doc(hidden)]
pub mod testutil;

pub use error::Error;
