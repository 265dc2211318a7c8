//! Sprint selection as a 0/1 knapsack problem.
//!
//! Each task is an item whose weight is its story points and whose value is
//! its priority. The sprint capacity is the knapsack bound. The solution is
//! exact: a dynamic-programming table over (tasks considered, capacity)
//! followed by a backward walk to recover which tasks were kept.
//!
//! Tie-breaking: a task is only kept when including it is strictly better
//! than leaving it out, so among equal-value subsets the one built from
//! earlier tasks wins.

mod table;


use tracing::debug;

use crate::backlog::{Backlog, Sprint};

use table::Table;

/// Number of DP cells needed for `task_count` tasks and `capacity` points.
///
/// Returns `None` if the count overflows `usize`.
pub fn table_cells(task_count: usize, capacity: usize) -> Option<usize> {
    task_count
        .checked_add(1)?
        .checked_mul(capacity.checked_add(1)?)
}

/// Select the tasks that maximize total priority without exceeding the
/// backlog's capacity.
///
/// The selection is returned in backlog order. The capacity-0 column of the
/// table is never filled, so a zero-point task is not picked when the
/// capacity itself is zero.
///
/// Runs in `O(tasks * capacity)` time and space; callers that accept
/// untrusted input should bound [`table_cells`] first.
///
/// Priorities are summed with saturation. A backlog validated from a
/// [`BacklogFile`](crate::backlog::BacklogFile) never reaches the bound.
pub fn optimize(backlog: &Backlog) -> Sprint {
    let task_count = backlog.tasks.len();
    let capacity = backlog.capacity;

    let mut best: Table<i64> = Table::new(task_count + 1, capacity + 1);
    let mut kept: Table<bool> = Table::new(task_count + 1, capacity + 1);

    for i in 1..=task_count {
        let task = &backlog.tasks[i - 1];
        for c in 1..=capacity {
            let without = best.get(i - 1, c);
            if task.story_points > c {
                best.set(i, c, without);
                continue;
            }

            let with = task.priority.saturating_add(best.get(i - 1, c - task.story_points));
            if with > without {
                best.set(i, c, with);
                kept.set(i, c, true);
            } else {
                best.set(i, c, without);
            }
        }
    }

    let mut indices = Vec::new();
    let mut c = capacity;
    for i in (1..=task_count).rev() {
        if kept.get(i, c) {
            indices.push(i - 1);
            c -= backlog.tasks[i - 1].story_points;
        }
    }
    indices.sort_unstable();

    let mut sprint = Sprint::default();
    for idx in indices {
        let task = &backlog.tasks[idx];
        sprint.total_story_points += task.story_points;
        sprint.tasks.push(task.clone());
    }

    debug!(
        tasks = task_count,
        capacity,
        selected = sprint.tasks.len(),
        total_story_points = sprint.total_story_points,
        total_priority = best.get(task_count, capacity),
        "optimized sprint"
    );

    sprint
}
