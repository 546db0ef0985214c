//! Dashboard snapshot.

use super::habits::{habit_card, HabitCard};
use super::rounded_percent;
use crate::model::profile::UserProfile;
use crate::model::task::Task;
use crate::store::AppState;

/// Number of pending tasks listed on the dashboard.
pub const UPCOMING_TASK_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub profile: &'a UserProfile,
    pub completed_count: usize,
    pub total_count: usize,
    /// `round(completed / total * 100)`, 0 for an empty collection.
    pub completion_percent: u8,
    pub upcoming: Vec<&'a Task>,
    pub habits: Vec<HabitCard<'a>>,
}

/// Builds the dashboard snapshot from the current state.
pub fn dashboard(state: &AppState) -> Dashboard<'_> {
    let tasks = state.tasks();
    let completed_count = tasks.iter().filter(|task| task.completed).count();
    Dashboard {
        profile: state.profile(),
        completed_count,
        total_count: tasks.len(),
        completion_percent: completion_percent(tasks),
        upcoming: upcoming_tasks(tasks),
        habits: state.habits().iter().map(habit_card).collect(),
    }
}

/// Share of completed tasks, rounded; `0` for an empty list.
pub fn completion_percent(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|task| task.completed).count();
    rounded_percent(completed, tasks.len())
}

/// First `UPCOMING_TASK_LIMIT` incomplete tasks in collection order.
pub fn upcoming_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| !task.completed)
        .take(UPCOMING_TASK_LIMIT)
        .collect()
}
