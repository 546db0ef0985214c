//! Task list partitions.

use crate::model::task::Task;

/// Tasks split for the task list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList<'a> {
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl TaskList<'_> {
    /// Whether the "Completed" section should be shown.
    pub fn has_completed(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Pending tasks first, then completed; collection order kept within each.
pub fn task_list(tasks: &[Task]) -> TaskList<'_> {
    let (completed, pending): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|task| task.completed);
    TaskList { pending, completed }
}
