//! Task use-cases.
//!
//! # Responsibility
//! - Create, edit, toggle and delete tasks.
//! - Restore canonical ordering after writes that can move a task.
//!
//! # Invariants
//! - Create and edit re-sort; toggle and delete never reorder.
//! - Unknown ids return `StoreError::TaskNotFound` with state unchanged.

use crate::model::task::{NewTask, Task, TaskId, TaskUpdate};
use crate::store::{AppState, StoreError, StoreResult};
use log::{debug, info};

impl AppState {
    /// Adds a task with a fresh id and `completed = false`.
    ///
    /// Returns the id of the created task.
    pub fn add_task(&mut self, fields: NewTask) -> StoreResult<TaskId> {
        let task = Task::from_new(fields)?;
        let id = task.id.clone();
        self.tasks.push(task);
        self.sort_tasks();
        info!(
            "event=task_add module=service status=ok task_id={} total={}",
            id,
            self.tasks.len()
        );
        Ok(id)
    }

    /// Replaces the editable fields of one task and re-sorts.
    pub fn edit_task(&mut self, id: &str, update: TaskUpdate) -> StoreResult<()> {
        let task = self.task_mut(id)?;
        task.apply(update)?;
        self.sort_tasks();
        info!("event=task_edit module=service status=ok task_id={id}");
        Ok(())
    }

    /// Flips the completion flag. Returns the new value.
    pub fn toggle_task(&mut self, id: &str) -> StoreResult<bool> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        info!("event=task_toggle module=service status=ok task_id={id} completed={completed}");
        Ok(completed)
    }

    /// Removes one task and returns it.
    pub fn delete_task(&mut self, id: &str) -> StoreResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.tasks.remove(index);
        info!(
            "event=task_delete module=service status=ok task_id={id} total={}",
            self.tasks.len()
        );
        Ok(removed)
    }

    fn task_mut(&mut self, id: &str) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> StoreError {
    debug!("event=task_lookup module=service status=noop task_id={id}");
    StoreError::TaskNotFound(id.to_string())
}
