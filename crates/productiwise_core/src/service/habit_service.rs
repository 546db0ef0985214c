//! Habit use-cases.
//!
//! # Invariants
//! - Increment never raises progress above goal; decrement never below zero.
//! - Stepping past a bound is a successful no-op, not an error.

use crate::model::habit::{Habit, HabitId, HabitUpdate, NewHabit};
use crate::store::{AppState, StoreError, StoreResult};
use log::{debug, info};

impl AppState {
    /// Adds a habit with zero progress. Returns the new id.
    pub fn add_habit(&mut self, fields: NewHabit) -> StoreResult<HabitId> {
        let habit = Habit::from_new(fields)?;
        let id = habit.id.clone();
        self.habits.push(habit);
        info!(
            "event=habit_add module=service status=ok habit_id={} total={}",
            id,
            self.habits.len()
        );
        Ok(id)
    }

    /// Replaces the editable fields of habit `id`.
    ///
    /// # Contract
    /// - Progress is kept but clamped to the new goal.
    /// - Unknown id returns `HabitNotFound`; invalid fields leave the habit untouched.
    pub fn edit_habit(&mut self, id: &str, update: HabitUpdate) -> StoreResult<()> {
        self.habit_mut(id)?.apply(update)?;
        info!("event=habit_edit module=service status=ok habit_id={id}");
        Ok(())
    }

    /// Removes habit `id` and returns it. Unknown id returns `HabitNotFound`.
    pub fn delete_habit(&mut self, id: &str) -> StoreResult<Habit> {
        let index = self
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or_else(|| StoreError::HabitNotFound(id.to_string()))?;
        let removed = self.habits.remove(index);
        info!("event=habit_delete module=service status=ok habit_id={id}");
        Ok(removed)
    }

    /// Steps progress up by one, stopping at the goal. Returns new progress.
    pub fn increment_habit(&mut self, id: &str) -> StoreResult<u32> {
        let habit = self.habit_mut(id)?;
        if habit.increment() {
            debug!(
                "event=habit_increment module=service status=ok habit_id={id} progress={}",
                habit.progress
            );
        } else {
            debug!("event=habit_increment module=service status=noop habit_id={id}");
        }
        Ok(habit.progress)
    }

    /// Steps progress down by one, stopping at zero. Returns new progress.
    pub fn decrement_habit(&mut self, id: &str) -> StoreResult<u32> {
        let habit = self.habit_mut(id)?;
        if habit.decrement() {
            debug!(
                "event=habit_decrement module=service status=ok habit_id={id} progress={}",
                habit.progress
            );
        } else {
            debug!("event=habit_decrement module=service status=noop habit_id={id}");
        }
        Ok(habit.progress)
    }

    fn habit_mut(&mut self, id: &str) -> StoreResult<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or_else(|| StoreError::HabitNotFound(id.to_string()))
    }
}
