//! Habit domain model.
//!
//! # Responsibility
//! - Define the habit record, its repetition cadence and input shapes.
//! - Own progress stepping rules.
//!
//! # Invariants
//! - `goal > 0`.
//! - `0 <= progress <= goal` after every step or edit performed here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a habit within the habit collection.
pub type HabitId = String;

/// Cadence over which a habit goal resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repetition {
    Daily,
    Weekly,
    Monthly,
}

impl Repetition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Habit record owned by the state store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    /// Target completions per repetition window.
    pub goal: u32,
    pub repetition: Repetition,
    pub progress: u32,
}

impl Habit {
    /// Builds a habit from submitted fields with a fresh id and zero progress.
    pub fn from_new(fields: NewHabit) -> Result<Self, HabitValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Builds a habit with a caller-provided id and zero progress.
    pub fn with_id(
        id: impl Into<HabitId>,
        fields: NewHabit,
    ) -> Result<Self, HabitValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HabitValidationError::EmptyId);
        }
        validate_fields(&fields.title, fields.goal)?;
        Ok(Self {
            id,
            title: fields.title.trim().to_string(),
            goal: fields.goal,
            repetition: fields.repetition,
            progress: 0,
        })
    }

    /// Checks record-level invariants of an already-built habit.
    ///
    /// # Contract
    /// - Rejects a blank `id` or `title` and a zero `goal`.
    /// - Rejects `progress > goal`.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.id.trim().is_empty() {
            return Err(HabitValidationError::EmptyId);
        }
        validate_fields(&self.title, self.goal)?;
        if self.progress > self.goal {
            return Err(HabitValidationError::ProgressAboveGoal {
                progress: self.progress,
                goal: self.goal,
            });
        }
        Ok(())
    }

    /// Whether the goal for the current window is reached.
    pub fn is_complete(&self) -> bool {
        self.progress >= self.goal
    }

    /// Whether the increment control is enabled.
    pub fn can_increment(&self) -> bool {
        !self.is_complete()
    }

    /// Whether the decrement control is enabled.
    pub fn can_decrement(&self) -> bool {
        self.progress > 0
    }

    /// Steps progress up by one. Returns `false` when already at goal.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.progress = self.goal.min(self.progress + 1);
        true
    }

    /// Steps progress down by one. Returns `false` when already at zero.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.progress = self.progress.saturating_sub(1);
        true
    }

    /// Replaces editable fields; progress is re-clamped to the new goal.
    pub fn apply(&mut self, update: HabitUpdate) -> Result<(), HabitValidationError> {
        validate_fields(&update.title, update.goal)?;
        self.title = update.title.trim().to_string();
        self.goal = update.goal;
        self.repetition = update.repetition;
        self.progress = self.progress.min(self.goal);
        Ok(())
    }
}

/// Fields submitted when creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub title: String,
    pub goal: u32,
    pub repetition: Repetition,
}

impl NewHabit {
    /// Create request; the habit starts with zero progress.
    pub fn new(title: impl Into<String>, goal: u32, repetition: Repetition) -> Self {
        Self {
            title: title.into(),
            goal,
            repetition,
        }
    }
}

/// Full replacement of the editable habit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitUpdate {
    pub title: String,
    pub goal: u32,
    pub repetition: Repetition,
}

impl From<&Habit> for HabitUpdate {
    fn from(habit: &Habit) -> Self {
        Self {
            title: habit.title.clone(),
            goal: habit.goal,
            repetition: habit.repetition,
        }
    }
}

/// Habit field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    EmptyId,
    EmptyTitle,
    ZeroGoal,
    ProgressAboveGoal { progress: u32, goal: u32 },
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "habit id cannot be empty"),
            Self::EmptyTitle => write!(f, "habit title cannot be empty"),
            Self::ZeroGoal => write!(f, "habit goal must be positive"),
            Self::ProgressAboveGoal { progress, goal } => {
                write!(f, "habit progress {progress} exceeds goal {goal}")
            }
        }
    }
}

impl Error for HabitValidationError {}

fn validate_fields(title: &str, goal: u32) -> Result<(), HabitValidationError> {
    if title.trim().is_empty() {
        return Err(HabitValidationError::EmptyTitle);
    }
    if goal == 0 {
        return Err(HabitValidationError::ZeroGoal);
    }
    Ok(())
}
