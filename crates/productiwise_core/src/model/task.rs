//! Task domain model.
//!
//! # Responsibility
//! - Define the task record, its priority scale and the typed input shapes
//!   used for create/edit.
//! - Provide the canonical task ordering.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - Ordering is `deadline ASC`, then priority rank `High < Medium < Low`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a task within the task collection.
pub type TaskId = String;

/// Task urgency, serialized with capitalized names (`Low|Medium|High`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank used to break deadline ties. Lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses the wire name; case-insensitive, surrounding whitespace ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task record owned by the state store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    /// Serialized as `YYYY-MM-DD`.
    pub deadline: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<NaiveDateTime>,
}

impl Task {
    /// Builds a task from submitted fields with a fresh id and `completed = false`.
    pub fn from_new(fields: NewTask) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Builds a task with a caller-provided id. Used for seed data.
    pub fn with_id(
        id: impl Into<TaskId>,
        fields: NewTask,
    ) -> Result<Self, TaskValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        fields.validate()?;
        Ok(Self {
            id,
            title: fields.title.trim().to_string(),
            description: normalize_description(fields.description),
            priority: fields.priority,
            deadline: fields.deadline,
            completed: false,
            reminder: fields.reminder,
        })
    }

    /// Checks record-level invariants of an already-built task.
    ///
    /// # Contract
    /// - Rejects a blank `id` or `title`.
    /// - Used when a caller hands over whole records instead of `NewTask`s.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        validate_title(&self.title)
    }

    /// Replaces every editable field; `id` and `completed` are preserved.
    pub fn apply(&mut self, update: TaskUpdate) -> Result<(), TaskValidationError> {
        validate_title(&update.title)?;
        self.title = update.title.trim().to_string();
        self.description = normalize_description(update.description);
        self.priority = update.priority;
        self.deadline = update.deadline;
        self.reminder = update.reminder;
        Ok(())
    }

    /// Deadline rendered as the calendar bucket key (`YYYY-MM-DD`).
    pub fn deadline_key(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

/// Canonical task ordering: earlier deadline first, then higher priority.
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    left.deadline
        .cmp(&right.deadline)
        .then_with(|| left.priority.rank().cmp(&right.priority.rank()))
}

/// Fields submitted when creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub reminder: Option<NaiveDateTime>,
}

impl NewTask {
    /// Minimal create request with no description or reminder.
    pub fn new(title: impl Into<String>, priority: Priority, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority,
            deadline,
            reminder: None,
        }
    }

    /// Rejects a blank title.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)
    }
}

/// Full replacement of the editable task fields.
///
/// Edit forms submit every field, so there is no partial-merge shape here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub reminder: Option<NaiveDateTime>,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            deadline: task.deadline,
            reminder: task.reminder,
        }
    }
}

impl From<NewTask> for TaskUpdate {
    fn from(fields: NewTask) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            deadline: fields.deadline,
            reminder: fields.reminder,
        }
    }
}

/// Task field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id cannot be empty"),
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

fn normalize_description(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
