//! In-memory application state.
//!
//! # Responsibility
//! - Own every entity collection for the lifetime of one app session.
//! - Expose read-only snapshots to view code.
//! - Define the error contract shared by all mutating operations.
//!
//! # Invariants
//! - Fields are private to the crate; mutation goes through `service` methods.
//! - Ids are unique within their collection; member ids within their group.
//! - `tasks` is always in canonical order (`deadline ASC`, priority rank ASC).
//! - A failed operation leaves state unchanged.

mod seed;

use crate::model::community::{CommunityGroup, GroupId, MemberId, MAX_MEMBER_PROGRESS};
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use crate::model::profile::UserProfile;
use crate::model::task::{Task, TaskId, TaskValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    TaskValidation(TaskValidationError),
    HabitValidation(HabitValidationError),
    TaskNotFound(TaskId),
    HabitNotFound(HabitId),
    GroupNotFound(GroupId),
    MemberNotFound { group_id: GroupId, member_id: MemberId },
    /// Community progress outside `0..=100`.
    ProgressOutOfRange(u8),
    DuplicateTaskId(TaskId),
    DuplicateHabitId(HabitId),
    DuplicateGroupId(GroupId),
    DuplicateMemberId { group_id: GroupId, member_id: MemberId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskValidation(err) => write!(f, "{err}"),
            Self::HabitValidation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
            Self::GroupNotFound(id) => write!(f, "community group not found: {id}"),
            Self::MemberNotFound {
                group_id,
                member_id,
            } => write!(f, "member `{member_id}` not found in group `{group_id}`"),
            Self::ProgressOutOfRange(value) => write!(
                f,
                "progress {value} is out of range; expected 0..={MAX_MEMBER_PROGRESS}"
            ),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
            Self::DuplicateHabitId(id) => write!(f, "duplicate habit id: {id}"),
            Self::DuplicateGroupId(id) => write!(f, "duplicate community group id: {id}"),
            Self::DuplicateMemberId {
                group_id,
                member_id,
            } => write!(f, "duplicate member `{member_id}` in group `{group_id}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TaskValidation(err) => Some(err),
            Self::HabitValidation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::TaskValidation(value)
    }
}

impl From<HabitValidationError> for StoreError {
    fn from(value: HabitValidationError) -> Self {
        Self::HabitValidation(value)
    }
}

/// Whole-app state for one session.
///
/// Views borrow it immutably; operations live in `crate::service`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) profile: UserProfile,
    pub(crate) tasks: Vec<Task>,
    pub(crate) habits: Vec<Habit>,
    pub(crate) groups: Vec<CommunityGroup>,
}

impl AppState {
    /// Creates a state from explicit collections.
    ///
    /// # Contract
    /// - Every task and habit must pass its record validation.
    /// - Task, habit and group ids must be unique; member ids must be unique
    ///   within their group.
    /// - Member progress must be within `0..=100`.
    /// - Tasks are put into canonical order; other collections keep their order.
    pub fn new(
        profile: UserProfile,
        tasks: Vec<Task>,
        habits: Vec<Habit>,
        groups: Vec<CommunityGroup>,
    ) -> StoreResult<Self> {
        validate_tasks(&tasks)?;
        validate_habits(&habits)?;
        validate_groups(&groups)?;
        Ok(Self::from_parts(profile, tasks, habits, groups))
    }

    /// Creates a state holding only `profile`.
    pub fn empty(profile: UserProfile) -> Self {
        Self::from_parts(profile, Vec::new(), Vec::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        profile: UserProfile,
        tasks: Vec<Task>,
        habits: Vec<Habit>,
        groups: Vec<CommunityGroup>,
    ) -> Self {
        let mut state = Self {
            profile,
            tasks,
            habits,
            groups,
        };
        state.sort_tasks();
        state
    }

    /// Signed-in user profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// All tasks in canonical order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All habits in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// All community groups in insertion order.
    pub fn groups(&self) -> &[CommunityGroup] {
        &self.groups
    }

    /// Looks up one task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Looks up one habit by id.
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Looks up one community group by id.
    pub fn group(&self, id: &str) -> Option<&CommunityGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub(crate) fn sort_tasks(&mut self) {
        // `sort_by` is stable, so equal keys keep insertion order.
        self.tasks.sort_by(crate::model::task::compare_tasks);
    }
}

fn validate_tasks(tasks: &[Task]) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id.as_str()) {
            return Err(StoreError::DuplicateTaskId(task.id.clone()));
        }
    }
    Ok(())
}

fn validate_habits(habits: &[Habit]) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for habit in habits {
        habit.validate()?;
        if !seen.insert(habit.id.as_str()) {
            return Err(StoreError::DuplicateHabitId(habit.id.clone()));
        }
    }
    Ok(())
}

fn validate_groups(groups: &[CommunityGroup]) -> StoreResult<()> {
    let mut seen_groups = HashSet::new();
    for group in groups {
        if !seen_groups.insert(group.id.as_str()) {
            return Err(StoreError::DuplicateGroupId(group.id.clone()));
        }
        let mut seen_members = HashSet::new();
        for member in &group.members {
            if !seen_members.insert(member.id.as_str()) {
                return Err(StoreError::DuplicateMemberId {
                    group_id: group.id.clone(),
                    member_id: member.id.clone(),
                });
            }
            if member.progress > MAX_MEMBER_PROGRESS {
                return Err(StoreError::ProgressOutOfRange(member.progress));
            }
        }
    }
    Ok(())
}
