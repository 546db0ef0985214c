//! Community group model.
//!
//! # Responsibility
//! - Define groups of members sharing goal progress.
//! - Derive the numeric goal display from free-text goal descriptions.
//!
//! # Invariants
//! - Member ids are unique within one group.
//! - Member progress is a percentage in `0..=100`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound of member progress percentages.
pub const MAX_MEMBER_PROGRESS: u8 = 100;

static GOAL_TARGET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid goal target regex"));

pub type GroupId = String;
pub type MemberId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMember {
    pub id: MemberId,
    pub name: String,
    /// Avatar URL or data URI.
    pub avatar: String,
    /// Free text; may embed a numeric target such as `Read 20 Books`.
    pub goal: String,
    pub progress: u8,
    #[serde(default)]
    pub is_current_user: bool,
}

impl CommunityMember {
    /// First integer embedded in the goal text, if any.
    pub fn goal_target(&self) -> Option<u64> {
        extract_goal_target(&self.goal)
    }

    /// Progress expressed against the goal target.
    pub fn goal_progress(&self) -> GoalProgress {
        goal_progress(&self.goal, self.progress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityGroup {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<CommunityMember>,
}

impl CommunityGroup {
    /// Looks up a member of this group by id.
    pub fn member(&self, member_id: &str) -> Option<&CommunityMember> {
        self.members.iter().find(|member| member.id == member_id)
    }

    /// Mutable lookup used by progress updates.
    pub fn member_mut(&mut self, member_id: &str) -> Option<&mut CommunityMember> {
        self.members.iter_mut().find(|member| member.id == member_id)
    }

    /// The member flagged as the signed-in user, if present in this group.
    pub fn current_user(&self) -> Option<&CommunityMember> {
        self.members.iter().find(|member| member.is_current_user)
    }
}

/// How a member's progress is presented next to their goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalProgress {
    /// Goal embeds a number: `current` of `target`.
    Counted { current: u64, target: u64 },
    /// Goal has no number: raw percentage.
    Percent(u8),
}

/// Extracts the first run of ASCII digits in `goal`.
///
/// Digit runs too large for `u64` are treated as absent.
pub fn extract_goal_target(goal: &str) -> Option<u64> {
    GOAL_TARGET_RE
        .find(goal)
        .and_then(|found| found.as_str().parse::<u64>().ok())
}

/// Computes `round(progress / 100 * target)` when the goal carries a target.
pub fn goal_progress(goal: &str, progress: u8) -> GoalProgress {
    match extract_goal_target(goal) {
        Some(target) => {
            let current = (f64::from(progress) / 100.0 * target as f64).round() as u64;
            GoalProgress::Counted { current, target }
        }
        None => GoalProgress::Percent(progress),
    }
}
