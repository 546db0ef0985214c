//! Community group cards.

use crate::model::community::{CommunityGroup, CommunityMember, GoalProgress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCard<'a> {
    pub member: &'a CommunityMember,
    pub goal_progress: GoalProgress,
    /// Only the signed-in user's own progress is adjustable.
    pub editable: bool,
}

impl MemberCard<'_> {
    /// Text shown under the progress bar, e.g. `5 / 20` or `50%`.
    pub fn progress_label(&self) -> String {
        match self.goal_progress {
            GoalProgress::Counted { current, target } => format!("{current} / {target}"),
            GoalProgress::Percent(percent) => format!("{percent}%"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCard<'a> {
    pub group: &'a CommunityGroup,
    pub members: Vec<MemberCard<'a>>,
}

/// Cards for every group; only the current user's member card is editable.
pub fn group_cards(groups: &[CommunityGroup]) -> Vec<GroupCard<'_>> {
    groups
        .iter()
        .map(|group| GroupCard {
            group,
            members: group
                .members
                .iter()
                .map(|member| MemberCard {
                    member,
                    goal_progress: member.goal_progress(),
                    editable: member.is_current_user,
                })
                .collect(),
        })
        .collect()
}
