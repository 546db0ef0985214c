//! Community progress updates.
//!
//! # Invariants
//! - Only the addressed member changes; sibling members and other groups are
//!   left untouched.
//! - Progress above `MAX_MEMBER_PROGRESS` is rejected, not clamped.

use crate::model::community::MAX_MEMBER_PROGRESS;
use crate::store::{AppState, StoreError, StoreResult};
use log::{info, warn};

impl AppState {
    /// Sets one member's progress percentage within one group.
    pub fn update_progress(
        &mut self,
        group_id: &str,
        member_id: &str,
        new_progress: u8,
    ) -> StoreResult<()> {
        if new_progress > MAX_MEMBER_PROGRESS {
            warn!(
                "event=community_progress module=service status=error group_id={group_id} \
                 member_id={member_id} reason=out_of_range"
            );
            return Err(StoreError::ProgressOutOfRange(new_progress));
        }

        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or_else(|| StoreError::GroupNotFound(group_id.to_string()))?;
        let member = group
            .member_mut(member_id)
            .ok_or_else(|| StoreError::MemberNotFound {
                group_id: group_id.to_string(),
                member_id: member_id.to_string(),
            })?;

        member.progress = new_progress;
        info!(
            "event=community_progress module=service status=ok group_id={group_id} \
             member_id={member_id} progress={new_progress}"
        );
        Ok(())
    }
}
