//! Profile save.

use crate::model::profile::UserProfile;
use crate::store::AppState;
use log::info;

impl AppState {
    /// Replaces the profile wholesale and returns the previous value.
    pub fn save_profile(&mut self, profile: UserProfile) -> UserProfile {
        info!("event=profile_save module=service status=ok");
        std::mem::replace(&mut self.profile, profile)
    }
}
