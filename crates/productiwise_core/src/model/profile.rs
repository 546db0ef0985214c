//! Signed-in user profile.

use serde::{Deserialize, Serialize};

/// Profile shown on the dashboard and profile screens.
///
/// No field is validated; saves replace the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar URL or data URI.
    pub avatar: String,
    pub bio: String,
}
