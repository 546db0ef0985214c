//! Mock data loaded at session start.

use super::AppState;
use crate::model::community::{CommunityGroup, CommunityMember};
use crate::model::habit::{Habit, Repetition};
use crate::model::profile::UserProfile;
use crate::model::task::{Priority, Task};
use chrono::{Days, NaiveDate};

const CURRENT_USER_AVATAR: &str =
    "https://ui-avatars.com/api/?name=You&background=2d555d&color=fff";

impl AppState {
    /// Builds the demo session relative to `today`.
    ///
    /// Task deadlines are offset from `today` so the dashboard always has
    /// upcoming work.
    pub fn seeded(today: NaiveDate) -> Self {
        let profile = UserProfile {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            avatar: "https://ui-avatars.com/api/?name=Alex+Johnson&background=2d555d&color=fff"
                .to_string(),
            bio: "Productivity enthusiast and software developer. I love finding new ways to \
                  optimize my workflow and help others do the same."
                .to_string(),
        };

        let tasks = vec![
            seed_task("1", "Finalize Q3 report", Priority::High, today, 2, false),
            seed_task(
                "2",
                "Design new landing page mockups",
                Priority::Medium,
                today,
                5,
                false,
            ),
            seed_task(
                "3",
                "Book flight tickets for conference",
                Priority::Low,
                today,
                10,
                true,
            ),
        ];

        let habits = vec![
            seed_habit("1", "Read 20 pages", 1, 1),
            seed_habit("2", "Drink 8 glasses of water", 8, 4),
            seed_habit("3", "Meditate for 10 minutes", 1, 0),
        ];

        let groups = vec![
            CommunityGroup {
                id: "g1".to_string(),
                name: "Web Development Squad".to_string(),
                members: vec![
                    seed_member("1", "Alice", 237, "Learn React Native", 75),
                    seed_member("2", "Bob", 238, "Master TypeScript", 40),
                    current_user("u1", "Build a Portfolio", 50),
                ],
            },
            CommunityGroup {
                id: "g2".to_string(),
                name: "Book Club".to_string(),
                members: vec![
                    seed_member("3", "Charlie", 239, "Read 50 Books", 60),
                    current_user("u2", "Read 20 Books", 25),
                ],
            },
        ];

        Self::from_parts(profile, tasks, habits, groups)
    }
}

fn seed_task(
    id: &str,
    title: &str,
    priority: Priority,
    today: NaiveDate,
    days_ahead: u64,
    completed: bool,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        priority,
        deadline: today.checked_add_days(Days::new(days_ahead)).unwrap_or(today),
        completed,
        reminder: None,
    }
}

fn seed_habit(id: &str, title: &str, goal: u32, progress: u32) -> Habit {
    Habit {
        id: id.to_string(),
        title: title.to_string(),
        goal,
        repetition: Repetition::Daily,
        progress,
    }
}

fn seed_member(id: &str, name: &str, photo_id: u32, goal: &str, progress: u8) -> CommunityMember {
    CommunityMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://picsum.photos/id/{photo_id}/100/100"),
        goal: goal.to_string(),
        progress,
        is_current_user: false,
    }
}

fn current_user(id: &str, goal: &str, progress: u8) -> CommunityMember {
    CommunityMember {
        id: id.to_string(),
        name: "You".to_string(),
        avatar: CURRENT_USER_AVATAR.to_string(),
        goal: goal.to_string(),
        progress,
        is_current_user: true,
    }
}
