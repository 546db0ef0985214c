//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `productiwise_core` linkage without a UI host.
//! - Print a dashboard summary of the seeded session.

use productiwise_core::view::dashboard::dashboard;
use productiwise_core::AppState;

fn main() {
    println!("productiwise_core ping={}", productiwise_core::ping());
    println!("productiwise_core version={}", productiwise_core::core_version());

    let today = chrono::Local::now().date_naive();
    let state = AppState::seeded(today);
    let snapshot = dashboard(&state);

    println!("user={}", snapshot.profile.name);
    println!(
        "tasks_done={}/{} completion={}%",
        snapshot.completed_count, snapshot.total_count, snapshot.completion_percent
    );
    for task in &snapshot.upcoming {
        println!("upcoming {} [{}] {}", task.deadline_key(), task.priority, task.title);
    }
    for card in &snapshot.habits {
        println!(
            "habit {}/{} {}",
            card.habit.progress, card.habit.goal, card.habit.title
        );
    }
}
