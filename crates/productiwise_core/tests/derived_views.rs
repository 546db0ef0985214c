use chrono::NaiveDate;
use productiwise_core::view::calendar::{calendar_month, date_key, tasks_by_date, MonthCursor};
use productiwise_core::view::dashboard::{completion_percent, dashboard, upcoming_tasks};
use productiwise_core::view::habits::habit_cards;
use productiwise_core::view::tasks::task_list;
use productiwise_core::{AppState, NewTask, Priority, Task, UserProfile};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn task(id: &str, deadline: NaiveDate, completed: bool) -> Task {
    let mut task = Task::with_id(id, NewTask::new(id, Priority::Medium, deadline)).unwrap();
    task.completed = completed;
    task
}

#[test]
fn completion_percent_is_zero_for_no_tasks() {
    assert_eq!(completion_percent(&[]), 0);
}

#[test]
fn completion_percent_rounds() {
    let tasks = vec![
        task("a", date(5, 1), true),
        task("b", date(5, 2), false),
        task("c", date(5, 3), false),
    ];
    assert_eq!(completion_percent(&tasks), 33);
}

#[test]
fn upcoming_takes_first_three_incomplete_in_order() {
    let tasks = vec![
        task("a", date(5, 1), false),
        task("b", date(5, 2), true),
        task("c", date(5, 3), false),
        task("d", date(5, 4), false),
        task("e", date(5, 5), false),
    ];
    let ids: Vec<&str> = upcoming_tasks(&tasks)
        .iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn seeded_dashboard_snapshot() {
    let state = AppState::seeded(date(5, 1));
    let snapshot = dashboard(&state);

    assert_eq!(snapshot.profile.name, "Alex Johnson");
    assert_eq!(snapshot.total_count, 3);
    assert_eq!(snapshot.completed_count, 1);
    assert_eq!(snapshot.completion_percent, 33);
    assert_eq!(snapshot.upcoming.len(), 2);
    assert_eq!(snapshot.upcoming[0].deadline, date(5, 3));
    assert_eq!(snapshot.habits.len(), 3);
    assert_eq!(snapshot.habits[1].percent, 50.0);
}

#[test]
fn empty_state_dashboard_has_no_division_by_zero() {
    let profile = UserProfile {
        name: "Empty".to_string(),
        email: String::new(),
        avatar: String::new(),
        bio: String::new(),
    };
    let state = AppState::empty(profile);
    let snapshot = dashboard(&state);
    assert_eq!(snapshot.completion_percent, 0);
    assert!(snapshot.upcoming.is_empty());
}

#[test]
fn task_list_puts_pending_before_completed() {
    let tasks = vec![
        task("a", date(5, 1), true),
        task("b", date(5, 2), false),
        task("c", date(5, 3), true),
        task("d", date(5, 4), false),
    ];
    let list = task_list(&tasks);
    let pending: Vec<&str> = list.pending.iter().map(|t| t.id.as_str()).collect();
    let completed: Vec<&str> = list.completed.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(pending, vec!["b", "d"]);
    assert_eq!(completed, vec!["a", "c"]);
    assert!(list.has_completed());
}

#[test]
fn habit_cards_report_step_availability() {
    let state = AppState::seeded(date(5, 1));
    let cards = habit_cards(state.habits());

    // "Read 20 pages" 1/1
    assert!(cards[0].is_complete);
    assert!(!cards[0].can_increment);
    assert!(cards[0].can_decrement);
    assert_eq!(cards[0].percent, 100.0);
    // "Meditate for 10 minutes" 0/1
    assert!(!cards[2].can_decrement);
    assert!(cards[2].can_increment);
    assert_eq!(cards[2].percent, 0.0);
}

#[test]
fn tasks_are_bucketed_by_exact_deadline_key() {
    let tasks = vec![
        task("a", date(5, 3), false),
        task("b", date(5, 3), true),
        task("c", date(6, 1), false),
    ];
    let buckets = tasks_by_date(&tasks);

    assert_eq!(buckets.len(), 2);
    let may_third: Vec<&str> = buckets["2026-05-03"]
        .iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(may_third, vec!["a", "b"]);
    assert_eq!(date_key(date(6, 1)), "2026-06-01");
    assert!(buckets.contains_key("2026-06-01"));
}

#[test]
fn calendar_month_places_tasks_in_day_cells() {
    let tasks = vec![
        task("a", date(5, 3), false),
        task("b", date(5, 31), false),
        task("c", date(6, 1), false),
    ];
    let cursor = MonthCursor::containing(date(5, 20));
    let month = calendar_month(cursor, &tasks, date(5, 3));

    // 2026-05-01 is a Friday.
    assert_eq!(month.leading_blanks, 5);
    assert_eq!(month.days.len(), 31);

    let third = &month.days[2];
    assert_eq!(third.key, "2026-05-03");
    assert!(third.is_today);
    assert_eq!(third.tasks.len(), 1);
    assert_eq!(third.tasks[0].id, "a");

    assert_eq!(month.days[30].tasks[0].id, "b");
    assert!(month
        .days
        .iter()
        .all(|cell| cell.tasks.iter().all(|task| task.id != "c")));
    assert_eq!(month.days.iter().filter(|cell| cell.is_today).count(), 1);
}

#[test]
fn calendar_navigation_moves_between_months() {
    let cursor = MonthCursor::containing(date(5, 20));
    assert_eq!(cursor.next().month(), 6);
    assert_eq!(cursor.previous().month(), 4);
    assert_eq!(cursor.next().previous(), cursor);
}
