use chrono::NaiveDate;
use productiwise_core::view::community::group_cards;
use productiwise_core::{AppState, GoalProgress, StoreError, UserProfile};

fn seeded() -> AppState {
    AppState::seeded(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
}

#[test]
fn update_progress_changes_only_target_member() {
    let mut state = seeded();
    let before = state.clone();

    state.update_progress("g1", "u1", 85).unwrap();

    let group = state.group("g1").unwrap();
    assert_eq!(group.member("u1").unwrap().progress, 85);
    for member in group.members.iter().filter(|member| member.id != "u1") {
        let original = before.group("g1").unwrap().member(&member.id).unwrap();
        assert_eq!(member.progress, original.progress);
    }
    assert_eq!(state.group("g2"), before.group("g2"));
}

#[test]
fn update_progress_accepts_bounds() {
    let mut state = seeded();
    state.update_progress("g2", "u2", 0).unwrap();
    assert_eq!(state.group("g2").unwrap().member("u2").unwrap().progress, 0);
    state.update_progress("g2", "u2", 100).unwrap();
    assert_eq!(state.group("g2").unwrap().member("u2").unwrap().progress, 100);
}

#[test]
fn update_progress_rejects_values_above_hundred() {
    let mut state = seeded();
    let before = state.clone();

    let err = state.update_progress("g1", "u1", 101).unwrap_err();

    assert_eq!(err, StoreError::ProgressOutOfRange(101));
    assert_eq!(state, before);
}

#[test]
fn unknown_group_or_member_is_reported() {
    let mut state = seeded();
    assert_eq!(
        state.update_progress("g9", "u1", 10).unwrap_err(),
        StoreError::GroupNotFound("g9".to_string())
    );
    // u2 exists, but only in g2.
    assert_eq!(
        state.update_progress("g1", "u2", 10).unwrap_err(),
        StoreError::MemberNotFound {
            group_id: "g1".to_string(),
            member_id: "u2".to_string(),
        }
    );
}

#[test]
fn goal_display_uses_embedded_number() {
    let state = seeded();
    let cards = group_cards(state.groups());
    let book_club = cards.iter().find(|card| card.group.id == "g2").unwrap();
    let me = book_club
        .members
        .iter()
        .find(|card| card.member.id == "u2")
        .unwrap();

    assert_eq!(
        me.goal_progress,
        GoalProgress::Counted {
            current: 5,
            target: 20
        }
    );
    assert_eq!(me.progress_label(), "5 / 20");
    assert!(me.editable);
}

#[test]
fn goal_display_falls_back_to_percent() {
    let state = seeded();
    let cards = group_cards(state.groups());
    let squad = &cards[0];
    let bob = squad
        .members
        .iter()
        .find(|card| card.member.name == "Bob")
        .unwrap();

    assert_eq!(bob.goal_progress, GoalProgress::Percent(40));
    assert_eq!(bob.progress_label(), "40%");
    assert!(!bob.editable);
}

#[test]
fn save_profile_replaces_wholesale() {
    let mut state = seeded();
    let profile = UserProfile {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        avatar: "data:image/png;base64,AAAA".to_string(),
        bio: String::new(),
    };

    let previous = state.save_profile(profile.clone());

    assert_eq!(previous.name, "Alex Johnson");
    assert_eq!(state.profile(), &profile);
}
