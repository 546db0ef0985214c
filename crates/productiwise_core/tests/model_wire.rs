use chrono::NaiveDate;
use productiwise_core::{
    ChatMessage, ChatRole, CommunityMember, Habit, NewHabit, NewTask, Priority, Repetition, Task,
    UserProfile,
};

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let deadline = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    let mut fields = NewTask::new("ship release", Priority::High, deadline);
    fields.description = Some("tag and publish".to_string());
    fields.reminder = Some(deadline.and_hms_opt(9, 30, 0).unwrap());
    let task = Task::with_id("t1", fields).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "t1");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["deadline"], "2026-07-04");
    assert_eq!(json["completed"], false);
    assert_eq!(json["description"], "tag and publish");
    assert_eq!(json["reminder"], "2026-07-04T09:30:00");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_without_optional_fields_omits_them() {
    let deadline = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
    let mut fields = NewTask::new("ship release", Priority::Low, deadline);
    fields.description = Some("   ".to_string());
    let task = Task::with_id("t1", fields).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("reminder"));
    assert_eq!(json["priority"], "Low");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn priority_names_cover_every_variant() {
    for (priority, name) in [
        (Priority::Low, "Low"),
        (Priority::Medium, "Medium"),
        (Priority::High, "High"),
    ] {
        assert_eq!(serde_json::to_value(priority).unwrap(), name);
    }
}

#[test]
fn habit_serialization_uses_lowercase_repetition() {
    let mut habit = Habit::with_id("h1", NewHabit::new("walk", 3, Repetition::Weekly)).unwrap();
    habit.progress = 2;

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["repetition"], "weekly");
    assert_eq!(json["goal"], 3);
    assert_eq!(json["progress"], 2);
    assert_eq!(serde_json::to_value(Repetition::Daily).unwrap(), "daily");
    assert_eq!(serde_json::to_value(Repetition::Monthly).unwrap(), "monthly");

    let decoded: Habit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, habit);
}

#[test]
fn community_member_uses_camel_case_fields() {
    let member = CommunityMember {
        id: "u1".to_string(),
        name: "You".to_string(),
        avatar: "https://example.com/me.png".to_string(),
        goal: "Read 20 Books".to_string(),
        progress: 25,
        is_current_user: true,
    };

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["isCurrentUser"], true);
    assert!(!json.as_object().unwrap().contains_key("is_current_user"));

    let decoded: CommunityMember = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);

    // The current-user flag is optional on input.
    let other: CommunityMember = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Alice",
        "avatar": "",
        "goal": "Learn React Native",
        "progress": 75
    }))
    .unwrap();
    assert!(!other.is_current_user);
}

#[test]
fn chat_roles_serialize_lowercase() {
    let json = serde_json::to_value(ChatMessage::model("hello")).unwrap();
    assert_eq!(json["role"], "model");
    assert_eq!(json["text"], "hello");
    assert_eq!(serde_json::to_value(ChatRole::User).unwrap(), "user");
}

#[test]
fn profile_round_trips() {
    let profile = UserProfile {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        avatar: String::new(),
        bio: "hi".to_string(),
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["email"], "sam@example.com");
    let decoded: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}
