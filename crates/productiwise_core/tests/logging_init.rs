use productiwise_core::{init_logging, logging_status, LogLevel};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let first_dir = first.path().join("logs");
    let first_str = first_dir.to_str().unwrap().to_string();
    let second_str = second.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());

    init_logging("info", &first_str).unwrap();
    init_logging(" INFO ", &first_str).unwrap();
    assert!(first_dir.is_dir(), "log directory should be created");

    let level_error = init_logging("debug", &first_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &second_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, LogLevel::Info);
    assert_eq!(dir, first_dir);
}

#[test]
fn init_logging_validates_input_before_touching_state() {
    assert!(init_logging("loud", "/tmp/productiwise-logs")
        .unwrap_err()
        .contains("unsupported"));
    assert!(init_logging("info", "relative/logs")
        .unwrap_err()
        .contains("absolute"));
}
