use chrono::{TimeZone, Utc};
use ghostreplay_core::{load_incident, write_test_file};
use ghostreplay_types::GenerationOptions;
use std::fs;

#[test]
fn log_file_to_generated_test() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("error.json");
    fs::write(
        &log_path,
        r#"{
            "method": "POST",
            "endpoint": "/api/users/create",
            "body": {"username": "testuser", "email": "test@example.com"},
            "stack": "Traceback (most recent call last):\n  File \"/app/users.py\", line 42",
            "timestamp": "2024-01-15T10:30:45Z",
            "status_code": 400,
            "error_message": "Email already exists",
            "user_id": "user_123"
        }"#,
    )
    .unwrap();

    let incident = load_incident(&log_path).unwrap();
    assert_eq!(incident.method, "POST");
    assert_eq!(
        incident.timestamp,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap()
    );
    assert_eq!(incident.status_code, Some(400));

    let out = dir.path().join("tests").join("test_bug.py");
    let options = GenerationOptions::new("pytest", &out);
    let written = write_test_file(&incident, &options).unwrap();
    assert_eq!(written, out);

    let generated = fs::read_to_string(&out).unwrap();
    assert!(generated.contains("POST /api/users/create"));
    assert!(generated.contains("2024-01-15T10:30:45+00:00"));
    assert!(generated.contains("@freeze_time(\"2024-01-15T10:30:45+00:00\")"));
}

#[test]
fn persisted_context_is_ingestible() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("error.json");
    fs::write(
        &log_path,
        r#"{"method": "DELETE", "endpoint": "/api/items/42", "timestamp": "2024-03-01 08:00:00"}"#,
    )
    .unwrap();

    let incident = load_incident(&log_path).unwrap();

    let context_path = dir.path().join("incident.json");
    fs::write(&context_path, incident.to_pretty_json().unwrap()).unwrap();

    let restored = load_incident(&context_path).unwrap();
    assert_eq!(restored, incident);
}
