use anyhow::Result;
use serde_json::json;
use std::fs;

use crate::report::Reporter;

const SAMPLE_LOG_PATH: &str = "sample_error.json";

pub fn handle(reporter: &dyn Reporter) -> Result<()> {
    let sample = json!({
        "method": "POST",
        "endpoint": "/api/users/create",
        "body": {"username": "testuser", "email": "test@example.com"},
        "stack": "Traceback (most recent call last):\n  File \"/app/users.py\", line 42, in create_user\n    user.save()\n  File \"/app/models.py\", line 15, in save\n    raise ValidationError('Email already exists')",
        "timestamp": "2024-01-15T10:30:45Z",
        "status_code": 400,
        "error_message": "Email already exists",
        "user_id": "user_123"
    });

    fs::write(SAMPLE_LOG_PATH, serde_json::to_string_pretty(&sample)?)?;
    reporter.success(&format!("Created sample error log: {}", SAMPLE_LOG_PATH));

    println!();
    println!("Example commands:");
    println!("  # Parse the log");
    println!("  ghostreplay ingest {}", SAMPLE_LOG_PATH);
    println!();
    println!("  # Generate a test");
    println!(
        "  ghostreplay gen-test --log {} --out tests/demo_test.py",
        SAMPLE_LOG_PATH
    );
    println!();
    println!("  # Get fix suggestions");
    println!("  ghostreplay suggest-fix tests/demo_test.py");

    Ok(())
}
