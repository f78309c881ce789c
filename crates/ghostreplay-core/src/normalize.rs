use chrono::{DateTime, NaiveDateTime, Utc};
use ghostreplay_types::{DEFAULT_ENDPOINT, DEFAULT_METHOD, DEFAULT_STACK, IncidentRecord};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Naive fallback pattern tried after strict ISO-8601 parsing fails.
const FALLBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read and normalize a JSON log file into an [`IncidentRecord`].
///
/// Fails with [`Error::NotFound`] when the path does not exist, before any
/// read is attempted.
pub fn load_incident(path: &Path) -> Result<IncidentRecord> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&text)?;
    normalize_value(&raw)
}

/// Normalize an already-deserialized JSON value.
///
/// The top level must be an object; anything else is [`Error::Malformed`].
pub fn normalize_value(raw: &Value) -> Result<IncidentRecord> {
    match raw {
        Value::Object(map) => Ok(normalize_map(map)),
        other => Err(Error::Malformed(format!(
            "expected a JSON object at the top level, got {}",
            json_type_name(other)
        ))),
    }
}

/// Normalize a raw log record into the canonical [`IncidentRecord`].
///
/// Tolerant by design: unknown keys are ignored, missing or empty fields
/// take defaults, and values of the wrong shape degrade to the default
/// rather than failing. A missing or unparseable timestamp becomes the
/// current time, so callers that need determinism must supply a string
/// timestamp.
pub fn normalize_map(raw: &Map<String, Value>) -> IncidentRecord {
    IncidentRecord {
        method: string_or(raw.get("method"), DEFAULT_METHOD),
        endpoint: string_or(raw.get("endpoint"), DEFAULT_ENDPOINT),
        body: raw.get("body").and_then(Value::as_object).cloned(),
        stack: string_or(raw.get("stack"), DEFAULT_STACK),
        timestamp: parse_timestamp(raw.get("timestamp")),
        status_code: raw
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok()),
        error_message: optional_string(raw.get("error_message")),
        user_id: optional_string(raw.get("user_id")),
    }
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Parse a raw timestamp value to `DateTime<Utc>`, never failing.
///
/// Attempts, in order: strict ISO-8601 with a trailing `Z` rewritten to
/// `+00:00`, offset-free extended ISO read as UTC, the naive
/// `YYYY-MM-DD HH:MM:SS` pattern read as UTC, then the current time.
fn parse_timestamp(raw: Option<&Value>) -> DateTime<Utc> {
    match raw {
        Some(Value::String(ts)) => parse_timestamp_str(ts).unwrap_or_else(Utc::now),
        _ => Utc::now(),
    }
}

fn parse_timestamp_str(ts: &str) -> Option<DateTime<Utc>> {
    // Treat a trailing literal Z as UTC offset zero.
    let rewritten = ts.strip_suffix('Z').map(|head| format!("{}+00:00", head));
    let iso = rewritten.as_deref().unwrap_or(ts);

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }

    // Extended ISO without an offset, e.g. from a persisted context file
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, FALLBACK_TIMESTAMP_FORMAT) {
        return Some(naive.and_utc());
    }

    None
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
