use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Method used when the log record carries none.
pub const DEFAULT_METHOD: &str = "GET";

/// Endpoint used when the log record carries none.
pub const DEFAULT_ENDPOINT: &str = "/unknown";

/// Stack placeholder used when the log record carries none.
pub const DEFAULT_STACK: &str = "No stack trace available";

/// One captured production error event with request/response/error context.
///
/// Constructed once by the normalizer and read-only afterward. `method`,
/// `endpoint` and `stack` are never empty; the normalizer substitutes
/// defaults before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// API endpoint that failed
    pub endpoint: String,

    /// Request body, when the log captured one
    pub body: Option<Map<String, Value>>,

    /// Stack trace of the error
    pub stack: String,

    /// When the error occurred
    pub timestamp: DateTime<Utc>,

    /// HTTP status code of the failed response
    pub status_code: Option<u16>,

    /// Error message reported by the service
    pub error_message: Option<String>,

    /// User who triggered the error
    pub user_id: Option<String>,
}

impl IncidentRecord {
    /// Serialize to the persisted context format: pretty JSON with 2-space
    /// indentation, timestamp as an ISO-8601 string.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
