use ghostreplay_types::IncidentRecord;
use std::fmt;
use std::path::Path;

/// Characters of generated source shown in the console preview.
const PREVIEW_LIMIT: usize = 500;

pub struct IncidentSummaryView<'a> {
    pub incident: &'a IncidentRecord,
}

impl fmt::Display for IncidentSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let incident = self.incident;

        writeln!(f, "Incident summary:")?;
        writeln!(f, "  Method:    {}", incident.method)?;
        writeln!(f, "  Endpoint:  {}", incident.endpoint)?;
        writeln!(f, "  Timestamp: {}", incident.timestamp.to_rfc3339())?;
        match incident.status_code {
            Some(code) => writeln!(f, "  Status:    {}", code)?,
            None => writeln!(f, "  Status:    -")?,
        }
        match &incident.error_message {
            Some(message) => writeln!(f, "  Error:     {}", message)?,
            None => writeln!(f, "  Error:     -")?,
        }
        if let Some(user_id) = &incident.user_id {
            writeln!(f, "  User:      {}", user_id)?;
        }
        Ok(())
    }
}

pub struct TestPreviewView<'a> {
    path: &'a Path,
    content: &'a str,
}

impl<'a> TestPreviewView<'a> {
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self { path, content }
    }
}

impl fmt::Display for TestPreviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.path.display())?;

        if self.content.chars().count() <= PREVIEW_LIMIT {
            write!(f, "{}", self.content)?;
        } else {
            let head: String = self.content.chars().take(PREVIEW_LIMIT).collect();
            writeln!(f, "{}...", head.trim_end())?;
        }

        writeln!(f, "--- end of preview ---")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_shows_placeholders_for_missing_fields() {
        let incident = IncidentRecord {
            method: "GET".to_string(),
            endpoint: "/unknown".to_string(),
            body: None,
            stack: "No stack trace available".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap(),
            status_code: None,
            error_message: None,
            user_id: None,
        };

        let rendered = IncidentSummaryView {
            incident: &incident,
        }
        .to_string();

        assert!(rendered.contains("Method:    GET"));
        assert!(rendered.contains("Status:    -"));
        assert!(rendered.contains("Error:     -"));
        assert!(!rendered.contains("User:"));
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let content = "x".repeat(2000);
        let rendered = TestPreviewView::new(Path::new("tests/test_bug.py"), &content).to_string();

        assert!(rendered.contains("tests/test_bug.py"));
        assert!(rendered.contains("..."));
        assert!(rendered.len() < 700);
    }
}
