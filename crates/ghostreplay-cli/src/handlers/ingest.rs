use anyhow::Result;
use ghostreplay_core::load_incident;
use std::fs;
use std::path::Path;

use crate::report::Reporter;
use crate::views::IncidentSummaryView;

pub fn handle(reporter: &dyn Reporter, log_file: &Path, output: Option<&Path>) -> Result<()> {
    reporter.info(&format!("Parsing log file: {}", log_file.display()));

    let incident = load_incident(log_file)?;

    reporter.success("Parsed log file");
    let summary = IncidentSummaryView {
        incident: &incident,
    };
    print!("{}", summary);

    if let Some(path) = output {
        fs::write(path, incident.to_pretty_json()?)?;
        reporter.success(&format!("Saved incident context to {}", path.display()));
    }

    Ok(())
}
