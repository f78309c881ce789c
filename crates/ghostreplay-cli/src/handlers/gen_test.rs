use anyhow::{Result, bail};
use ghostreplay_core::{load_incident, write_test_file};
use ghostreplay_types::GenerationOptions;
use std::fs;
use std::path::Path;

use crate::report::Reporter;
use crate::views::TestPreviewView;

pub fn handle(
    reporter: &dyn Reporter,
    log: Option<&Path>,
    context: Option<&Path>,
    framework: &str,
    out: &Path,
) -> Result<()> {
    // A persisted context file goes through the same normalizer as a raw
    // log; its keys are a superset of what the normalizer reads.
    let incident = match (context, log) {
        (Some(context_file), _) => {
            reporter.info(&format!("Loading context from: {}", context_file.display()));
            load_incident(context_file)?
        }
        (None, Some(log_file)) => {
            reporter.info(&format!("Parsing log file: {}", log_file.display()));
            load_incident(log_file)?
        }
        (None, None) => bail!("provide either --log or --context"),
    };

    let options = GenerationOptions::new(framework, out);

    reporter.info(&format!("Generating {} test...", framework));
    let written = write_test_file(&incident, &options)?;
    reporter.success(&format!("Generated test file: {}", written.display()));

    let content = fs::read_to_string(&written)?;
    print!("{}", TestPreviewView::new(&written, &content));

    println!();
    println!("Next steps:");
    println!("  1. Run: pytest {}", written.display());
    println!(
        "  2. Get fix suggestions: ghostreplay suggest-fix {}",
        written.display()
    );

    Ok(())
}
