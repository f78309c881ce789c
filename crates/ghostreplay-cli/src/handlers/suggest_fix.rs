use anyhow::{Result, bail};
use ghostreplay_core::suggest_fix;
use std::path::Path;

use crate::report::Reporter;

pub fn handle(reporter: &dyn Reporter, test_file: &Path) -> Result<()> {
    // The suggester itself never touches the file; existence is checked
    // here so a typo fails loudly instead of producing advice for nothing.
    if !test_file.exists() {
        bail!("Test file not found: {}", test_file.display());
    }

    reporter.info(&format!("Analyzing test file: {}", test_file.display()));
    print!("{}", suggest_fix(test_file));

    Ok(())
}
