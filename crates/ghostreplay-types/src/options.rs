use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Framework name the generator renders for by default.
pub const DEFAULT_FRAMEWORK: &str = "pytest";

/// Settings for one test-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Target test framework name. The generator dispatches on this and
    /// rejects names it has no template for.
    pub framework: String,

    /// Where the generated test file is written
    pub output_path: PathBuf,

    /// Advisory: include mock setup in the scaffold
    pub include_mocks: bool,

    /// Advisory: include fixture scaffolding
    pub include_fixtures: bool,
}

impl GenerationOptions {
    pub fn new(framework: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            framework: framework.into(),
            output_path: output_path.into(),
            include_mocks: true,
            include_fixtures: true,
        }
    }
}
