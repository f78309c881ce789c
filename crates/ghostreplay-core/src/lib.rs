// Error types
pub mod error;

// Log record normalization
pub mod normalize;

// Test file generation
pub mod generate;

// Canned fix advisories
pub mod suggest;

pub use error::{Error, Result};
pub use generate::{SUPPORTED_FRAMEWORKS, render, test_identifier, write_test_file};
pub use normalize::{load_incident, normalize_map, normalize_value};
pub use suggest::suggest_fix;
