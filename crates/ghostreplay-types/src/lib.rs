pub mod incident;
pub mod options;

pub use incident::*;
pub use options::*;
