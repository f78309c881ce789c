mod args;
mod commands;
mod handlers;
pub mod report;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
