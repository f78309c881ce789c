use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghostreplay")]
#[command(about = "Turn production error logs into reproducible tests", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Parse a structured error log into an incident context")]
    Ingest {
        #[arg(help = "Path to the JSON log file")]
        log_file: PathBuf,

        #[arg(long, short, help = "Write the parsed incident context to this path")]
        output: Option<PathBuf>,
    },

    #[command(name = "gen-test", about = "Generate a reproducible test file from an error log")]
    GenTest {
        #[arg(long, help = "Log file to parse")]
        log: Option<PathBuf>,

        #[arg(long, help = "Existing incident context file to use instead of a log")]
        context: Option<PathBuf>,

        #[arg(long, default_value = "pytest", help = "Testing framework")]
        framework: String,

        #[arg(long, default_value = "tests/test_bug.py", help = "Output path for the test file")]
        out: PathBuf,
    },

    #[command(
        name = "suggest-fix",
        about = "Print a patch-scaffold suggestion for a generated test"
    )]
    SuggestFix {
        #[arg(help = "Path to the generated test file")]
        test_file: PathBuf,
    },

    #[command(about = "Write a sample error log and print example usage")]
    Demo,
}
