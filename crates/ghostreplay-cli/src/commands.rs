use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use super::report::ConsoleReporter;

pub fn run(cli: Cli) -> Result<()> {
    let reporter = ConsoleReporter::new();

    match cli.command {
        Commands::Ingest { log_file, output } => {
            handlers::ingest::handle(&reporter, &log_file, output.as_deref())
        }

        Commands::GenTest {
            log,
            context,
            framework,
            out,
        } => handlers::gen_test::handle(&reporter, log.as_deref(), context.as_deref(), &framework, &out),

        Commands::SuggestFix { test_file } => handlers::suggest_fix::handle(&reporter, &test_file),

        Commands::Demo => handlers::demo::handle(&reporter),
    }
}
