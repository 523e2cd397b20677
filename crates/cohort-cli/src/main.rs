//! Cohort CLI: the `cohort` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing(cli.verbose);

    match cli.command {
        Commands::Roster {
            config,
            promote,
            json,
        } => commands::roster::run(config, promote, json),

        Commands::Graduate {
            config,
            student,
            json,
        } => commands::graduate::run(config, student, json),

        Commands::Census {
            config,
            blank_ids,
            json,
        } => commands::census::run(config, blank_ids, json),
    }
}
