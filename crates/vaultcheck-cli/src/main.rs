//! Vaultcheck CLI: the `vaultcheck` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing();

    match cli.command {
        Commands::Run {
            root,
            manifest,
            report,
            json,
        } => commands::run::run(commands::run::Args {
            root,
            manifest,
            report,
            json,
        }),

        Commands::Manifest { manifest, json } => commands::manifest::run(manifest, json),
    }
}
