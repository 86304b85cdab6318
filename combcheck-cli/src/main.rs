// combcheck-cli/src/main.rs
//
// Entry point for the combcheck CLI. Parses arguments, configures logging
// via env_logger (RUST_LOG, defaulting to info), dispatches to the
// subcommand implementation, and maps failures to a nonzero exit code.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run_scan_command(args),
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}
