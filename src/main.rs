mod cli;
mod curate_cmd;
mod logging;
mod select_cmd;
mod table_cmd;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use daily_word::config::DailyWordConfig;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => DailyWordConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => DailyWordConfig::default(),
    };

    match cli.command {
        Command::Select(args) => select_cmd::run(args, &config),
        Command::Seed(args) => select_cmd::run_seed(args, &config),
        Command::Table(args) => table_cmd::run(args, &config),
        Command::Curate(args) => curate_cmd::run(args, &config),
    }
}
