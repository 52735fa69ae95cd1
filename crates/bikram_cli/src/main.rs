mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::BikramConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = BikramConfig::load(cli.config.as_deref())?;
    let out = commands::execute(cli.command, &config.output)?;
    println!("{out}");
    Ok(())
}
