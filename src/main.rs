mod cli;
mod config;
mod freq_cmd;
mod logging;
mod output;
mod render;
mod series_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Series(args) => series_cmd::run(args),
        Command::Freq(args) => freq_cmd::run(args),
    }
}
