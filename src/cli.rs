use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SAX symbolization of a synthetic ARMA(1,1) series.
#[derive(Parser)]
#[command(
    name = "saxfreq",
    version,
    about = "SAX symbolization with symbol-frequency reporting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate and display the raw time series.
    Series(SeriesArgs),
    /// Run the SAX pipeline and display the symbol-frequency distribution.
    Freq(FreqArgs),
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "saxfreq.toml")]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `freq` subcommand.
#[derive(clap::Args)]
pub struct FreqArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "saxfreq.toml")]
    pub config: PathBuf,

    /// Frame size for piecewise aggregation (1..=n).
    #[arg(short = 'f', long)]
    pub frame_size: usize,

    /// Alphabet size for SAX discretization (>= 1).
    #[arg(short = 'a', long)]
    pub alphabet_size: usize,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the series and frequency table as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
