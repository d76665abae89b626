use anyhow::{Context, Result};
use tracing::info;

use saxfreq_arma::{Arma11Params, generate_seeded};

use crate::cli::SeriesArgs;
use crate::config::SaxfreqConfig;
use crate::render;

/// Generate and print the raw time series.
pub fn run(args: SeriesArgs) -> Result<()> {
    let config = SaxfreqConfig::load(&args.config)?;
    let seed = args.seed.or(config.seed);

    let params = Arma11Params::new(
        config.series.phi,
        config.series.theta,
        config.series.sigma,
        config.series.n,
    );
    info!(
        phi = params.phi(),
        theta = params.theta(),
        sigma = params.sigma(),
        n = params.n(),
        seed = ?seed,
        "generating series"
    );

    let series = generate_seeded(&params, seed).context("series generation failed")?;

    println!(
        "ARMA(1,1) series: phi={}, theta={}, sigma={}, n={}",
        params.phi(),
        params.theta(),
        params.sigma(),
        params.n()
    );
    println!("{}", render::sparkline(&series));
    println!();
    for (t, x) in series.iter().enumerate() {
        println!("{t:>4}  {x:>10.4}");
    }

    Ok(())
}
