use anyhow::{Context, Result};
use tracing::info;

use saxfreq_arma::Arma11Params;
use saxfreq_sax::{pipeline, symbol_letter};

use crate::cli::FreqArgs;
use crate::config::SaxfreqConfig;
use crate::output::{FreqOutput, ParamsSummary};
use crate::render;

/// Width of the largest frequency bar.
const BAR_WIDTH: usize = 40;

/// Run the SAX pipeline and print the symbol-frequency distribution.
pub fn run(args: FreqArgs) -> Result<()> {
    let config = SaxfreqConfig::load(&args.config)?;
    let seed = args.seed.or(config.seed);

    let params = Arma11Params::new(
        config.series.phi,
        config.series.theta,
        config.series.sigma,
        config.series.n,
    );
    info!(
        frame_size = args.frame_size,
        alphabet_size = args.alphabet_size,
        seed = ?seed,
        "running SAX pipeline"
    );

    let run = pipeline::run_seeded(&params, args.frame_size, args.alphabet_size, seed)
        .context("SAX pipeline failed")?;

    let freq = run.frequency();
    info!(
        n_frames = run.symbols().len(),
        distinct = freq.distinct(),
        "pipeline complete"
    );

    println!(
        "SAX word ({} frames, alphabet {}): {}",
        run.symbols().len(),
        freq.alphabet_size(),
        word(run.symbols())
    );
    println!();
    println!("symbol  count");
    let max_count = freq.counts().iter().copied().max().unwrap_or(0);
    for (symbol, count) in freq.iter() {
        println!(
            "{:>6}  {count:>5}  {}",
            label(symbol),
            render::bar(count, max_count, BAR_WIDTH)
        );
    }

    if let Some(ref path) = args.output {
        let doc = FreqOutput::new(
            &run,
            ParamsSummary {
                phi: params.phi(),
                theta: params.theta(),
                sigma: params.sigma(),
                n: params.n(),
                seed,
                frame_size: args.frame_size,
                alphabet_size: args.alphabet_size,
            },
        );
        let json = serde_json::to_string_pretty(&doc).context("failed to serialize output")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write output: {}", path.display()))?;
        info!(path = %path.display(), "output written");
    }

    Ok(())
}

/// Display label for one symbol: a letter for small alphabets, the
/// numeric index otherwise.
fn label(symbol: usize) -> String {
    match symbol_letter(symbol) {
        Some(c) => c.to_string(),
        None => symbol.to_string(),
    }
}

/// The symbol sequence rendered as a word (letters) or dash-joined indices.
fn word(symbols: &[usize]) -> String {
    if symbols.iter().all(|&s| s < 26) {
        symbols.iter().filter_map(|&s| symbol_letter(s)).collect()
    } else {
        symbols
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_letters_then_indices() {
        assert_eq!(label(0), "a");
        assert_eq!(label(25), "z");
        assert_eq!(label(26), "26");
    }

    #[test]
    fn word_letters() {
        assert_eq!(word(&[2, 0, 1]), "cab");
    }

    #[test]
    fn word_large_alphabet_falls_back_to_indices() {
        assert_eq!(word(&[2, 30]), "2-30");
    }
}
