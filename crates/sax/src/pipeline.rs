//! End-to-end SAX pipeline: generate, segment, normalize, symbolize, count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use saxfreq_arma::{Arma11Params, generate};

use crate::discretize::{breakpoints, symbolize};
use crate::error::PipelineError;
use crate::frequency::{SymbolFrequency, aggregate};
use crate::normalize::z_normalize;
use crate::paa::segment;

/// Result of one pipeline run: the raw series, the symbol sequence, and
/// the symbol-frequency distribution.
#[derive(Debug, Clone)]
pub struct SaxRun {
    series: Vec<f64>,
    symbols: Vec<usize>,
    frequency: SymbolFrequency,
}

impl SaxRun {
    /// Returns the generated raw series, for display against its index.
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Returns the SAX symbol sequence (one symbol per frame).
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Returns the symbol-frequency distribution over the full alphabet.
    pub fn frequency(&self) -> &SymbolFrequency {
        &self.frequency
    }
}

/// Runs the full pipeline with an explicit RNG.
///
/// Composes generation, frame-mean reduction, z-normalization,
/// breakpoint discretization, and frequency aggregation in strict
/// sequence. Stateless across calls: every derived quantity is
/// recomputed from scratch, so repeated runs with equal seeds and
/// parameters yield identical results.
///
/// # Errors
///
/// Forwards [`saxfreq_arma::ArmaError`] from generation and
/// [`crate::SaxError`] from segmentation or breakpoint computation,
/// unchanged.
pub fn run<R: Rng>(
    params: &Arma11Params,
    frame_size: usize,
    alphabet_size: usize,
    rng: &mut R,
) -> Result<SaxRun, PipelineError> {
    let series = generate(params, rng)?;
    let frames = segment(&series, frame_size)?;
    let normalized = z_normalize(&frames);
    let bp = breakpoints(alphabet_size)?;
    let symbols = symbolize(&normalized, &bp);
    let frequency = aggregate(&symbols, alphabet_size);

    Ok(SaxRun {
        series,
        symbols,
        frequency,
    })
}

/// Runs the full pipeline from an explicit seed.
///
/// `Some(seed)` gives a reproducible run; `None` draws OS entropy.
pub fn run_seeded(
    params: &Arma11Params,
    frame_size: usize,
    alphabet_size: usize,
    seed: Option<u64>,
) -> Result<SaxRun, PipelineError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    run(params, frame_size, alphabet_size, &mut rng)
}
