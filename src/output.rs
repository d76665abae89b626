//! JSON output structure for `freq --output`.

use serde::Serialize;

use saxfreq_sax::SaxRun;

/// Top-level JSON document for one pipeline run.
#[derive(Debug, Serialize)]
pub struct FreqOutput {
    /// Parameters the run was invoked with.
    pub params: ParamsSummary,
    /// The raw series as an ordered list of floats.
    pub series: Vec<f64>,
    /// The symbol sequence, one entry per frame.
    pub symbols: Vec<usize>,
    /// Frequency table as alphabet-ordered (symbol, count) pairs.
    pub frequencies: Vec<SymbolCount>,
}

/// Summary of the invocation parameters.
#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub phi: f64,
    pub theta: f64,
    pub sigma: f64,
    pub n: usize,
    pub seed: Option<u64>,
    pub frame_size: usize,
    pub alphabet_size: usize,
}

/// One frequency-table entry.
#[derive(Debug, Serialize)]
pub struct SymbolCount {
    pub symbol: usize,
    pub count: usize,
}

impl FreqOutput {
    /// Builds the JSON document from a pipeline run and its parameters.
    pub fn new(run: &SaxRun, params: ParamsSummary) -> Self {
        Self {
            params,
            series: run.series().to_vec(),
            symbols: run.symbols().to_vec(),
            frequencies: run
                .frequency()
                .iter()
                .map(|(symbol, count)| SymbolCount { symbol, count })
                .collect(),
        }
    }
}
