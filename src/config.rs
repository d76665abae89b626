use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level saxfreq configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaxfreqConfig {
    /// RNG seed. Unset means a fresh seed from OS entropy on every run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Series generation settings.
    #[serde(default)]
    pub series: SeriesToml,
}

impl SaxfreqConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file falls back to defaults, so the binary works out of
    /// the box without a `saxfreq.toml`; a present but malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

impl Default for SaxfreqConfig {
    fn default() -> Self {
        Self {
            seed: None,
            series: SeriesToml::default(),
        }
    }
}

/// ARMA(1,1) generation settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesToml {
    /// AR coefficient.
    #[serde(default)]
    pub phi: f64,
    /// MA coefficient.
    #[serde(default = "default_theta")]
    pub theta: f64,
    /// Innovation standard deviation.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Series length.
    #[serde(default = "default_n")]
    pub n: usize,
}

impl Default for SeriesToml {
    fn default() -> Self {
        Self {
            phi: 0.0,
            theta: default_theta(),
            sigma: default_sigma(),
            n: default_n(),
        }
    }
}

fn default_theta() -> f64 {
    0.5
}
fn default_sigma() -> f64 {
    1.0
}
fn default_n() -> usize {
    100
}
