//! ARMA(1,1) sample-path generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::ArmaError;
use crate::params::Arma11Params;

/// Generates one ARMA(1,1) sample path of length `params.n()`.
///
/// Draws all innovations from `N(0, sigma)` using the supplied RNG, then
/// runs the recursion `x_t = phi * x_{t-1} + eps_t + theta * eps_{t-1}`
/// with cold-start zeros: at `t = 0` both lagged terms are absent, so
/// `x_0 = eps_0`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArmaError::SeriesTooShort`] | `params.n() < 2` |
/// | [`ArmaError::InvalidSigma`] | `params.sigma()` negative or non-finite |
pub fn generate<R: Rng>(params: &Arma11Params, rng: &mut R) -> Result<Vec<f64>, ArmaError> {
    params.validate()?;

    let n = params.n();
    let normal = Normal::new(0.0, params.sigma()).expect("sigma validated as finite non-negative");

    let eps: Vec<f64> = (0..n).map(|_| normal.sample(rng)).collect();
    let mut x = vec![0.0; n];

    x[0] = eps[0];
    for t in 1..n {
        x[t] = params.phi() * x[t - 1] + eps[t] + params.theta() * eps[t - 1];
    }

    Ok(x)
}

/// Generates one sample path from an explicit seed.
///
/// `Some(seed)` gives a reproducible series; `None` draws the seed from
/// OS entropy, producing a valid but non-reproducible series.
pub fn generate_seeded(params: &Arma11Params, seed: Option<u64>) -> Result<Vec<f64>, ArmaError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    generate(params, &mut rng)
}
