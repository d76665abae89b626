//! Validated ARMA(1,1) generation parameters.

use crate::error::ArmaError;

/// Parameters of an ARMA(1,1) process to generate.
///
/// Stationarity requires `|phi| < 1`; this is assumed by design and not
/// enforced at runtime. Length and innovation-scale constraints are
/// checked by [`Arma11Params::validate()`], which generation calls before
/// drawing anything.
///
/// # Example
///
/// ```
/// use saxfreq_arma::Arma11Params;
///
/// let params = Arma11Params::new(0.5, 0.3, 1.0, 100);
/// assert_eq!(params.n(), 100);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arma11Params {
    phi: f64,
    theta: f64,
    sigma: f64,
    n: usize,
}

impl Arma11Params {
    /// Creates a new parameter set with AR coefficient `phi`, MA
    /// coefficient `theta`, innovation standard deviation `sigma`, and
    /// series length `n`.
    pub fn new(phi: f64, theta: f64, sigma: f64, n: usize) -> Self {
        Self {
            phi,
            theta,
            sigma,
            n,
        }
    }

    /// Returns the AR coefficient (`phi`).
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Returns the MA coefficient (`theta`).
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the innovation standard deviation (`sigma`).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the series length (`n`).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Validates this parameter set.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArmaError::SeriesTooShort`] | `n < 2` |
    /// | [`ArmaError::InvalidSigma`] | `sigma` negative or non-finite |
    pub fn validate(&self) -> Result<(), ArmaError> {
        if self.n < 2 {
            return Err(ArmaError::SeriesTooShort { n: self.n });
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(ArmaError::InvalidSigma { sigma: self.sigma });
        }
        Ok(())
    }
}
