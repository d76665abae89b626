//! Error types for the saxfreq-arma crate.

/// Error type for all fallible operations in the saxfreq-arma crate.
///
/// Invalid generation parameters are rejected at the point of first use
/// and are never silently clamped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArmaError {
    /// Returned when the requested series length is below the minimum.
    #[error("series length {n} is too short, need at least 2 observations")]
    SeriesTooShort {
        /// Requested series length.
        n: usize,
    },

    /// Returned when the innovation standard deviation is negative or non-finite.
    #[error("innovation standard deviation must be finite and non-negative, got {sigma}")]
    InvalidSigma {
        /// Offending standard deviation.
        sigma: f64,
    },
}
