//! Error types for the saxfreq-sax crate.

use saxfreq_arma::ArmaError;

/// Error type for invalid SAX transformation parameters.
///
/// Out-of-range parameters fail at the point of first use and are never
/// silently clamped. Degenerate-but-valid inputs (alphabet size 1, frame
/// size equal to the series length, zero-variance frames) are not errors
/// and take explicit branches in their respective stages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaxError {
    /// Returned when the frame size is outside `[1, n]` for a series of length `n`.
    #[error("frame size {f} is out of range for a series of length {n} (expected 1..={n})")]
    InvalidFrameSize {
        /// Requested frame size.
        f: usize,
        /// Length of the series being segmented.
        n: usize,
    },

    /// Returned when the alphabet size is zero.
    #[error("alphabet size {a} is invalid (expected at least 1)")]
    InvalidAlphabetSize {
        /// Requested alphabet size.
        a: usize,
    },
}

/// Error type for a full pipeline run.
///
/// Sub-component failures propagate unchanged; the transparent variants
/// forward the source error's message without wrapping.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    /// Series generation failed.
    #[error(transparent)]
    Arma(#[from] ArmaError),

    /// SAX transformation failed.
    #[error(transparent)]
    Sax(#[from] SaxError),
}
