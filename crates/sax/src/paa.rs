//! Piecewise Aggregate Approximation: frame-mean reduction.

use crate::error::SaxError;

/// Reduces a series to per-frame arithmetic means.
///
/// Partitions indices `[0, n)` into `ceil(n / frame_size)` contiguous,
/// non-overlapping frames of `frame_size` observations each; the final
/// frame keeps whatever remains (between 1 and `frame_size` members).
/// Each frame is reduced to the mean of its members.
///
/// Edge cases: `frame_size == n` collapses the series to a single frame,
/// `frame_size == 1` performs no reduction.
///
/// # Errors
///
/// [`SaxError::InvalidFrameSize`] when `frame_size < 1` or
/// `frame_size > series.len()`.
pub fn segment(series: &[f64], frame_size: usize) -> Result<Vec<f64>, SaxError> {
    let n = series.len();
    if frame_size < 1 || frame_size > n {
        return Err(SaxError::InvalidFrameSize { f: frame_size, n });
    }

    let means = series
        .chunks(frame_size)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect();
    Ok(means)
}
