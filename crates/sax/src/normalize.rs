//! z-normalization of a frame-mean sequence.

/// Tolerance below which the sample standard deviation is treated as zero.
const SD_FLOOR: f64 = 1e-12;

/// z-normalizes a sequence to zero mean and unit standard deviation.
///
/// Uses the sample standard deviation (N-1 denominator, matching R's
/// `sd()` and pandas' `.std()`). If the standard deviation is zero —
/// a single frame, or all frame means identical — the output is a
/// sequence of zeros; this is an explicit branch, not a division error.
pub fn z_normalize(frames: &[f64]) -> Vec<f64> {
    let mu = mean(frames);
    let sd = sample_sd(frames, mu);
    if sd < SD_FLOOR {
        return vec![0.0; frames.len()];
    }
    frames.iter().map(|&v| (v - mu) / sd).collect()
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation with N-1 denominator around a known mean.
/// Returns 0.0 if fewer than 2 elements.
fn sample_sd(data: &[f64], mu: f64) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let ss: f64 = data.iter().map(|&x| (x - mu) * (x - mu)).sum();
    (ss / (n - 1) as f64).sqrt()
}
