//! Plain-text rendering of series and frequency tables.

/// Glyphs for the sparkline, lowest to highest.
const SPARK_LEVELS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders a series as a one-line unicode sparkline.
///
/// Values are binned linearly between the series minimum and maximum.
/// A constant (or empty) series renders at the lowest level throughout.
pub fn sparkline(series: &[f64]) -> String {
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    series
        .iter()
        .map(|&v| {
            if span <= 0.0 || !span.is_finite() {
                SPARK_LEVELS[0]
            } else {
                let t = (v - min) / span;
                let idx = ((t * (SPARK_LEVELS.len() - 1) as f64).round() as usize)
                    .min(SPARK_LEVELS.len() - 1);
                SPARK_LEVELS[idx]
            }
        })
        .collect()
}

/// Renders a horizontal bar proportional to `count / max_count`.
///
/// `width` is the bar length of the largest count; zero counts render
/// empty. A zero `max_count` renders all bars empty.
pub fn bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 || count == 0 {
        return String::new();
    }
    let len = (count * width).div_ceil(max_count);
    "█".repeat(len)
}
