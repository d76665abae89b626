//! Breakpoint computation and symbol assignment.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::SaxError;

/// Computes the SAX breakpoints for an alphabet of size `a`.
///
/// Returns the `a - 1` standard-normal quantiles at probabilities
/// `k / a` for `k = 1..a-1`, a strictly increasing sequence that divides
/// the real line into `a` equiprobable intervals under a Gaussian
/// assumption. `a = 1` yields an empty breakpoint set (every value maps
/// to the single symbol).
///
/// # Errors
///
/// [`SaxError::InvalidAlphabetSize`] when `a < 1`.
pub fn breakpoints(a: usize) -> Result<Vec<f64>, SaxError> {
    if a < 1 {
        return Err(SaxError::InvalidAlphabetSize { a });
    }
    let standard = Normal::new(0.0, 1.0).expect("standard normal is always valid");
    Ok((1..a)
        .map(|k| standard.inverse_cdf(k as f64 / a as f64))
        .collect())
}

/// Maps each normalized value to a symbol index in `[0, breakpoints.len()]`.
///
/// The symbol index is the number of breakpoints `<= v`: symbol 0 for
/// values below the first breakpoint, the highest symbol for values above
/// the last. A value exactly equal to a breakpoint takes the higher
/// index (each interval is closed on its upper side; fixed tie-break).
pub fn symbolize(normalized: &[f64], breakpoints: &[f64]) -> Vec<usize> {
    normalized
        .iter()
        .map(|&v| breakpoints.partition_point(|&b| b <= v))
        .collect()
}

/// Letter rendering for a symbol index: 0 -> 'a', 1 -> 'b', ...
///
/// Only defined for indices below 26; callers with larger alphabets
/// should fall back to numeric display.
pub fn symbol_letter(symbol: usize) -> Option<char> {
    if symbol < 26 {
        Some((b'a' + symbol as u8) as char)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn breakpoints_count() {
        for a in 1..=10 {
            assert_eq!(breakpoints(a).unwrap().len(), a - 1, "a = {a}");
        }
    }

    #[test]
    fn breakpoints_strictly_increasing() {
        for a in 2..=10 {
            let bp = breakpoints(a).unwrap();
            for w in bp.windows(2) {
                assert!(w[0] < w[1], "a = {a}: {w:?}");
            }
        }
    }

    #[test]
    fn breakpoints_quartiles() {
        // a = 4: quantiles at 0.25, 0.5, 0.75 of the standard normal.
        let bp = breakpoints(4).unwrap();
        assert_eq!(bp.len(), 3);
        assert_relative_eq!(bp[0], -0.6744897501960817, epsilon = 1e-6);
        assert_relative_eq!(bp[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(bp[2], 0.6744897501960817, epsilon = 1e-6);
    }

    #[test]
    fn breakpoints_symmetric_about_zero() {
        for a in 2..=8 {
            let bp = breakpoints(a).unwrap();
            let m = bp.len();
            for k in 0..m {
                assert_relative_eq!(bp[k], -bp[m - 1 - k], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn breakpoints_degenerate_alphabet() {
        assert!(breakpoints(1).unwrap().is_empty());
    }

    #[test]
    fn breakpoints_zero_alphabet() {
        let err = breakpoints(0).unwrap_err();
        assert!(matches!(err, SaxError::InvalidAlphabetSize { a: 0 }));
    }

    #[test]
    fn symbolize_bins() {
        let bp = [-1.0, 0.0, 1.0];
        let symbols = symbolize(&[-2.0, -0.5, 0.5, 2.0], &bp);
        assert_eq!(symbols, vec![0, 1, 2, 3]);
    }

    #[test]
    fn symbolize_tie_takes_higher_index() {
        let bp = [-1.0, 0.0, 1.0];
        assert_eq!(symbolize(&[-1.0], &bp), vec![1]);
        assert_eq!(symbolize(&[0.0], &bp), vec![2]);
        assert_eq!(symbolize(&[1.0], &bp), vec![3]);
    }

    #[test]
    fn symbolize_empty_breakpoints_single_symbol() {
        assert_eq!(symbolize(&[-5.0, 0.0, 5.0], &[]), vec![0, 0, 0]);
    }

    #[test]
    fn symbolize_all_in_range() {
        let bp = breakpoints(6).unwrap();
        let values: Vec<f64> = (-40..=40).map(|i| i as f64 / 10.0).collect();
        for s in symbolize(&values, &bp) {
            assert!(s < 6);
        }
    }

    #[test]
    fn symbol_letters() {
        assert_eq!(symbol_letter(0), Some('a'));
        assert_eq!(symbol_letter(3), Some('d'));
        assert_eq!(symbol_letter(25), Some('z'));
        assert_eq!(symbol_letter(26), None);
    }
}
