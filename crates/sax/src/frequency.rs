//! Symbol-frequency aggregation over a SAX symbol sequence.

/// Occurrence counts for every symbol of a SAX alphabet.
///
/// Every symbol in `[0, alphabet_size)` is present, including symbols
/// with a zero count, and iteration order is ascending symbol index.
/// This keeps downstream display stable across parameter changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFrequency {
    counts: Vec<usize>,
}

impl SymbolFrequency {
    /// Returns the per-symbol counts, indexed by symbol.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the count for one symbol.
    ///
    /// # Panics
    ///
    /// Panics if `symbol >= alphabet_size()`.
    pub fn count(&self, symbol: usize) -> usize {
        self.counts[symbol]
    }

    /// Returns the alphabet size (number of keys).
    pub fn alphabet_size(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total count, equal to the symbol-sequence length.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterates `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

/// Counts symbol occurrences over an alphabet of size `alphabet_size`.
///
/// Initializes all counts to zero, then increments once per observed
/// symbol, so the result always carries `alphabet_size` keys and its
/// total equals `symbols.len()`.
///
/// # Panics
///
/// Panics if any symbol is `>= alphabet_size`; sequences produced by
/// [`crate::symbolize`] with matching breakpoints are always in range.
pub fn aggregate(symbols: &[usize], alphabet_size: usize) -> SymbolFrequency {
    let mut counts = vec![0usize; alphabet_size];
    for &s in symbols {
        counts[s] += 1;
    }
    SymbolFrequency { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_counts() {
        let freq = aggregate(&[0, 1, 1, 3, 1], 4);
        assert_eq!(freq.counts(), &[1, 3, 0, 1]);
        assert_eq!(freq.count(1), 3);
        assert_eq!(freq.count(2), 0);
    }

    #[test]
    fn aggregate_total_equals_sequence_length() {
        let symbols = [2, 0, 2, 1, 2, 0];
        let freq = aggregate(&symbols, 3);
        assert_eq!(freq.total(), symbols.len());
    }

    #[test]
    fn aggregate_zero_count_keys_present() {
        let freq = aggregate(&[1, 1, 1], 5);
        assert_eq!(freq.alphabet_size(), 5);
        assert_eq!(freq.counts(), &[0, 3, 0, 0, 0]);
    }

    #[test]
    fn aggregate_empty_sequence() {
        let freq = aggregate(&[], 3);
        assert_eq!(freq.counts(), &[0, 0, 0]);
        assert_eq!(freq.total(), 0);
        assert_eq!(freq.distinct(), 0);
    }

    #[test]
    fn aggregate_distinct() {
        let freq = aggregate(&[0, 0, 2, 2, 2], 4);
        assert_eq!(freq.distinct(), 2);
    }

    #[test]
    fn iter_ascending_symbol_order() {
        let freq = aggregate(&[1, 0, 1], 3);
        let pairs: Vec<(usize, usize)> = freq.iter().collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 0)]);
    }
}
