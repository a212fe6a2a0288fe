//! Ranking of counted words.

use std::cmp::Ordering;

use crate::record_types::WordCounts;

/// Function type to be used as custom compare function for ranked entries.
pub type Comparer<T> = fn(a: &T, b: &T) -> Ordering;

/// Orders (word, count) entries by count, highest first. Entries with equal counts compare
/// equal, so a stable sort keeps them in input order.
#[inline]
pub fn by_count_desc(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    b.1.cmp(&a.1)
}

/// Sorts the entries of `counts` with `cmp` (stable) and keeps the first `n`.
pub fn top_n_by<'a>(counts: &'a WordCounts,
                    n: usize,
                    cmp: Comparer<(&'a str, u64)>)
                    -> Vec<(&'a str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(w, &c)| (w.as_str(), c)).collect();
    entries.sort_by(cmp);
    entries.truncate(n);
    entries
}

/// The `n` most frequent words, highest count first. Ties keep the iteration order of
/// `counts`, which for a finished run is the order of first appearance in the text.
pub fn top_n(counts: &WordCounts, n: usize) -> Vec<(&str, u64)> {
    top_n_by(counts, n, by_count_desc)
}
