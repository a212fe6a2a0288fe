//! Implements the Shuffle phase: groups mapped pairs by word.

use crate::record_types::{Pair, Shuffled};

/// Groups `pairs` by exact word equality. Words keep the order in which they
/// are first seen; each word's increments keep their emission order.
pub fn shuffle<It: IntoIterator<Item = Pair>>(pairs: It) -> Shuffled {
    let mut grouped = Shuffled::new();
    for p in pairs {
        grouped.entry(p.word).or_insert_with(Vec::new).push(p.count);
    }
    grouped
}
