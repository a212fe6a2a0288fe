//! Implements the Reduce phase.
//!

use crate::mapreducer::MapReducer;
use crate::record_types::{Shuffled, WordCounts};

/// Collapses every group of `shuffled` into one value using `mr.reduce()`.
/// The result keeps the key order of `shuffled`.
///
/// Every group holds at least one increment; the shuffle phase never creates
/// an empty one, so an empty group panics.
pub fn reduce<MR: MapReducer>(mr: &MR, shuffled: Shuffled) -> WordCounts {
    let mut reduced = WordCounts::with_capacity(shuffled.len());

    for (word, increments) in shuffled {
        assert!(!increments.is_empty(), "empty group for {:?}", word);
        let total = mr.reduce(&word, &increments);
        reduced.insert(word, total);
    }
    reduced
}
