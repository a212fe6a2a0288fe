//! The word-count MapReducer: emits a 1 for every word and sums them up.

use crate::error::Result;
use crate::mapreducer::MapReducer;
use crate::record_types::MEmitter;
use crate::tokenize::tokenize;

#[derive(Clone, Copy, Debug, Default)]
pub struct WordCount;

impl MapReducer for WordCount {
    /// Re-tokenizes the chunk text instead of trusting the caller's split.
    fn map(&self, em: &mut MEmitter, chunk: &str) -> Result<()> {
        for word in tokenize(chunk) {
            em.emit(word, 1);
        }
        Ok(())
    }

    fn reduce(&self, _word: &str, increments: &[u32]) -> u64 {
        increments.iter().map(|&i| u64::from(i)).sum()
    }
}
