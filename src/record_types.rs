//! Values flowing between the phases of a run.

use indexmap::IndexMap;

/// A lowercase word.
pub type Token = String;

/// A contiguous run of tokens handed to one mapper.
pub type Chunk = Vec<Token>;

/// Output of the shuffle phase: every distinct word with the increments
/// emitted for it, keyed in first-seen order.
pub type Shuffled = IndexMap<String, Vec<u32>>;

/// Output of the reduce phase: every distinct word with its total count,
/// keyed in first-seen order.
pub type WordCounts = IndexMap<String, u64>;

/// A (word, increment) pair as emitted by a mapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub word: String,
    pub count: u32,
}

/// Emitter type used in the mapper phase; collects (word, increment) pairs
/// in the order they are emitted.
#[derive(Debug, Default)]
pub struct MEmitter {
    r: Vec<Pair>,
}

impl MEmitter {
    pub fn new() -> MEmitter {
        MEmitter { r: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> MEmitter {
        MEmitter { r: Vec::with_capacity(n) }
    }

    pub fn emit(&mut self, word: String, count: u32) {
        self.r.push(Pair { word, count })
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    pub fn into_pairs(self) -> Vec<Pair> {
        self.r
    }
}
