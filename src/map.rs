//! Implements the Map phase for a single chunk.
//!

use crate::error::Result;
use crate::mapreducer::MapReducer;
use crate::record_types::{Chunk, MEmitter, Pair};
use crate::tokenize;

/// One mapper invocation. Every chunk of a run gets its own MapPartition,
/// which is executed by one thread of the pool.
pub struct MapPartition<'a, MR: MapReducer> {
    mr: &'a MR,
    input: &'a Chunk,
    shard_id: usize,
}

impl<'a, MR: MapReducer> MapPartition<'a, MR> {
    pub fn new(mr: &'a MR, input: &'a Chunk, shard_id: usize) -> MapPartition<'a, MR> {
        MapPartition { mr, input, shard_id }
    }

    /// Hands the chunk to the mapper as whitespace-joined text and returns the
    /// emitted pairs in emission order.
    pub fn run(self) -> Result<Vec<Pair>> {
        let text = tokenize::join(self.input);
        let mut e = MEmitter::with_capacity(self.input.len());

        self.mr.map(&mut e, &text)?;

        log::trace!("map shard {}: {} tokens in, {} pairs out",
                    self.shard_id,
                    self.input.len(),
                    e.len());
        Ok(e.into_pairs())
    }
}
