//! A MapReducer that uses supplied map()/reduce() functions.

use crate::error::Result;
use crate::mapreducer::{MapReducer, MapperF, ReducerF};
use crate::record_types::MEmitter;

/// This type implements the MapReducer trait. You can use it to provide your own functions to a
/// run. If you need more flexibility, however, you may want to simply implement your own type
/// that fulfills MapReducer.
#[derive(Clone, Copy)]
pub struct ClosureMapReducer {
    mapper: MapperF,
    reducer: ReducerF,
}

impl ClosureMapReducer {
    /// Create a new MapReducer from the supplied functions.
    pub fn new(mapper: MapperF, reducer: ReducerF) -> ClosureMapReducer {
        ClosureMapReducer { mapper, reducer }
    }
}

impl MapReducer for ClosureMapReducer {
    fn map(&self, e: &mut MEmitter, chunk: &str) -> Result<()> {
        (self.mapper)(e, chunk)
    }
    fn reduce(&self, word: &str, increments: &[u32]) -> u64 {
        (self.reducer)(word, increments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_func(e: &mut MEmitter, chunk: &str) -> Result<()> {
        for w in chunk.split_whitespace() {
            e.emit(String::from(w), 2);
        }
        Ok(())
    }

    fn reducer_func(_: &str, increments: &[u32]) -> u64 {
        increments.len() as u64
    }

    #[test]
    fn test_forwards_to_functions() {
        let mr = ClosureMapReducer::new(mapper_func, reducer_func);
        let mut e = MEmitter::new();
        mr.map(&mut e, "x y").unwrap();

        let pairs = e.into_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].count, 2);
        assert_eq!(mr.reduce("x", &[2, 2, 2]), 3);
    }
}
