//! The MapReducer trait and associated function types.

use crate::error::Result;
use crate::record_types::MEmitter;

/// Map() function type. The MEmitter argument is used to emit (word, increment)
/// pairs from the map() function; the second argument is the text of one chunk.
pub type MapperF = fn(&mut MEmitter, &str) -> Result<()>;
/// Reduce() function type. Takes a word and all increments emitted for it and
/// returns the aggregate.
pub type ReducerF = fn(&str, &[u32]) -> u64;

/// A MapReducer is shared by reference between all mapper threads of a run,
/// so it must be `Sync` and its methods take `&self`.
pub trait MapReducer: Send + Sync {
    /// Takes the text of one chunk and an emitter.
    /// The emitter is used to yield results from the map phase. An error fails
    /// the whole run.
    fn map(&self, em: &mut MEmitter, chunk: &str) -> Result<()>;

    /// Takes one word and its increments (at least one) and returns the total.
    fn reduce(&self, word: &str, increments: &[u32]) -> u64;
}
