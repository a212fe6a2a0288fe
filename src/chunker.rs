//! Partitions the token sequence into the chunks handed to the mappers.

use crate::record_types::{Chunk, Token};

/// Splits `tokens` into `num_chunks` contiguous chunks of `len / num_chunks`
/// tokens each. Tokens left over after the last full chunk go into one extra
/// trailing chunk, so the result holds `num_chunks + 1` chunks whenever the
/// length is not a multiple of `num_chunks`. If `num_chunks` exceeds the
/// number of tokens, all base chunks are empty and the trailing chunk holds
/// everything.
///
/// `num_chunks` must be positive; `MRParameters::validate` enforces this
/// before a run starts.
pub fn chunk(tokens: &[Token], num_chunks: usize) -> Vec<Chunk> {
    assert!(num_chunks > 0, "cannot split into zero chunks");

    let size = tokens.len() / num_chunks;
    let mut chunks: Vec<Chunk> = Vec::with_capacity(num_chunks + 1);

    for i in 0..num_chunks {
        chunks.push(tokens[i * size..(i + 1) * size].to_vec());
    }

    let covered = num_chunks * size;
    if covered < tokens.len() {
        chunks.push(tokens[covered..].to_vec());
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(words: &str) -> Vec<Token> {
        words.split_whitespace().map(String::from).collect()
    }

    fn lengths(chunks: &[Chunk]) -> Vec<usize> {
        chunks.iter().map(|c| c.len()).collect()
    }

    #[test]
    fn test_even_split() {
        let chunks = chunk(&tokens("a b c d e f"), 3);
        assert_eq!(lengths(&chunks), vec![2, 2, 2]);
        assert_eq!(chunks[1], tokens("c d"));
    }

    #[test]
    fn test_remainder_gets_own_chunk() {
        let chunks = chunk(&tokens("a b c d e f g"), 3);
        assert_eq!(lengths(&chunks), vec![2, 2, 2, 1]);
        assert_eq!(chunks[3], tokens("g"));
    }

    #[test]
    fn test_more_chunks_than_tokens() {
        let chunks = chunk(&tokens("a b c"), 5);
        assert_eq!(lengths(&chunks), vec![0, 0, 0, 0, 0, 3]);
        assert_eq!(chunks[5], tokens("a b c"));
    }

    #[test]
    fn test_empty_input() {
        let chunks = chunk(&[], 4);
        assert_eq!(lengths(&chunks), vec![0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn test_zero_chunks() {
        chunk(&tokens("a"), 0);
    }

    proptest! {
        #[test]
        fn test_chunks_concatenate_to_input(words in prop::collection::vec("[a-z]{1,5}", 0..64),
                                            n in 1usize..12) {
            let chunks = chunk(&words, n);
            prop_assert!(chunks.len() == n || chunks.len() == n + 1);

            let rejoined: Vec<Token> = chunks.into_iter().flatten().collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
