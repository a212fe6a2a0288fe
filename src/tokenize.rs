//! Splits text into lowercase word tokens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record_types::Token;

lazy_static! {
    // Letters, numbers of any kind, and '_'. Combining marks and joiners delimit.
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}_]+").unwrap();
}

/// Returns every maximal run of word characters in `text`, lowercased, in
/// order of appearance. Punctuation and whitespace only delimit tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_owned()).collect()
}

/// Joins tokens back into text that `tokenize` splits into the same tokens.
pub fn join(tokens: &[Token]) -> String {
    tokens.join(" ")
}
