//! ASCII space tokenizer.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on the ASCII space character (`' '`).
///
/// Tabs, newlines and other whitespace stay inside tokens. Consecutive
/// spaces produce empty tokens, and the empty string produces one empty
/// token, so `n` spaces always yield `n + 1` tokens.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (position, word) in text.split(' ').enumerate() {
            let end = start + word.len();
            tokens.push(Token::with_offsets(word, position, start, end));
            // skip the separator
            start = end + 1;
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
