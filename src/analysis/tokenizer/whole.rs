//! Whole tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that treats the entire input as a single token.
///
/// Used when whole messages, rather than their words, are fed to the
/// classifier. Unlike [`super::SpaceTokenizer`] an empty input yields an
/// empty stream.
#[derive(Clone, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    /// Create a new whole tokenizer.
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        if text.is_empty() {
            Box::new(std::iter::empty())
        } else {
            let token = Token::with_offsets(text, 0, 0, text.len());
            Box::new(std::iter::once(token))
        }
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}
