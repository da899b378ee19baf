//! Tokenizer implementations.
//!
//! - [`space::SpaceTokenizer`] - Splits on the ASCII space character only
//! - [`whole::WholeTokenizer`] - Treats the entire text as a single token
//!
//! # Examples
//!
//! ```
//! use spamscore::analysis::tokenizer::Tokenizer;
//! use spamscore::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let terms = tokenizer.terms("Hello  world");
//! assert_eq!(terms, vec!["Hello", "", "world"]);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization cannot fail: every input, including the empty string,
/// produces a token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize and keep only the token texts, in order.
    fn terms(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }
}

pub mod space;
pub mod whole;

pub use space::SpaceTokenizer;
pub use whole::WholeTokenizer;
