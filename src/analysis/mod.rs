//! Text analysis for the classifier.
//!
//! Messages are turned into token sequences before training and scoring.
//! Tokens keep their original case and punctuation; no normalisation is
//! applied anywhere in the pipeline.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
