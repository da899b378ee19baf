//! # spamscore
//!
//! Naive Bayes spam scoring for short text messages.
//!
//! ## Features
//!
//! - Two-class (Good/Bad) multinomial Naive Bayes with add-one smoothing
//! - Case- and punctuation-preserving space tokenization
//! - CSV loader for labeled SMS-style corpora
//! - Web form and JSON API for scoring messages

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod server;

pub mod prelude {
    pub use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
    pub use crate::classifier::{
        Class, NaiveBayesClassifier, SampleSet, ScoreResult, Trainer, TrainingPolicy,
    };
    pub use crate::error::{Result, SpamScoreError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
