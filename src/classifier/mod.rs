//! Two-class Naive Bayes spam classification.
//!
//! # Architecture
//!
//! - `FrequencyTable`: per-class token counts, totals and vocabulary size
//! - `scorer`: smoothed log-likelihood scoring and normalisation
//! - `NaiveBayesClassifier`: facade exposing `learn`, `scores` and
//!   `learned_count`
//! - `Trainer`: bulk training from a `SampleSet`
//!
//! # Example
//!
//! ```
//! use spamscore::classifier::{Class, NaiveBayesClassifier};
//!
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.learn(&["hey", "how", "are", "you"], Class::Good);
//! classifier.learn(&["free", "money", "click", "here"], Class::Bad);
//!
//! let result = classifier.scores(&["free", "money"]);
//! assert!(result.probability(Class::Bad) > 0.5);
//! assert!(result.strict);
//! ```

mod frequency;
mod naive_bayes;
pub mod scorer;
mod trainer;
mod types;

// Public exports
pub use frequency::{ClassFrequencies, FrequencyTable};
pub use naive_bayes::NaiveBayesClassifier;
pub use trainer::{Trainer, TrainingPolicy, TrainingReport};
pub use types::{Class, SampleSet, ScoreResult};
