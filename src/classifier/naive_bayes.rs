//! Naive Bayes classifier facade.

use log::trace;

use super::frequency::FrequencyTable;
use super::scorer;
use super::types::{Class, ScoreResult};
use crate::error::{Result, SpamScoreError};

/// Two-class Naive Bayes text classifier.
///
/// The class order is fixed at construction and determines the order of
/// [`ScoreResult::scores`]. `learn` is the only mutator; once training is
/// done the classifier can be shared read-only (e.g. behind an `Arc`)
/// between any number of scoring threads.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    classes: [Class; 2],
    table: FrequencyTable,
    learned: u64,
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveBayesClassifier {
    /// Create an empty classifier with the class order `[Good, Bad]`.
    pub fn new() -> Self {
        NaiveBayesClassifier {
            classes: Class::ALL,
            table: FrequencyTable::new(),
            learned: 0,
        }
    }

    /// Create an empty classifier with an explicit class order.
    pub fn with_classes(classes: [Class; 2]) -> Result<Self> {
        if classes[0] == classes[1] {
            return Err(SpamScoreError::invalid_argument(format!(
                "classifier needs two distinct classes, got {} twice",
                classes[0]
            )));
        }

        Ok(NaiveBayesClassifier {
            classes,
            table: FrequencyTable::new(),
            learned: 0,
        })
    }

    /// Learn one batch of tokens for `class`.
    ///
    /// Every call counts once towards [`learned_count`](Self::learned_count),
    /// including calls with no tokens.
    pub fn learn<S: AsRef<str>>(&mut self, tokens: &[S], class: Class) {
        trace!("learning {} tokens as {}", tokens.len(), class);
        self.table.add_occurrences(class, tokens);
        self.learned += 1;
    }

    /// Score a tokenized query. Never mutates the classifier.
    pub fn scores<S: AsRef<str>>(&self, tokens: &[S]) -> ScoreResult {
        scorer::score(&self.table, self.classes, tokens)
    }

    /// Total number of `learn` calls across both classes.
    pub fn learned_count(&self) -> u64 {
        self.learned
    }

    /// Class order of score results.
    pub fn classes(&self) -> [Class; 2] {
        self.classes
    }

    /// Read-only view of the learned frequencies.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}
