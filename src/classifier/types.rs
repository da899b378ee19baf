//! Common types for spam classification.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    /// Legitimate message (ham).
    Good,
    /// Unwanted message (spam).
    Bad,
}

impl Class {
    /// Both classes in declaration order.
    pub const ALL: [Class; 2] = [Class::Good, Class::Bad];

    /// Display name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            Class::Good => "Good",
            Class::Bad => "Bad",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scoring one query against the classifier.
///
/// `scores` follows the class order given at classifier construction and
/// always sums to 1.0 within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Class order of `scores`.
    pub classes: [Class; 2],
    /// Normalised per-class probabilities.
    pub scores: [f64; 2],
    /// Number of query tokens seen in at least one class.
    pub matched_tokens: usize,
    /// True when every query token was seen in at least one class.
    pub strict: bool,
}

impl ScoreResult {
    /// Normalised probability of `class`.
    pub fn probability(&self, class: Class) -> f64 {
        if self.classes[0] == class {
            self.scores[0]
        } else {
            self.scores[1]
        }
    }

    /// `scores[1] - scores[0]`, the signed margin reported as
    /// "probabilityIsBad" by the web form. Lies in [-1, 1]; it is not a
    /// probability.
    pub fn bad_margin(&self) -> f64 {
        self.scores[1] - self.scores[0]
    }

    /// The class with the highest score. Ties go to the first class.
    pub fn best_class(&self) -> Class {
        if self.scores[1] > self.scores[0] {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}

/// Labeled training messages: message text mapped to `true` for Good (ham)
/// and `false` for Bad (spam).
///
/// Iteration order is sorted by message text so training is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    samples: BTreeMap<String, bool>,
    skipped_records: usize,
}

impl SampleSet {
    /// Create an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a labeled message. A repeated message keeps the latest label.
    pub fn insert<S: Into<String>>(&mut self, message: S, is_good: bool) {
        self.samples.insert(message.into(), is_good);
    }

    /// Label of a message, if present.
    pub fn get(&self, message: &str) -> Option<bool> {
        self.samples.get(message).copied()
    }

    /// Number of distinct messages.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set holds no messages.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over `(message, is_good)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.samples.iter()
    }

    /// Messages labeled Good.
    pub fn good(&self) -> Vec<&str> {
        self.with_label(true)
    }

    /// Messages labeled Bad.
    pub fn bad(&self) -> Vec<&str> {
        self.with_label(false)
    }

    /// Records the loader discarded while building this set.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped_records += 1;
    }

    fn with_label(&self, is_good: bool) -> Vec<&str> {
        self.samples
            .iter()
            .filter(|(_, label)| **label == is_good)
            .map(|(message, _)| message.as_str())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for SampleSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut set = SampleSet::new();
        for (message, is_good) in iter {
            set.insert(message, is_good);
        }
        set
    }
}
