//! Bulk training from labeled samples.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::naive_bayes::NaiveBayesClassifier;
use super::types::{Class, SampleSet};
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer, WholeTokenizer};
use crate::error::{Result, SpamScoreError};

/// How the Good class is weighted during bulk training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPolicy {
    /// Learn each message once, for both classes.
    #[default]
    Symmetric,
    /// After the per-message pass, learn all Good messages once more as a
    /// single batch in which each whole message is one token.
    LegacyGoodReinforcement,
}

impl TrainingPolicy {
    /// Configuration name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            TrainingPolicy::Symmetric => "symmetric",
            TrainingPolicy::LegacyGoodReinforcement => "legacy_good_reinforcement",
        }
    }
}

impl fmt::Display for TrainingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainingPolicy {
    type Err = SpamScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "symmetric" => Ok(TrainingPolicy::Symmetric),
            "legacy_good_reinforcement" | "legacy" => Ok(TrainingPolicy::LegacyGoodReinforcement),
            other => Err(SpamScoreError::invalid_argument(format!(
                "unknown training policy '{other}'"
            ))),
        }
    }
}

/// Summary of a bulk training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub good_samples: usize,
    pub bad_samples: usize,
    pub learned_count: u64,
    pub vocabulary_size: usize,
    pub policy: TrainingPolicy,
}

/// Feeds a [`SampleSet`] into a [`NaiveBayesClassifier`].
pub struct Trainer {
    policy: TrainingPolicy,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trainer")
            .field("policy", &self.policy)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainingPolicy::default())
    }
}

impl Trainer {
    /// Create a trainer that splits messages with [`SpaceTokenizer`].
    pub fn new(policy: TrainingPolicy) -> Self {
        Self::with_tokenizer(policy, Arc::new(SpaceTokenizer::new()))
    }

    /// Create a trainer with a custom message tokenizer.
    pub fn with_tokenizer(policy: TrainingPolicy, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Trainer { policy, tokenizer }
    }

    pub fn policy(&self) -> TrainingPolicy {
        self.policy
    }

    /// Train a fresh classifier with the class order `[Good, Bad]`.
    pub fn train(&self, samples: &SampleSet) -> (NaiveBayesClassifier, TrainingReport) {
        let mut classifier = NaiveBayesClassifier::new();
        let report = self.train_into(&mut classifier, samples);
        (classifier, report)
    }

    /// Learn every sample into an existing classifier.
    pub fn train_into(
        &self,
        classifier: &mut NaiveBayesClassifier,
        samples: &SampleSet,
    ) -> TrainingReport {
        let good = samples.good();
        let bad = samples.bad();

        for message in &good {
            debug!("good sample: {message}");
            classifier.learn(&self.tokenizer.terms(message), Class::Good);
        }

        for message in &bad {
            debug!("bad sample: {message}");
            classifier.learn(&self.tokenizer.terms(message), Class::Bad);
        }

        if self.policy == TrainingPolicy::LegacyGoodReinforcement {
            let whole = WholeTokenizer::new();
            let batch: Vec<String> = good
                .iter()
                .flat_map(|message| whole.terms(message))
                .collect();
            debug!("reinforcing Good with {} whole messages", batch.len());
            classifier.learn(&batch, Class::Good);
        }

        let report = TrainingReport {
            good_samples: good.len(),
            bad_samples: bad.len(),
            learned_count: classifier.learned_count(),
            vocabulary_size: classifier.table().vocabulary_size(),
            policy: self.policy,
        };

        info!(
            "trained on {} good and {} bad samples ({} learn calls, vocabulary {}, policy {})",
            report.good_samples,
            report.bad_samples,
            report.learned_count,
            report.vocabulary_size,
            report.policy
        );

        report
    }
}
