//! Service configuration.
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes:
//!
//! ```json
//! {
//!   "data_path": "data/spam.csv",
//!   "bind_address": "127.0.0.1:9090",
//!   "training_policy": "legacy_good_reinforcement",
//!   "loader": { "min_message_len": 4 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::TrainingPolicy;
use crate::error::{Result, SpamScoreError};

/// Messages scored and logged right after training.
pub const DEFAULT_PROBE_MESSAGES: [&str; 2] = [
    "hey, how are you doing?",
    "Hi babe its Princess Twilight, how r u? Im home from abroad and lonely, text me back if u wanna chat xxSP expensivesms.com Text stop to stop",
];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpamScoreConfig {
    /// Training CSV file.
    pub data_path: PathBuf,

    /// Listen address of the web form.
    pub bind_address: String,

    /// Good-class weighting used during bulk training.
    pub training_policy: TrainingPolicy,

    /// CSV loader settings.
    pub loader: LoaderConfig,

    /// Messages scored and logged after training.
    pub probe_messages: Vec<String>,
}

impl Default for SpamScoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spam.csv"),
            bind_address: "0.0.0.0:9090".to_string(),
            training_policy: TrainingPolicy::default(),
            loader: LoaderConfig::default(),
            probe_messages: DEFAULT_PROBE_MESSAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SpamScoreConfig {
    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpamScoreError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: SpamScoreConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would only fail later at startup.
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(SpamScoreError::config("bind_address must not be empty"));
        }
        self.loader.validate()
    }
}

/// Settings for [`CsvSampleLoader`](crate::loader::CsvSampleLoader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter (ASCII only).
    pub delimiter: char,

    /// Whether the first row is a header to skip.
    pub has_headers: bool,

    /// Whether records may have differing field counts.
    pub flexible: bool,

    /// Class tag mapped to Good; every other tag is Bad.
    pub good_tag: String,

    /// Tags with at most this many bytes are discarded.
    pub min_tag_len: usize,

    /// Messages with at most this many bytes are discarded.
    pub min_message_len: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: false,
            flexible: true,
            good_tag: "ham".to_string(),
            min_tag_len: 1,
            min_message_len: 4,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(SpamScoreError::config(format!(
                "delimiter must be ASCII, got '{}'",
                self.delimiter
            )));
        }
        if self.good_tag.is_empty() {
            return Err(SpamScoreError::config("good_tag must not be empty"));
        }
        Ok(())
    }
}
