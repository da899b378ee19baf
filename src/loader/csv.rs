//! CSV sample loader.
//!
//! Reads two-column labeled records, class tag first and message second:
//! ```csv
//! ham,Ok lar... Joking wif u oni...
//! spam,Free entry in 2 a wkly comp to win FA Cup final tkts
//! ```
//! Extra columns are ignored. A header row is not required; one like
//! `v1,v2` falls out through the length filter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info};

use crate::classifier::SampleSet;
use crate::config::LoaderConfig;
use crate::error::{Result, SpamScoreError};

/// A sample loader for labeled CSV data.
///
/// Records are kept when the class tag is longer than `min_tag_len` bytes
/// and the message longer than `min_message_len` bytes. Records with fewer
/// than two fields are skipped. Messages are decoded as lossy UTF-8.
#[derive(Debug, Clone, Default)]
pub struct CsvSampleLoader {
    config: LoaderConfig,
}

impl CsvSampleLoader {
    /// Create a loader with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from explicit settings.
    pub fn with_config(config: LoaderConfig) -> Self {
        CsvSampleLoader { config }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set whether the first row is a header.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.config.has_headers = has_headers;
        self
    }

    /// Set whether records may have differing field counts.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.config.flexible = flexible;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load samples from a file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<SampleSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SpamScoreError::load(format!("failed to open {}: {}", path.display(), e))
        })?;

        let samples = self.load_reader(file)?;
        info!(
            "loaded {} samples from {} ({} records skipped)",
            samples.len(),
            path.display(),
            samples.skipped_records()
        );
        Ok(samples)
    }

    /// Load samples from any reader.
    pub fn load_reader<R: Read>(&self, input: R) -> Result<SampleSet> {
        self.config.validate()?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter as u8)
            .has_headers(self.config.has_headers)
            .flexible(self.config.flexible)
            .from_reader(input);

        let mut samples = SampleSet::new();
        let mut record = ByteRecord::new();

        while reader.read_byte_record(&mut record)? {
            match self.parse_record(&record) {
                Some((message, is_good)) => samples.insert(message, is_good),
                None => {
                    debug!("skipping record at line {}", line_of(&record));
                    samples.record_skipped();
                }
            }
        }

        Ok(samples)
    }

    /// Extract `(message, is_good)` from a record, or `None` if it is filtered out.
    fn parse_record(&self, record: &ByteRecord) -> Option<(String, bool)> {
        let (tag, message) = match (record.get(0), record.get(1)) {
            (Some(tag), Some(message)) => (tag, message),
            _ => return None,
        };

        if tag.len() <= self.config.min_tag_len || message.len() <= self.config.min_message_len {
            return None;
        }

        let is_good = tag == self.config.good_tag.as_bytes();
        Some((String::from_utf8_lossy(message).into_owned(), is_good))
    }
}

fn line_of(record: &ByteRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
