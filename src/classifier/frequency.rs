//! Per-class token frequency accounting.

use ahash::AHashMap;

use super::types::Class;

/// Token counts observed for a single class.
#[derive(Debug, Clone, Default)]
pub struct ClassFrequencies {
    /// Occurrences of each token.
    counts: AHashMap<String, u64>,
    /// Sum of all values in `counts`, kept in sync on every insert.
    total_tokens: u64,
    /// Number of token batches learned for this class.
    documents: u64,
}

impl ClassFrequencies {
    /// Occurrences of `token`, or 0 when never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total tokens learned for this class.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of batches learned for this class.
    pub fn documents(&self) -> u64 {
        self.documents
    }

    /// Number of distinct tokens seen for this class.
    pub fn distinct_tokens(&self) -> usize {
        self.counts.len()
    }

    fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }
}

/// Frequency table for both classes.
///
/// Counts only ever grow. The vocabulary size (distinct tokens across both
/// classes) is maintained incrementally so scoring can read it in O(1).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    good: ClassFrequencies,
    bad: ClassFrequencies,
    vocabulary_size: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of every token in `tokens` for `class`.
    pub fn add_occurrences<S: AsRef<str>>(&mut self, class: Class, tokens: &[S]) {
        let (target, other) = match class {
            Class::Good => (&mut self.good, &self.bad),
            Class::Bad => (&mut self.bad, &self.good),
        };

        for token in tokens {
            let token = token.as_ref();
            match target.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    if !other.contains(token) {
                        self.vocabulary_size += 1;
                    }
                    target.counts.insert(token.to_string(), 1);
                }
            }
        }

        target.total_tokens += tokens.len() as u64;
        target.documents += 1;
    }

    /// Stored count of `token` for `class`, 0 if never seen.
    pub fn count_for(&self, class: Class, token: &str) -> u64 {
        self.class(class).count(token)
    }

    /// Running total token count for `class`.
    pub fn total_for(&self, class: Class) -> u64 {
        self.class(class).total_tokens
    }

    /// Number of token batches learned for `class`.
    pub fn documents_for(&self, class: Class) -> u64 {
        self.class(class).documents
    }

    /// Number of distinct tokens seen across both classes.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Whether `token` was seen in at least one class.
    pub fn is_known(&self, token: &str) -> bool {
        self.good.contains(token) || self.bad.contains(token)
    }

    /// Frequencies of a single class.
    pub fn class(&self, class: Class) -> &ClassFrequencies {
        match class {
            Class::Good => &self.good,
            Class::Bad => &self.bad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_occurrences() {
        let mut table = FrequencyTable::new();
        table.add_occurrences(Class::Good, &["hey", "how", "hey"]);

        assert_eq!(table.count_for(Class::Good, "hey"), 2);
        assert_eq!(table.count_for(Class::Good, "how"), 1);
        assert_eq!(table.count_for(Class::Bad, "hey"), 0);
        assert_eq!(table.total_for(Class::Good), 3);
        assert_eq!(table.total_for(Class::Bad), 0);
        assert_eq!(table.documents_for(Class::Good), 1);
        assert_eq!(table.vocabulary_size(), 2);
    }

    #[test]
    fn test_vocabulary_counts_shared_tokens_once() {
        let mut table = FrequencyTable::new();
        table.add_occurrences(Class::Good, &["free", "lunch"]);
        table.add_occurrences(Class::Bad, &["free", "money"]);

        assert_eq!(table.vocabulary_size(), 3);
        assert!(table.is_known("money"));
        assert!(!table.is_known("prize"));
        assert_eq!(table.class(Class::Bad).distinct_tokens(), 2);
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let mut table = FrequencyTable::new();
        table.add_occurrences(Class::Bad, &["a", "b", "a", ""]);
        table.add_occurrences(Class::Bad, &["b", "c"]);

        let sum: u64 = ["a", "b", "c", ""]
            .iter()
            .map(|t| table.count_for(Class::Bad, t))
            .sum();
        assert_eq!(table.total_for(Class::Bad), sum);
        assert_eq!(table.total_for(Class::Bad), 6);
        assert_eq!(table.documents_for(Class::Bad), 2);
    }

    #[test]
    fn test_empty_batch_counts_document_only() {
        let mut table = FrequencyTable::new();
        let empty: [&str; 0] = [];
        table.add_occurrences(Class::Good, &empty);

        assert_eq!(table.total_for(Class::Good), 0);
        assert_eq!(table.documents_for(Class::Good), 1);
        assert_eq!(table.vocabulary_size(), 0);
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let mut table = FrequencyTable::new();
        table.add_occurrences(Class::Good, &["Free", "free"]);

        assert_eq!(table.count_for(Class::Good, "Free"), 1);
        assert_eq!(table.count_for(Class::Good, "FREE"), 0);
        assert_eq!(table.vocabulary_size(), 2);
    }
}
