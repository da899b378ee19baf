//! Multinomial Naive Bayes scoring with add-one smoothing.
//!
//! For each class `C` and query token `t`:
//!
//! ```text
//! P(t|C) = (count(C, t) + 1) / (total(C) + |V|)
//! ```
//!
//! The per-class log-likelihoods are summed, exponentiated and normalised so
//! the two scores sum to one. No class priors are applied.

use super::frequency::FrequencyTable;
use super::types::{Class, ScoreResult};

/// Smoothed conditional probability of `token` given `class`.
///
/// An empty table has no vocabulary to smooth against; every token then
/// gets probability 1 so it contributes nothing to either class.
pub fn conditional_probability(table: &FrequencyTable, class: Class, token: &str) -> f64 {
    let denominator = table.total_for(class) as f64 + table.vocabulary_size() as f64;
    if denominator == 0.0 {
        return 1.0;
    }
    (table.count_for(class, token) as f64 + 1.0) / denominator
}

/// Score `tokens` against `table`, reporting probabilities in `classes` order.
pub fn score<S: AsRef<str>>(
    table: &FrequencyTable,
    classes: [Class; 2],
    tokens: &[S],
) -> ScoreResult {
    let mut log_scores = [0.0f64; 2];
    let mut matched_tokens = 0;

    for token in tokens {
        let token = token.as_ref();
        for (log_score, class) in log_scores.iter_mut().zip(classes) {
            *log_score += conditional_probability(table, class, token).ln();
        }
        if table.is_known(token) {
            matched_tokens += 1;
        }
    }

    ScoreResult {
        classes,
        scores: normalize(log_scores),
        matched_tokens,
        strict: matched_tokens == tokens.len(),
    }
}

/// Turn log-scores into probabilities summing to one.
///
/// When both likelihoods underflow to zero the classes are indistinguishable
/// and the result is an even split.
fn normalize(log_scores: [f64; 2]) -> [f64; 2] {
    let likelihoods = log_scores.map(f64::exp);
    let sum = likelihoods[0] + likelihoods[1];

    if sum > 0.0 && sum.is_finite() {
        [likelihoods[0] / sum, likelihoods[1] / sum]
    } else {
        [0.5, 0.5]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [Class; 2] = [Class::Good, Class::Bad];

    fn trained_table() -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.add_occurrences(Class::Good, &["hey", "how", "are", "you", "doing"]);
        table.add_occurrences(Class::Bad, &["free", "money", "now", "click", "here"]);
        table
    }

    #[test]
    fn test_conditional_probability() {
        let table = trained_table();

        // (1 + 1) / (5 + 10)
        let p = conditional_probability(&table, Class::Good, "hey");
        assert!((p - 2.0 / 15.0).abs() < 1e-12);

        // (0 + 1) / (5 + 10)
        let p = conditional_probability(&table, Class::Bad, "hey");
        assert!((p - 1.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table_probability() {
        let table = FrequencyTable::new();
        assert_eq!(conditional_probability(&table, Class::Good, "x"), 1.0);
    }

    #[test]
    fn test_known_query_favors_good() {
        let table = trained_table();
        let result = score(&table, ORDER, &["hey", "how", "are", "you", "doing"]);

        assert!(result.scores[0] > result.scores[1]);
        assert_eq!(result.matched_tokens, 5);
        assert!(result.strict);
        assert!((result.scores[0] + result.scores[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_is_even_split() {
        let table = trained_table();
        let empty: [&str; 0] = [];
        let result = score(&table, ORDER, &empty);

        assert_eq!(result.scores, [0.5, 0.5]);
        assert_eq!(result.matched_tokens, 0);
        assert!(result.strict);
    }

    #[test]
    fn test_unknown_tokens_are_not_strict() {
        let table = trained_table();
        let result = score(&table, ORDER, &["xyzzyqux", "plughwobble"]);

        assert!(!result.strict);
        assert_eq!(result.matched_tokens, 0);
        assert!((result.scores[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_match_counts_duplicates() {
        let table = trained_table();
        let result = score(&table, ORDER, &["free", "free", "unseen"]);

        assert_eq!(result.matched_tokens, 2);
        assert!(!result.strict);
        assert!(result.scores[1] > result.scores[0]);
    }

    #[test]
    fn test_underflow_falls_back_to_even_split() {
        let table = trained_table();
        let tokens = vec!["hey"; 2000];
        let result = score(&table, ORDER, &tokens);

        assert_eq!(result.scores, [0.5, 0.5]);
        assert_eq!(result.matched_tokens, 2000);
        assert!(result.strict);
    }

    #[test]
    fn test_class_order_is_respected() {
        let table = trained_table();
        let forward = score(&table, ORDER, &["free", "money"]);
        let reversed = score(&table, [Class::Bad, Class::Good], &["free", "money"]);

        assert_eq!(forward.scores[0], reversed.scores[1]);
        assert_eq!(forward.scores[1], reversed.scores[0]);
        assert_eq!(reversed.best_class(), Class::Bad);
    }
}
