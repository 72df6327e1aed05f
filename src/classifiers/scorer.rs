//! Smoothed likelihoods and log-space document scores.
//!
//! ```text
//! P(t | c) = (presence(c, t) + 1) / (total(c) + |V|)
//! score(d, c) = ln P(c) + sum over every token t in d of ln P(t | c)
//! ```
//!
//! Training counts a token once per document, but a query is scored per
//! occurrence: `"buy buy"` adds the log-likelihood of `buy` twice.

use crate::classifiers::model::Model;
use crate::error::{NaiveBayesError, Result};

/// Laplace-smoothed probability of `token` given `class`. Always in (0, 1].
pub fn token_likelihood(model: &Model, token: &str, class: &str) -> Result<f64> {
    let total = model
        .class_token_total(class)
        .ok_or_else(|| NaiveBayesError::UnknownClass(class.to_string()))?;
    Ok(smoothed(model, model.presence(class, token), total))
}

/// Log prior of `class` plus the log-likelihood of every token occurrence.
pub fn document_log_score<S: AsRef<str>>(model: &Model, tokens: &[S], class: &str) -> Result<f64> {
    let unknown = || NaiveBayesError::UnknownClass(class.to_string());
    let prior = model.class_prior(class).ok_or_else(unknown)?;
    let total = model.class_token_total(class).ok_or_else(unknown)?;

    let log_likelihood: f64 = tokens
        .iter()
        .map(|token| smoothed(model, model.presence(class, token.as_ref()), total).ln())
        .sum();

    Ok(prior.ln() + log_likelihood)
}

fn smoothed(model: &Model, presence: usize, total: usize) -> f64 {
    let denominator = total + model.vocabulary_size();
    if denominator == 0 {
        // Only documents without tokens were seen: no token carries evidence.
        return 1.0;
    }
    (presence as f64 + 1.0) / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::trainer::train;
    use crate::corpus::{Document, TrainingCorpus};

    fn model() -> Model {
        let corpus: TrainingCorpus = vec![
            Document::new(["buy", "cheap", "viagra"], "SPAM"),
            Document::new(["buy", "cheap", "airlines", "airlines", "tickets"], "HAM"),
            Document::new(["new", "york", "is", "a", "big", "city"], "HAM"),
        ]
        .into_iter()
        .collect();
        train(&corpus).unwrap()
    }

    #[test]
    fn test_token_likelihood_formula() {
        let model = model();
        // vocabulary: buy cheap viagra airlines tickets new york is a big city = 11
        assert_eq!(model.vocabulary_size(), 11);

        let p = token_likelihood(&model, "buy", "SPAM").unwrap();
        assert!((p - 2.0 / (3.0 + 11.0)).abs() < 1e-12);

        let p = token_likelihood(&model, "buy", "HAM").unwrap();
        assert!((p - 2.0 / (10.0 + 11.0)).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_token_is_smoothed() {
        let model = model();
        for class in ["SPAM", "HAM"] {
            let p = token_likelihood(&model, "persia", class).unwrap();
            assert!(p > 0.0);
            assert!(p <= 1.0);
        }
        let p = token_likelihood(&model, "york", "SPAM").unwrap();
        assert!((p - 1.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_document_log_score_sums_prior_and_likelihoods() {
        let model = model();
        let tokens = ["buy", "tickets"];
        let expected = (1.0f64 / 3.0).ln() + (2.0f64 / 14.0).ln() + (1.0f64 / 14.0).ln();
        let score = document_log_score(&model, &tokens, "SPAM").unwrap();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_query_tokens_count_per_occurrence() {
        let model = model();
        let once = document_log_score(&model, &["buy"], "SPAM").unwrap();
        let twice = document_log_score(&model, &["buy", "buy"], "SPAM").unwrap();
        let p = token_likelihood(&model, "buy", "SPAM").unwrap();

        assert_ne!(once, twice);
        assert!((twice - once - p.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_query_scores_prior() {
        let model = model();
        let score = document_log_score::<&str>(&model, &[], "HAM").unwrap();
        assert!((score - (2.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_tokenless_corpus_scores_priors() {
        let corpus: TrainingCorpus = vec![
            Document::new(Vec::<String>::new(), "HAM"),
            Document::new(Vec::<String>::new(), "HAM"),
            Document::new(Vec::<String>::new(), "SPAM"),
        ]
        .into_iter()
        .collect();
        let model = train(&corpus).unwrap();

        assert_eq!(token_likelihood(&model, "buy", "SPAM").unwrap(), 1.0);
        let score = document_log_score(&model, &["buy", "now"], "HAM").unwrap();
        assert!((score - (2.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_class() {
        let model = model();
        assert!(matches!(
            token_likelihood(&model, "buy", "EGGS"),
            Err(NaiveBayesError::UnknownClass(c)) if c == "EGGS"
        ));
        assert!(matches!(
            document_log_score(&model, &["buy"], "EGGS"),
            Err(NaiveBayesError::UnknownClass(_))
        ));
    }
}
