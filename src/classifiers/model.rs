use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{NaiveBayesError, Result};

/// Trained statistics of a presence-count Naive Bayes classifier.
///
/// Class-keyed maps are ordered by label, so iterating classes is reproducible
/// and ties between equally scored classes resolve to the smaller label.
/// A `Model` is never modified after training; retraining produces a new one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Model {
    pub(crate) class_counts: BTreeMap<String, usize>,
    pub(crate) class_priors: BTreeMap<String, f64>,
    /// Number of documents of a class that contain a token at least once.
    pub(crate) class_token_presence: BTreeMap<String, HashMap<String, usize>>,
    pub(crate) class_token_total: BTreeMap<String, usize>,
    pub(crate) vocabulary_size: usize,
    pub(crate) total_documents: usize,
}

impl Model {
    /// Class labels in scoring order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_priors.keys().map(String::as_str)
    }

    pub fn num_classes(&self) -> usize {
        self.class_priors.len()
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.class_priors.contains_key(class)
    }

    pub fn class_count(&self, class: &str) -> Option<usize> {
        self.class_counts.get(class).copied()
    }

    pub fn class_prior(&self, class: &str) -> Option<f64> {
        self.class_priors.get(class).copied()
    }

    pub fn class_priors(&self) -> &BTreeMap<String, f64> {
        &self.class_priors
    }

    /// Presence count of `token` under `class`, zero for unseen pairs.
    pub fn presence(&self, class: &str, token: &str) -> usize {
        self.class_token_presence
            .get(class)
            .and_then(|tokens| tokens.get(token))
            .copied()
            .unwrap_or(0)
    }

    pub fn class_token_total(&self, class: &str) -> Option<usize> {
        self.class_token_total.get(class).copied()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// Check the invariants a trained model holds. Used on models read from disk.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(NaiveBayesError::InvalidModel(msg));

        if self.class_counts.is_empty() || self.total_documents == 0 {
            return invalid("no classes".to_string());
        }
        let counted: usize = self.class_counts.values().sum();
        if counted != self.total_documents {
            return invalid(format!(
                "class counts add up to {} but the model holds {} documents",
                counted, self.total_documents
            ));
        }

        for (class, &count) in &self.class_counts {
            if count == 0 {
                return invalid(format!("class `{}` has no documents", class));
            }
            let Some(&prior) = self.class_priors.get(class) else {
                return invalid(format!("class `{}` has no prior", class));
            };
            if !prior.is_finite() || prior <= 0.0 || prior > 1.0 {
                return invalid(format!("prior of `{}` is {}", class, prior));
            }
            let expected = count as f64 / self.total_documents as f64;
            if (prior - expected).abs() > 1e-9 {
                return invalid(format!(
                    "prior of `{}` is {} but its count gives {}",
                    class, prior, expected
                ));
            }

            let Some(tokens) = self.class_token_presence.get(class) else {
                return invalid(format!("class `{}` has no presence counts", class));
            };
            let total: usize = tokens.values().sum();
            if self.class_token_total.get(class) != Some(&total) {
                return invalid(format!("presence total of `{}` does not match its counts", class));
            }
            if tokens.values().any(|&n| n == 0 || n > count) {
                return invalid(format!("presence count out of range for `{}`", class));
            }
        }

        if self.class_priors.len() != self.class_counts.len()
            || self.class_token_presence.len() != self.class_counts.len()
            || self.class_token_total.len() != self.class_counts.len()
        {
            return invalid("per-class tables disagree on the set of classes".to_string());
        }

        let longest = self
            .class_token_presence
            .values()
            .map(HashMap::len)
            .max()
            .unwrap_or(0);
        if self.vocabulary_size < longest {
            return invalid(format!(
                "vocabulary size {} is smaller than a class vocabulary of {}",
                self.vocabulary_size, longest
            ));
        }

        Ok(())
    }
}
