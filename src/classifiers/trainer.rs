use std::collections::{BTreeMap, HashMap, HashSet};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::classifiers::model::Model;
use crate::corpus::TrainingCorpus;
use crate::error::{NaiveBayesError, Result};

/// Builds a [`Model`] from a training corpus.
///
/// Each document adds at most one to the presence count of a token under its
/// class, however many times the token repeats inside that document.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    show_progress: bool,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a progress bar on stderr while counting documents.
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn train(&self, corpus: &TrainingCorpus) -> Result<Model> {
        if corpus.is_empty() {
            return Err(NaiveBayesError::EmptyCorpus);
        }
        let total_documents = corpus.len();

        let pb = if self.show_progress {
            let pb = ProgressBar::new(total_documents as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb.set_message("Training in progress...");
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut class_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut class_token_presence: BTreeMap<String, HashMap<String, usize>> = BTreeMap::new();
        let mut vocabulary: HashSet<&str> = HashSet::new();

        for (tokens, label) in corpus.iter() {
            *class_counts.entry(label.to_string()).or_insert(0) += 1;

            // A class whose documents are all empty still needs its presence table.
            let presence = class_token_presence.entry(label.to_string()).or_default();

            let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
            for token in tokens {
                if seen.insert(token.as_str()) {
                    *presence.entry(token.clone()).or_insert(0) += 1;
                }
            }
            vocabulary.extend(seen);

            pb.inc(1);
        }

        pb.finish_with_message("Training complete!");

        let class_priors: BTreeMap<String, f64> = class_counts
            .iter()
            .map(|(label, &count)| (label.clone(), count as f64 / total_documents as f64))
            .collect();

        let class_token_total: BTreeMap<String, usize> = class_token_presence
            .iter()
            .map(|(label, tokens)| (label.clone(), tokens.values().sum()))
            .collect();

        let vocabulary_size = vocabulary.len();

        info!(
            documents = total_documents,
            classes = class_counts.len(),
            vocabulary_size,
            "Trained model"
        );
        for (label, count) in &class_counts {
            debug!(
                class = %label,
                documents = count,
                prior = class_priors[label],
                presence_total = class_token_total[label],
                "Class statistics"
            );
        }

        Ok(Model {
            class_counts,
            class_priors,
            class_token_presence,
            class_token_total,
            vocabulary_size,
            total_documents,
        })
    }
}

/// Train with default options.
pub fn train(corpus: &TrainingCorpus) -> Result<Model> {
    Trainer::new().train(corpus)
}
