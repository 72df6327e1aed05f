use std::path::Path;

use tracing::debug;

use crate::classifiers::model::Model;
use crate::classifiers::scorer::document_log_score;
use crate::classifiers::trainer::Trainer;
use crate::corpus::TrainingCorpus;
use crate::error::{NaiveBayesError, Result};
use crate::generic_types::{ClassScore, Classification};

/// Token separator of classification input.
pub const DELIM: char = ' ';

/// Split `text` on single spaces. Empty pieces between, before or after
/// separators are kept as empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(DELIM).collect()
}

#[derive(Debug, Clone, PartialEq)]
/// Naive Bayes classifier over a trained model
pub struct NaiveBayes {
    model: Model,
}

impl NaiveBayes {
    pub fn new(model: Model) -> Self {
        NaiveBayes { model }
    }

    /// Train a classifier on a corpus with default trainer options
    pub fn train(corpus: &TrainingCorpus) -> Result<Self> {
        Self::train_with(&Trainer::new(), corpus)
    }

    pub fn train_with(trainer: &Trainer, corpus: &TrainingCorpus) -> Result<Self> {
        Ok(NaiveBayes::new(trainer.train(corpus)?))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Log score of every class, in label order
    pub fn scores(&self, text: &str) -> Result<Vec<ClassScore>> {
        let tokens = tokenize(text);
        self.model
            .classes()
            .map(|class| {
                let log_score = document_log_score(&self.model, &tokens, class)?;
                debug!(class, log_score, text, "Log probability for class");
                Ok(ClassScore {
                    label: class.to_string(),
                    log_score,
                })
            })
            .collect()
    }

    /// Classify a given text
    ///
    /// Returns the class with the strictly greatest score. On a tie the class
    /// that sorts first keeps the lead.
    pub fn classify(&self, text: &str) -> Result<String> {
        let scores = self.scores(text)?;
        best(&scores).map(|score| score.label.clone())
    }

    /// Classify a given text and keep every class score
    pub fn classify_with_scores(&self, text: &str) -> Result<Classification> {
        let scores = self.scores(text)?;
        let label = best(&scores)?.label.clone();
        Ok(Classification {
            text: text.to_string(),
            label,
            scores,
        })
    }

    /// Save the model to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let serialized =
            serde_json::to_string(&self.model).map_err(NaiveBayesError::SerializationError)?;
        std::fs::write(path, serialized).map_err(NaiveBayesError::SaveError)?;
        Ok(())
    }

    /// Load the model from a file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let serialized = std::fs::read_to_string(path).map_err(NaiveBayesError::LoadError)?;
        let model: Model =
            serde_json::from_str(&serialized).map_err(NaiveBayesError::SerializationError)?;
        model.validate()?;
        Ok(NaiveBayes::new(model))
    }
}

fn best(scores: &[ClassScore]) -> Result<&ClassScore> {
    let mut iter = scores.iter();
    let mut max = iter.next().ok_or(NaiveBayesError::NoClasses)?;
    for score in iter {
        if score.log_score > max.log_score {
            max = score;
        }
    }
    Ok(max)
}
