use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::classifiers::naive_bayes::NaiveBayes;
use crate::classifiers::trainer::Trainer;
use crate::corpus::TrainingCorpus;
use crate::error::Result;

/// A classifier shared between threads that can be retrained in place.
///
/// Readers take a snapshot of the current classifier and score against it
/// without holding the lock. Retraining builds the new model first, then swaps
/// the snapshot pointer, so a reader sees either the old model or the new one.
#[derive(Debug)]
pub struct SharedClassifier {
    current: RwLock<Arc<NaiveBayes>>,
}

impl SharedClassifier {
    pub fn new(classifier: NaiveBayes) -> Self {
        SharedClassifier {
            current: RwLock::new(Arc::new(classifier)),
        }
    }

    pub fn snapshot(&self) -> Arc<NaiveBayes> {
        Arc::clone(&self.current.read())
    }

    pub fn classify(&self, text: &str) -> Result<String> {
        self.snapshot().classify(text)
    }

    /// Replace the current classifier.
    pub fn swap(&self, classifier: NaiveBayes) -> Arc<NaiveBayes> {
        std::mem::replace(&mut *self.current.write(), Arc::new(classifier))
    }

    /// Train on `corpus` and swap the result in. On error the current model stays.
    pub fn retrain(&self, trainer: &Trainer, corpus: &TrainingCorpus) -> Result<()> {
        let classifier = NaiveBayes::train_with(trainer, corpus)?;
        let vocabulary_size = classifier.model().vocabulary_size();
        self.swap(classifier);
        info!(documents = corpus.len(), vocabulary_size, "Swapped in retrained model");
        Ok(())
    }
}
