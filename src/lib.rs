//! Presence-count Naive Bayes classifier for short text messages.
//!
//! Training counts, for every class, how many documents contain each token;
//! classification picks the class with the greatest Laplace-smoothed
//! log-posterior score.
//!
//! ```
//! use rs_naive_bayes::classifiers::naive_bayes::NaiveBayes;
//! use rs_naive_bayes::corpus::sample_corpus;
//!
//! let nb = NaiveBayes::train(&sample_corpus()).unwrap();
//! assert_eq!(nb.classify("Buy cheap viagra tickets").unwrap(), "SPAM");
//! ```

pub mod classifiers;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generic_types;
pub mod logging;
pub mod options;

pub use classifiers::model::Model;
pub use classifiers::naive_bayes::{tokenize, NaiveBayes};
pub use classifiers::scorer::{document_log_score, token_likelihood};
pub use classifiers::shared::SharedClassifier;
pub use classifiers::trainer::{train, Trainer};
pub use corpus::{CorpusStore, Document, TrainingCorpus};
pub use error::{NaiveBayesError, Result};
