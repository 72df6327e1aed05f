use std::io;

use thiserror::Error;

pub type Result<T, E = NaiveBayesError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum NaiveBayesError {
    #[error("Cannot train on an empty corpus")]
    EmptyCorpus,

    #[error("Class `{0}` is not part of the model")]
    UnknownClass(String),

    #[error("The model has no classes to choose from")]
    NoClasses,

    #[error("Failed to read the training corpus: {0}")]
    CorpusError(io::Error),

    #[error("Failed to save the model: {0}")]
    SaveError(io::Error),

    #[error("Failed to load the model: {0}")]
    LoadError(io::Error),

    #[error("Failed to serialize or deserialize the model: {0}")]
    SerializationError(serde_json::Error),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid input: {0}")]
    InputError(String),
}
