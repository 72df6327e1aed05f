use serde::{Deserialize, Serialize};

/// Log-posterior score of one class for one message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassScore {
    pub label: String,
    pub log_score: f64,
}

/// Result of classifying a message, with the score of every class.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Classification {
    pub text: String,
    pub label: String,
    pub scores: Vec<ClassScore>,
}
