//! Line-oriented training corpus.
//!
//! Each line of a corpus file holds one document: whitespace separated tokens
//! followed by the class label as the last field, e.g.
//!
//! ```text
//! buy cheap viagra SPAM
//! new york is a big city HAM
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{NaiveBayesError, Result};

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub tokens: Vec<String>,
    pub label: String,
}

impl Document {
    pub fn new<I, S>(tokens: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            tokens: tokens.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }
}

/// Documents as two parallel sequences: `attributes[i]` are the tokens of the
/// document labeled `classes[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingCorpus {
    attributes: Vec<Vec<String>>,
    classes: Vec<String>,
}

impl TrainingCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document: Document) {
        self.attributes.push(document.tokens);
        self.classes.push(document.label);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn attributes(&self) -> &[Vec<String>] {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Iterate over `(tokens, label)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.attributes
            .iter()
            .zip(self.classes.iter())
            .map(|(tokens, label)| (tokens.as_slice(), label.as_str()))
    }

    /// Read a corpus from any line source. Blank lines carry no label and are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut corpus = TrainingCorpus::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line.map_err(NaiveBayesError::CorpusError)?;
            match parse_line(&line) {
                Some(document) => corpus.push(document),
                None => warn!(line = n + 1, "Skipping corpus line without a label"),
            }
        }
        Ok(corpus)
    }
}

impl FromIterator<Document> for TrainingCorpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        let mut corpus = TrainingCorpus::new();
        for document in iter {
            corpus.push(document);
        }
        corpus
    }
}

/// Split a corpus line into tokens and label. Returns `None` for a line with no fields.
pub fn parse_line(line: &str) -> Option<Document> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();
    let label = fields.pop()?;
    Some(Document::new(fields, label))
}

/// Small spam/ham corpus in file format, used by the `demo` command.
pub const SAMPLE_CORPUS: &[&str] = &[
    "Buy cheap viagra SPAM",
    "Buy cheap airlines airlines tickets HAM",
    "Dear friend I am the king of Persia king SPAM",
    "Hello friend I am from Persia you must be from New York HAM",
    "Hi friend how are you doing I love you HAM",
    "New York is a big city HAM",
];

pub fn sample_corpus() -> TrainingCorpus {
    SAMPLE_CORPUS.iter().filter_map(|line| parse_line(line)).collect()
}

/// File-backed corpus.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CorpusStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every document in the store.
    pub fn load(&self) -> Result<TrainingCorpus> {
        let file = File::open(&self.path).map_err(NaiveBayesError::CorpusError)?;
        let corpus = TrainingCorpus::from_reader(BufReader::new(file))?;
        info!(path = %self.path.display(), documents = corpus.len(), "Loaded training corpus");
        Ok(corpus)
    }

    /// Append one labeled example as a new line, creating the file if needed.
    pub fn append(&self, text: &str, label: &str) -> Result<()> {
        if label.is_empty() || label.chars().any(char::is_whitespace) {
            return Err(NaiveBayesError::InputError(format!(
                "label `{}` must be a single non-empty field",
                label
            )));
        }
        // Only single-space separated words read back as the same tokens.
        if !text.is_empty()
            && text
                .split(' ')
                .any(|word| word.is_empty() || word.chars().any(char::is_whitespace))
        {
            return Err(NaiveBayesError::InputError(format!(
                "example text `{}` must be words separated by single spaces",
                text.escape_default()
            )));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(NaiveBayesError::CorpusError)?;

        let line = if text.is_empty() {
            format!("{}\n", label)
        } else {
            format!("{} {}\n", text, label)
        };
        file.write_all(line.as_bytes())
            .map_err(NaiveBayesError::CorpusError)?;
        debug!(path = %self.path.display(), label, "Appended training example");
        Ok(())
    }
}
