use std::fmt::Display;

use clap::{Parser, Subcommand, ValueEnum};

/// Train and query a Naive Bayes text classifier.
#[derive(Parser, Debug)]
#[command(name = "naive-bayes", version)]
pub struct Options {
    /// Configuration file (defaults to `config.*` in the working directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a labeled example to the training corpus
    Add {
        /// Class label of the example
        label: String,

        /// Example text; words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Train on the corpus and save the model
    Train,

    /// Classify a message with the saved model
    Classify {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,

        /// Train on the corpus instead of loading the saved model
        #[arg(long)]
        retrain: bool,

        /// Message to classify; words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Train on the built-in sample corpus and classify sample messages
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}
impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}
