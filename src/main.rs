use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use rs_naive_bayes::config::Config;
use rs_naive_bayes::corpus::{sample_corpus, CorpusStore};
use rs_naive_bayes::logging::{setup_logger, Logger};
use rs_naive_bayes::options::{Command, Options, OutputFormat};
use rs_naive_bayes::{NaiveBayes, Trainer};

const DEMO_MESSAGES: &[&str] = &[
    "Buy cheap viagra tickets",
    "Hello friend how are you",
    "Dhaka is a big city",
];

fn main() -> Result<()> {
    let options = Options::parse();

    let config = match &options.config {
        Some(path) => Config::from_file(path),
        None => Config::new(),
    }
    .context("Failed to load configuration")?;

    setup_logger(options.log_level.as_deref().unwrap_or(&config.logging.level));
    info!(%config, "Configuration loaded");

    let store = CorpusStore::new(&config.corpus.path);
    let trainer = Trainer::new().show_progress(config.training.show_progress);

    match options.command {
        Command::Add { label, text } => {
            let text = text.join(" ");
            store
                .append(&text, &label)
                .with_context(|| format!("Failed to add example to {}", store.path().display()))?;
            println!("Added {} example to {}", label, store.path().display());
        }
        Command::Train => {
            let nb = train_from_store(&store, &trainer)?;
            nb.save_to_file(&config.model.path)
                .with_context(|| format!("Failed to save model to {}", config.model.path.display()))?;

            let model = nb.model();
            println!(
                "Trained on {} documents, {} classes, vocabulary of {}",
                model.total_documents(),
                model.num_classes(),
                model.vocabulary_size()
            );
            for class in model.classes() {
                println!(
                    "  {}: {} documents, prior {:.4}, presence total {}",
                    class,
                    model.class_count(class).unwrap_or(0),
                    model.class_prior(class).unwrap_or(0.0),
                    model.class_token_total(class).unwrap_or(0)
                );
            }
            println!("Model saved to {}", config.model.path.display());
        }
        Command::Classify { format, retrain, text } => {
            debug!(%format, retrain, "Classifying message");
            let nb = if retrain {
                train_from_store(&store, &trainer)?
            } else {
                NaiveBayes::load_from_file(&config.model.path).with_context(|| {
                    format!(
                        "Failed to load model from {} (run `train` first or pass --retrain)",
                        config.model.path.display()
                    )
                })?
            };

            let result = nb.classify_with_scores(&text.join(" "))?;
            match format {
                OutputFormat::Plain => println!("{}", result.label),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Demo => {
            let nb = NaiveBayes::train_with(&trainer, &sample_corpus())?;
            for message in DEMO_MESSAGES {
                let label = nb.classify(message)?;
                println!("Your message \"{}\" is {}", message, label);
            }
        }
    }

    Ok(())
}

fn train_from_store(store: &CorpusStore, trainer: &Trainer) -> Result<NaiveBayes> {
    let corpus = store
        .load()
        .with_context(|| format!("Failed to read corpus {}", store.path().display()))?;
    let nb = Logger::with_span(|| NaiveBayes::train_with(trainer, &corpus))?;
    Ok(nb)
}
