use std::fmt;
use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "NAIVE_BAYES";

#[derive(Debug, Clone, Hash, Deserialize)]
pub struct CorpusConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Hash, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Hash, Deserialize)]
pub struct TrainingConfig {
    pub show_progress: bool,
}

#[derive(Clone, Hash, Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Hash, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub model: ModelConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}
impl Config {
    /// Load `config.*` from the working directory if present.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_FILE, false)
    }

    /// Load an explicit configuration file, which must exist.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(path, true)
    }

    fn load(path: &str, required: bool) -> Result<Self, ConfigError> {
        let mut builder: ConfigBuilder<DefaultState> = ConfigBuilder::default()
            .set_default("corpus.path", "training.dat")?
            .set_default("model.path", "naive_bayes_model.json")?
            .set_default("training.show_progress", true)?
            .set_default("logging.level", "info")?;

        builder = builder.add_source(File::with_name(path).required(required));

        // NAIVE_BAYES__MODEL__PATH=... overrides model.path
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "corpus={} model={} log={}",
            self.corpus.path.display(),
            self.model.path.display(),
            self.logging.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[model]\npath = \"spam.json\"\n\n[logging]\nlevel = \"debug\"").unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.model.path, PathBuf::from("spam.json"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.corpus.path, PathBuf::from("training.dat"));
        assert!(config.training.show_progress);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/naive_bayes_config.toml").is_err());
    }
}
