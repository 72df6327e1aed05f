use tracing::span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Info,
    Debug,
    Warn,
    Error,
}
impl LogLevel {
    pub fn to_log_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }

    /// Unknown names fall back to `Info`.
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}
impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

const SPAN_NAME: &str = "training";
pub struct Logger;

impl Logger {
    /// Initialize the logger. Logs go to stderr so stdout only carries results.
    pub fn init(level: LogLevel) {
        // A second init (e.g. from tests) keeps the first subscriber.
        let _ = tracing_subscriber::fmt()
            .with_max_level(level.to_log_level())
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn with_span<T>(f: impl FnOnce() -> T) -> T {
        let span = span!(tracing::Level::INFO, SPAN_NAME);
        let _guard = span.enter();
        f()
    }
}

pub fn setup_logger(level: &str) {
    Logger::init(LogLevel::from_str(level));
}
