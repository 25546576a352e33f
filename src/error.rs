use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of a single rate fetch.
///
/// The display text is appended to the chat reply, so it is written for the
/// office's customers rather than for operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("сетевая ошибка: {0}")]
    Network(String),

    #[error("некорректные данные курса: {0}")]
    Parse(String),

    #[error("курс USDT/RUB недоступен")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("telegram error: {0}")]
    Telegram(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
