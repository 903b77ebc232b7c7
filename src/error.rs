use thiserror::Error;

/// Errors raised while building a chord configuration.
///
/// Chord accumulation itself never fails; only the inputs a host supplies
/// before activation can be rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dot index {0} is outside 1..=8")]
    InvalidDot(u8),

    #[error("key binding {0:?} must be exactly one character")]
    InvalidKey(String),

    #[error("whitespace {0:?} cannot be bound to a dot")]
    WhitespaceKey(char),

    #[error("dot delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelay(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
