//! Error types for the dice engine.

use std::path::PathBuf;

/// Errors that can occur while building dice sets or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// Raw dice input has the wrong length or a value outside 1..=6.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A roller configuration value is out of bounds.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadConfig {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
