//! Error types for startup and configuration
//!
//! Navigation and the demo sequencer never fail: invalid requests are
//! silent no-ops. Everything in [`DeckError`] happens before the first frame
//! is drawn (bad config, unreadable files, terminal setup).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bootstrapping the deck
#[derive(Debug, Error)]
pub enum DeckError {
    /// Terminal or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A config value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tracing subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
