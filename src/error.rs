//! Error types for typesprint.
//!
//! Round operations are total and never fail; these cover the edges of the
//! program: reading settings, loading the word bank, and logging setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from underlying system calls.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file exists but is not valid JSON for [`crate::config::Config`].
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Settings parsed but cannot produce a playable round.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    /// Word bank missing or unusable.
    #[error("word bank error: {message}")]
    WordBank { message: String },

    /// Tracing subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
