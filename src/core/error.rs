//! Custom error types for the Pokedex CLI
//!
//! Provides a unified error handling system across all modules.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for Pokedex operations
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request could not be sent or the connection failed
    #[error("error getting location areas from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered outside the 2xx range
    #[error("bad status: {0}")]
    HttpStatus(StatusCode),

    /// Reading the response body failed mid-stream
    #[error("error reading response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not a valid location-area page
    #[error("error decoding location areas: {0}")]
    Decode(#[from] serde_json::Error),

    /// No command registered under this name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Pokedex operations
pub type Result<T> = std::result::Result<T, PokedexError>;

impl PokedexError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
