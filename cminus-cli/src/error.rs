//! Error handling module for the cminus CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use cminus_lex::LexError;
use thiserror::Error;

/// Main error type for the cminus CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when the configuration cannot be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when command arguments are inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file cannot be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A lexical error, located as `path:line:column`.
    #[error("{location}: {source}")]
    Lex {
        /// Where the offending token starts.
        location: String,
        /// The error reported by the lexer.
        #[source]
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
