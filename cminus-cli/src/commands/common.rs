//! Common types and utilities for cminus commands.
//!
//! This module provides shared types and helpers used by every command:
//! reading sources, running the lexer to its first terminal token, and
//! turning byte offsets into `line:column` locations.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use cminus_lex::{LexError, Lexer, Token};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two aligned columns, `KIND | LEXEME`, under a header
    #[default]
    Table,
    /// One `KIND LEXEME` pair per line
    Plain,
    /// A pretty-printed JSON array with one report per input
    Json,
}

// ============================================================================
// Sources
// ============================================================================

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// A source text together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File path, or [`STDIN_NAME`].
    pub name: String,
    /// Full source text.
    pub text: String,
}

impl SourceFile {
    /// Creates a source from an in-memory string.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads a source file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the
    /// lexer reports as an unexpected character.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source");
        Ok(Self::new(
            path.display().to_string(),
            String::from_utf8_lossy(&bytes),
        ))
    }

    /// Reads all of standard input.
    pub fn stdin() -> Result<Self> {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        Ok(Self::new(STDIN_NAME, String::from_utf8_lossy(&bytes)))
    }

    /// Returns the `name:line:column` location of a byte offset.
    pub fn location(&self, offset: usize) -> String {
        let (line, column) = line_col(&self.text, offset);
        format!("{}:{}:{}", self.name, line, column)
    }

    /// Wraps a lexical error with this source's location information.
    pub fn located(&self, error: LexError) -> CliError {
        CliError::Lex {
            location: self.location(error.offset()),
            source: error,
        }
    }
}

/// Reads every path in order, or standard input when `paths` is empty.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    if paths.is_empty() {
        return Ok(vec![SourceFile::stdin()?]);
    }
    paths.iter().map(|path| SourceFile::read(path)).collect()
}

/// Returns the 1-based line and column (in characters) of a byte offset.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

// ============================================================================
// Scanning
// ============================================================================

/// The tokens of one source, up to and including the terminal token.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    /// Every token produced; the last is `EndOfFile` or `Error`.
    pub tokens: Vec<Token<'a>>,
    /// The error that ended the stream, if it did not reach end of input.
    pub error: Option<LexError>,
}

impl Scan<'_> {
    /// Number of tokens excluding the terminal `EndOfFile`.
    pub fn token_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_eof()).count()
    }
}

/// Runs the lexer until it reaches end of input or its first error.
pub fn scan(text: &str) -> Scan<'_> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() || token.is_error() {
            break;
        }
    }
    Scan {
        tokens,
        error: lexer.last_error(),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when a command that needs files got none.
    pub const NO_INPUT_FILES: &str = "No input files specified";
}
