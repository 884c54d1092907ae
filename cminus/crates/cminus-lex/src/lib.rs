//! cminus-lex - Lexical Analyzer for the C- Teaching Language
//!
//! This crate turns C- source text into a stream of classified tokens,
//! discarding whitespace and `/* ... */` comments. Recognition is driven by a
//! small deterministic finite automaton with one character of lookahead and
//! single-step pushback.
//!
//! # Example Usage
//!
//! ```
//! use cminus_lex::{Lexer, TokenKind};
//!
//! let source = "int x = 10;";
//!
//! // Iterate through tokens (stops before end of input)
//! for token in Lexer::new(source) {
//!     println!("{:<16} {}", token.kind, token.lexeme);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the reserved-word table
//! - [`lexer`] - The automaton
//! - [`cursor`] - Character cursor with pushback
//! - [`chars`] - Character classes
//! - [`error`] - Typed lexical errors
//!
//! # Token Categories
//!
//! **Keywords**: `if`, `else`, `int`, `return`, `void`, `while`
//!
//! **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! **Numbers**: `[0-9]+`
//!
//! **Operators**: `+ - * / < <= > >= == != =`
//!
//! **Punctuation**: `; , ( ) [ ] { }`
//!
//! Any other character, a `!` not followed by `=`, or an unclosed comment
//! produces an `Error` token and ends the stream.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS, MAX_LEXEME_LEN};
