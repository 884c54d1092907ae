//! Lexical error types.
//!
//! [`Lexer::next_token`](crate::Lexer::next_token) reports errors in-band as
//! [`TokenKind::Error`](crate::TokenKind::Error) tokens. This module gives
//! the same two conditions a typed form for callers that collect the whole
//! stream with [`Lexer::tokenize`](crate::Lexer::tokenize).

use thiserror::Error;

/// A fatal lexical error. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token, or a `!` not followed by `=`.
    #[error("unexpected character '{lexeme}' at byte {offset}")]
    UnexpectedCharacter {
        /// The offending source text.
        lexeme: String,
        /// Byte offset where it starts.
        offset: usize,
    },

    /// End of input reached inside a `/* ... */` comment.
    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the opening `/*`.
        offset: usize,
    },
}

impl LexError {
    /// Byte offset of the token that failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. } | Self::UnterminatedComment { offset } => {
                *offset
            }
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_character_display() {
        let err = LexError::UnexpectedCharacter {
            lexeme: "@".to_string(),
            offset: 4,
        };
        assert_eq!(err.to_string(), "unexpected character '@' at byte 4");
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn test_unterminated_comment_display() {
        let err = LexError::UnterminatedComment { offset: 0 };
        assert_eq!(
            err.to_string(),
            "unterminated block comment starting at byte 0"
        );
    }
}
