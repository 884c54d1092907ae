//! Identifier and keyword lexing.
//!
//! This module handles the `InIdentifier` state and the reserved-word lookup
//! that classifies a finished identifier.

use crate::chars::is_ident_continue;
use crate::lexer::{State, Transition};
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `InIdentifier`: consume `[A-Za-z0-9_]`, then classify.
    ///
    /// The first character outside the class belongs to the next token and
    /// is pushed back. The lexeme is bounded by `MAX_LEXEME_LEN`; the
    /// keyword lookup sees the bounded text.
    pub(crate) fn in_identifier(&mut self) -> Transition<'a> {
        match self.cursor.bump() {
            Some(c) if is_ident_continue(c) => Transition::Goto(State::InIdentifier),
            _ => {
                self.cursor.pushback();
                let text = self.bounded_lexeme();
                let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
                Transition::Emit(Token::new(kind, text))
            }
        }
    }
}
