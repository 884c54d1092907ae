//! Comment lexing.
//!
//! This module handles the `InComment` state. Block comments do not nest and
//! produce no token; the automaton returns to `Start` after the closing `*/`.

use crate::lexer::{State, Transition};
use crate::token::{Token, TokenKind, UNTERMINATED_COMMENT};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `InComment`: consume until `*/`.
    ///
    /// After a `*` the next character is peeked, not consumed, so `**/`
    /// still closes the comment. End of input here is fatal.
    pub(crate) fn in_comment(&mut self) -> Transition<'a> {
        match self.cursor.bump() {
            None => {
                tracing::debug!(offset = self.token_start, "unterminated block comment");
                Transition::Emit(Token::new(TokenKind::Error, UNTERMINATED_COMMENT))
            }
            Some('*') if self.cursor.peek() == Some('/') => {
                self.cursor.bump();
                tracing::trace!(
                    start = self.token_start,
                    end = self.cursor.position(),
                    "skipped block comment"
                );
                Transition::Goto(State::Start)
            }
            Some(_) => Transition::Goto(State::InComment),
        }
    }
}
