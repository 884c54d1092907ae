//! Operator lexing.
//!
//! This module handles the states that need one character of lookahead:
//! relational operators and assignment (`< <= > >= = == !=`) and the
//! division operator, which shares its first character with a comment opener.

use crate::lexer::{State, Transition};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `InRelOp`: after one of `< > = !`.
    ///
    /// A following `=` moves on to the two-character state. Otherwise the
    /// lookahead is pushed back and the single character is classified. `!`
    /// has no single-character meaning and goes to `Error`.
    pub(crate) fn in_relop(&mut self) -> Transition<'a> {
        if self.cursor.bump() == Some('=') {
            return Transition::Goto(State::InRelOpDouble);
        }
        self.cursor.pushback();

        let lexeme = self.lexeme();
        let kind = match lexeme {
            "<" => TokenKind::Less,
            ">" => TokenKind::Greater,
            "=" => TokenKind::Assign,
            _ => return Transition::Goto(State::Error),
        };
        Transition::Emit(Token::new(kind, lexeme))
    }

    /// `InRelOpDouble`: exactly two characters have been consumed.
    ///
    /// The character read while testing this transition is pushed back
    /// before the token is returned.
    pub(crate) fn in_relop_double(&mut self) -> Transition<'a> {
        self.cursor.bump();
        self.cursor.pushback();

        let lexeme = self.lexeme();
        let kind = match lexeme {
            "<=" => TokenKind::LessEqual,
            ">=" => TokenKind::GreaterEqual,
            "==" => TokenKind::EqualEqual,
            "!=" => TokenKind::NotEqual,
            _ => return Transition::Goto(State::Error),
        };
        Transition::Emit(Token::new(kind, lexeme))
    }

    /// `InSlash`: `*` opens a comment, anything else makes `/` a division.
    pub(crate) fn in_slash(&mut self) -> Transition<'a> {
        if self.cursor.bump() == Some('*') {
            return Transition::Goto(State::InComment);
        }
        self.cursor.pushback();
        Transition::Emit(Token::new(TokenKind::Slash, self.lexeme()))
    }
}
