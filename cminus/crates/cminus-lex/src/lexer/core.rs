//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the automaton loop that drives
//! every state transition, and the `Start`, `Simple` and `Error` states.

use std::iter::FusedIterator;

use crate::chars::{is_ident_start, is_relop_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::lexer::{State, Transition};
use crate::token::{Token, TokenKind, MAX_LEXEME_LEN, UNTERMINATED_COMMENT};

/// Lexer for the C- language.
///
/// The lexer owns a [`Cursor`] over a borrowed source buffer and produces one
/// token per [`next_token`](Lexer::next_token) call. A lexical error is fatal
/// to the stream: once an `Error` token has been produced, every later call
/// returns that same token.
///
/// # Example
///
/// ```
/// use cminus_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("int x = 10;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Int);
/// assert_eq!(lexer.next_token().lexeme, "x");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// The error token that ended the stream, if any.
    failed: Option<Token<'a>>,

    /// Set once the iterator has yielded its last item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            failed: None,
            exhausted: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Runs the automaton from `Start` until a state emits a token. Block
    /// comments loop back to `Start` without emitting. At end of input this
    /// keeps returning `EndOfFile` without moving the cursor.
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(token) = self.failed {
            return token;
        }

        let mut state = State::Start;
        loop {
            let transition = match state {
                State::Start => self.start(),
                State::InIdentifier => self.in_identifier(),
                State::InNumber => self.in_number(),
                State::InRelOp => self.in_relop(),
                State::InRelOpDouble => self.in_relop_double(),
                State::InSlash => self.in_slash(),
                State::InComment => self.in_comment(),
                State::Simple => self.simple(),
                State::Error => self.error(),
            };

            match transition {
                Transition::Goto(next) => state = next,
                Transition::Emit(token) => {
                    if token.is_error() {
                        self.failed = Some(token);
                    }
                    return token;
                }
            }
        }
    }

    /// Collects every token up to and including `EndOfFile`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error; no tokens are returned in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use cminus_lex::{Lexer, LexError, TokenKind};
    ///
    /// let tokens = Lexer::new("10/2").tokenize().unwrap();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::EndOfFile]
    /// );
    ///
    /// let err = Lexer::new("x @").tokenize().unwrap_err();
    /// assert!(matches!(err, LexError::UnexpectedCharacter { offset: 2, .. }));
    /// ```
    pub fn tokenize(mut self) -> LexResult<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            match token.kind {
                TokenKind::Error => return Err(lex_error(token, self.token_start)),
                TokenKind::EndOfFile => {
                    tokens.push(token);
                    return Ok(tokens);
                }
                _ => tokens.push(token),
            }
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns true once a lexical error has ended the stream.
    pub fn has_failed(&self) -> bool {
        self.failed.is_some()
    }

    /// Returns the error that ended the stream, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use cminus_lex::{Lexer, LexError};
    ///
    /// let mut lexer = Lexer::new("/* open");
    /// assert!(lexer.last_error().is_none());
    /// lexer.next_token();
    /// assert_eq!(lexer.last_error(), Some(LexError::UnterminatedComment { offset: 0 }));
    /// ```
    pub fn last_error(&self) -> Option<LexError> {
        self.failed.map(|token| lex_error(token, self.token_start))
    }

    /// `Start`: skip whitespace, then dispatch on the first character.
    fn start(&mut self) -> Transition<'a> {
        while self.cursor.peek().is_some_and(is_whitespace) {
            self.cursor.bump();
        }

        self.token_start = self.cursor.position();
        let Some(c) = self.cursor.bump() else {
            return Transition::Emit(Token::eof());
        };

        let next = match c {
            c if is_ident_start(c) => State::InIdentifier,
            c if c.is_ascii_digit() => State::InNumber,
            c if is_relop_start(c) => State::InRelOp,
            '/' => State::InSlash,
            c if TokenKind::from_simple_char(c).is_some() => State::Simple,
            _ => State::Error,
        };
        Transition::Goto(next)
    }

    /// `Simple`: the one consumed character is the whole token.
    fn simple(&mut self) -> Transition<'a> {
        let lexeme = self.lexeme();
        match lexeme.chars().next().and_then(TokenKind::from_simple_char) {
            Some(kind) => Transition::Emit(Token::new(kind, lexeme)),
            None => Transition::Goto(State::Error),
        }
    }

    /// `Error`: everything consumed for this token becomes the error lexeme.
    fn error(&mut self) -> Transition<'a> {
        let lexeme = self.lexeme();
        tracing::debug!(offset = self.token_start, lexeme, "unexpected character");
        Transition::Emit(Token::new(TokenKind::Error, lexeme))
    }

    /// Source text of the token being recognized.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Source text of the token being recognized, cut to `MAX_LEXEME_LEN`.
    pub(crate) fn bounded_lexeme(&self) -> &'a str {
        let text = self.lexeme();
        &text[..text.len().min(MAX_LEXEME_LEN)]
    }
}

fn lex_error(token: Token<'_>, offset: usize) -> LexError {
    if token.lexeme == UNTERMINATED_COMMENT {
        LexError::UnterminatedComment { offset }
    } else {
        LexError::UnexpectedCharacter {
            lexeme: token.lexeme.to_string(),
            offset,
        }
    }
}

/// Iterates over tokens, ending before `EndOfFile` and after an `Error`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        match token.kind {
            TokenKind::EndOfFile => {
                self.exhausted = true;
                None
            }
            TokenKind::Error => {
                self.exhausted = true;
                Some(token)
            }
            _ => Some(token),
        }
    }
}

impl FusedIterator for Lexer<'_> {}
