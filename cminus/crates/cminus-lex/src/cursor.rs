//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which reads the source one
//! character at a time and can give back the last character it read. The
//! lexer's automaton reads one character past the end of most lexemes and
//! uses that single-step pushback to return it to the stream.

/// A read cursor over a source buffer with single-step pushback.
///
/// The end of the slice is the end-of-input sentinel: reading there returns
/// `None` and does not move the cursor, so the position never exceeds the
/// buffer length.
///
/// # Example
///
/// ```
/// use cminus_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.bump(), Some('a'));
/// assert_eq!(cursor.bump(), Some('b'));
/// cursor.pushback();
/// assert_eq!(cursor.bump(), Some('b'));
/// assert_eq!(cursor.bump(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Byte length of the last character returned by `bump`, while it can
    /// still be pushed back.
    last_len: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            last_len: None,
        }
    }

    /// Returns the character under the cursor without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use cminus_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("*/");
    /// assert_eq!(cursor.peek(), Some('*'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        // Fast path for ASCII (every valid C- character)
        if b < 128 {
            return Some(b as char);
        }
        self.source[self.position..].chars().next()
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `None` at end of input; the cursor stays where it is and no
    /// pushback is armed.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        match self.peek() {
            Some(c) => {
                let len = c.len_utf8();
                self.position += len;
                self.last_len = Some(len);
                Some(c)
            }
            None => {
                self.last_len = None;
                None
            }
        }
    }

    /// Gives back the character returned by the last `bump`.
    ///
    /// Only one step is remembered: a second call without an intervening
    /// successful `bump` does nothing, as does a call after `bump` returned
    /// `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use cminus_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("xy");
    /// cursor.bump();
    /// cursor.bump();
    /// cursor.pushback();
    /// cursor.pushback();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn pushback(&mut self) {
        if let Some(len) = self.last_len.take() {
            self.position -= len;
        }
    }

    /// Returns true if a pushback is currently possible.
    pub fn can_pushback(&self) -> bool {
        self.last_len.is_some()
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cminus_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("int x");
    /// let start = cursor.position();
    /// while cursor.bump().is_some_and(|c| c != ' ') {}
    /// cursor.pushback();
    /// assert_eq!(cursor.slice_from(start), "int");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
