//! Token definitions for the C- language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the slice of source text it was
//! recognized from. Tokens borrow from the source buffer and are `Copy`.

use std::fmt;

/// Maximum number of bytes kept in an identifier or number lexeme.
///
/// Longer runs are consumed in full by the lexer but the lexeme is truncated
/// to this many bytes. Identifier and number characters are ASCII, so the
/// truncation always falls on a character boundary.
pub const MAX_LEXEME_LEN: usize = 100;

/// Lexeme carried by the [`TokenKind::EndOfFile`] token.
pub const EOF_LEXEME: &str = "EOF";

/// Lexeme carried by the error token produced for an unclosed block comment.
pub const UNTERMINATED_COMMENT: &str = "unterminated comment";

/// The closed set of token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unrecognized input or an unterminated comment.
    Error,
    /// End of input.
    EndOfFile,

    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// Unsigned decimal digit sequence.
    Number,

    // ===== Keywords =====
    /// `if`
    If,
    /// `else`
    Else,
    /// `int`
    Int,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `while`
    While,

    // ===== Arithmetic =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // ===== Relational and assignment =====
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
    /// `=`
    Assign,

    // ===== Punctuation =====
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
}

impl TokenKind {
    /// Stable upper-case name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::EndOfFile => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::If => "KW_IF",
            Self::Else => "KW_ELSE",
            Self::Int => "KW_INT",
            Self::Return => "KW_RETURN",
            Self::Void => "KW_VOID",
            Self::While => "KW_WHILE",
            Self::Plus => "OP_PLUS",
            Self::Minus => "OP_MINUS",
            Self::Star => "OP_STAR",
            Self::Slash => "OP_SLASH",
            Self::Less => "OP_LESS",
            Self::LessEqual => "OP_LESS_EQUAL",
            Self::Greater => "OP_GREATER",
            Self::GreaterEqual => "OP_GREATER_EQUAL",
            Self::EqualEqual => "OP_EQUAL_EQUAL",
            Self::NotEqual => "OP_NOT_EQUAL",
            Self::Assign => "OP_ASSIGN",
            Self::Semicolon => "SYM_SEMICOLON",
            Self::Comma => "SYM_COMMA",
            Self::LParen => "SYM_LPAREN",
            Self::RParen => "SYM_RPAREN",
            Self::LBracket => "SYM_LBRACKET",
            Self::RBracket => "SYM_RBRACKET",
            Self::LBrace => "SYM_LBRACE",
            Self::RBrace => "SYM_RBRACE",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If | Self::Else | Self::Int | Self::Return | Self::Void | Self::While
        )
    }

    /// Maps a single-character operator or punctuation symbol to its kind.
    ///
    /// Only the characters that the lexer accepts without lookahead are
    /// mapped; `<`, `>`, `=`, `!` and `/` need a second character and return
    /// `None` here.
    pub fn from_simple_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            ';' => Some(Self::Semicolon),
            ',' => Some(Self::Comma),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '[' => Some(Self::LBracket),
            ']' => Some(Self::RBracket),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words of the language, in no particular order.
pub const KEYWORDS: [(&str, TokenKind); 6] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("int", TokenKind::Int),
    ("return", TokenKind::Return),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
];

/// Looks up a fully matched identifier in the reserved-word table.
///
/// The match is exact and case-sensitive; prefixes do not count.
///
/// # Example
///
/// ```
/// use cminus_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilex"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == ident)
        .map(|&(_, kind)| kind)
}

/// A classified piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Category of the token.
    pub kind: TokenKind,
    /// Source text of the token, or a fixed diagnostic for some errors.
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token from its parts.
    pub fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        Self { kind, lexeme }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, EOF_LEXEME)
    }

    /// Returns true if this token ends the stream normally.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Returns true if this token reports a lexical error.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}
