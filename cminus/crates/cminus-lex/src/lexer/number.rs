//! Number literal lexing.
//!
//! C- only has unsigned decimal integers: a maximal run of ASCII digits.

use crate::lexer::{State, Transition};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `InNumber`: consume digits, push back the first non-digit.
    pub(crate) fn in_number(&mut self) -> Transition<'a> {
        match self.cursor.bump() {
            Some(c) if c.is_ascii_digit() => Transition::Goto(State::InNumber),
            _ => {
                self.cursor.pushback();
                Transition::Emit(Token::new(TokenKind::Number, self.bounded_lexeme()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, MAX_LEXEME_LEN};
    use crate::Lexer;

    #[test]
    fn test_single_digit() {
        assert_eq!(Lexer::new("0").next_token(), Token::new(TokenKind::Number, "0"));
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(
            Lexer::new("007").next_token(),
            Token::new(TokenKind::Number, "007")
        );
    }

    #[test]
    fn test_number_followed_by_letters() {
        let mut lexer = Lexer::new("12abc");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Number, "12"));
        assert_eq!(
            lexer.next_token(),
            Token::new(TokenKind::Identifier, "abc")
        );
    }

    #[test]
    fn test_no_decimal_point() {
        let mut lexer = Lexer::new("3.14");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Number, "3"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Error, "."));
    }

    #[test]
    fn test_minus_is_not_a_sign() {
        let mut lexer = Lexer::new("-5");
        assert_eq!(lexer.next_token().kind, TokenKind::Minus);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Number, "5"));
    }

    #[test]
    fn test_long_number_is_truncated() {
        let digits = "9".repeat(MAX_LEXEME_LEN * 2);
        let mut lexer = Lexer::new(&digits);
        let token = lexer.next_token();
        assert_eq!(token.lexeme, &digits[..MAX_LEXEME_LEN]);
        assert!(lexer.next_token().is_eof());
    }
}
