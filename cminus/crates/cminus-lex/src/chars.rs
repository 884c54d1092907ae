//! Character classes used by the lexer's automaton.
//!
//! C- source is ASCII. Anything outside these classes drives the automaton
//! to its error state.

/// Checks if a character is skipped between tokens.
///
/// This is the C `isspace` set: space, tab, newline, vertical tab, form feed
/// and carriage return.
///
/// # Example
///
/// ```
/// use cminus_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use cminus_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character opens a relational or assignment operator.
pub fn is_relop_start(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '!')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\n', '\r', '\x0B', '\x0C'] {
            assert!(is_whitespace(c), "{:?} should be whitespace", c);
        }
        for c in ['a', '0', '\0', '\u{2003}'] {
            assert!(!is_whitespace(c), "{:?} should not be whitespace", c);
        }
    }

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('Z'));
        assert!(!is_ident_start('9'));
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('_'));
        assert!(!is_ident_continue('-'));
        assert!(!is_ident_continue('é'));
    }

    #[test]
    fn test_relop_start() {
        for c in ['<', '>', '=', '!'] {
            assert!(is_relop_start(c));
        }
        assert!(!is_relop_start('/'));
    }
}
