//! Lexer module.
//!
//! The lexer is a deterministic finite automaton. Each state's transition
//! function lives in its own file:
//! - `core` - Lexer struct, the automaton loop, `Start`, `Simple` and `Error`
//! - `identifier` - `InIdentifier` and the reserved-word lookup
//! - `number` - `InNumber`
//! - `operator` - `InRelOp`, `InRelOpDouble` and `InSlash`
//! - `comment` - `InComment`

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;

use crate::token::Token;

/// States of the automaton. A state only lives for one `next_token` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Start,
    InIdentifier,
    InNumber,
    /// After one of `< > = !`.
    InRelOp,
    /// After a relational character followed by `=`.
    InRelOpDouble,
    /// After `/`.
    InSlash,
    InComment,
    /// Single-character operator or punctuation, accepted immediately.
    Simple,
    Error,
}

/// Outcome of one transition.
#[derive(Debug)]
pub(crate) enum Transition<'a> {
    Goto(State),
    Emit(Token<'a>),
}
