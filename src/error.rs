/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: stray
/// characters, unterminated strings and oversized integer literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens and missing closing braces.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include duplicate declarations, unknown variables, type mismatches
/// and arithmetic failures such as division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

/// Any failure produced while running a script.
///
/// Every stage reports through its own error type; this enum lets the entry
/// points return them through a single `Result`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
