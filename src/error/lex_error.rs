use thiserror::Error;

use crate::util::position::Position;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token, including any non-ASCII character
    /// outside strings and comments.
    #[error("Error on {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A string literal whose closing quote is missing.
    #[error("Error on {position}: Unterminated string literal.")]
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// An integer literal that does not fit a 64-bit signed integer.
    #[error("Error on {position}: Integer literal {literal} is too large.")]
    IntegerTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Where in the source the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::IntegerTooLarge { position, .. } => *position,
        }
    }
}
