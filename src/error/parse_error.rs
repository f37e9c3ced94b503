use thiserror::Error;

use crate::util::position::Position;

/// Represents all errors that can occur during parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Error on {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Error on {position}: Expected {expected}, but the input ended.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The end-of-input position.
        position: Position,
    },
}

impl ParseError {
    /// Where in the source the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. } => *position,
        }
    }

    /// What the parser expected to find.
    #[must_use]
    pub fn expected(&self) -> &str {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                expected
            },
        }
    }
}
