use thiserror::Error;

use crate::{ast::ValueType, util::position::Position};

/// Represents all errors that can occur during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A name was declared twice in the same scope.
    #[error("Error on {position}: Variable '{name}' is already declared in this scope.")]
    DuplicateDeclaration {
        /// The name of the variable.
        name:     String,
        /// Position of the second declaration.
        position: Position,
    },
    /// Tried to use a variable that no enclosing scope declares.
    #[error("Error on {position}: Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the reference.
        position: Position,
    },
    /// The initializer of a declaration produced a value of the wrong type.
    #[error("Error on {position}: Type error: variable '{name}' is declared as {declared} but \
             was given {found}.")]
    DeclarationTypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The type written in the declaration.
        declared: ValueType,
        /// The type of the initializer's value.
        found:    ValueType,
        /// Position of the declaration.
        position: Position,
    },
    /// An operator was applied to operand types it does not support.
    #[error("Error on {position}: Type error: '{operator}' cannot be applied to {left} and \
             {right}.")]
    InvalidOperands {
        /// The operator as written in the source.
        operator: &'static str,
        /// Type of the left operand.
        left:     ValueType,
        /// Type of the right operand.
        right:    ValueType,
        /// Position of the operation.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("Error on {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the division.
        position: Position,
    },
    /// An integer operation left the 64-bit range.
    #[error("Error on {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Position of the operation.
        position: Position,
    },
}

/// Broad classes of runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// See [`RuntimeError::DuplicateDeclaration`].
    DuplicateDeclaration,
    /// See [`RuntimeError::UndefinedVariable`].
    UndefinedVariable,
    /// Declared-type mismatches and invalid operand types.
    Type,
    /// Division by zero and overflow.
    Arithmetic,
}

impl RuntimeError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use simplelang::{
    ///     error::{RuntimeError, RuntimeErrorKind},
    ///     util::position::Position,
    /// };
    ///
    /// let error = RuntimeError::DivisionByZero { position: Position::new(1, 9) };
    /// assert_eq!(error.kind(), RuntimeErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> RuntimeErrorKind {
        match self {
            Self::DuplicateDeclaration { .. } => RuntimeErrorKind::DuplicateDeclaration,
            Self::UndefinedVariable { .. } => RuntimeErrorKind::UndefinedVariable,
            Self::DeclarationTypeMismatch { .. } | Self::InvalidOperands { .. } => {
                RuntimeErrorKind::Type
            },
            Self::DivisionByZero { .. } | Self::Overflow { .. } => RuntimeErrorKind::Arithmetic,
        }
    }

    /// Where in the source the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DuplicateDeclaration { position, .. }
            | Self::UndefinedVariable { position, .. }
            | Self::DeclarationTypeMismatch { position, .. }
            | Self::InvalidOperands { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position } => *position,
        }
    }
}
