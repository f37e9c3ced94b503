/// Core evaluation logic and context management.
///
/// Contains the evaluation context, expression dispatch and statement
/// execution.
pub mod core;

/// Arithmetic operator evaluation.
///
/// Implements `+`, `-`, `*` and `/` on integers and concatenation on text.
pub mod arithmetic;

/// Comparison evaluation.
///
/// Evaluates the single comparison of an `if` condition.
pub mod comparison;

/// Block and conditional evaluation.
///
/// Runs blocks inside their own scope and picks the branch of an `if`.
pub mod block;

/// Print side effects.
pub mod print;
