/// Parser entry points.
///
/// Defines `ParseResult`, the whole-program parser and the expression and
/// condition entry points the other parser modules build on.
pub mod core;

/// Binary expression parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative, and maps operator tokens to AST operators.
pub mod binary;

/// Primary expressions.
///
/// Parses literals, variable references and parenthesised sub-expressions.
pub mod primary;

/// Block parsing.
///
/// Handles `{ ... }` statement sequences used by `if` and `else`.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading keyword to variable declarations, `print` and
/// `if` statements.
pub mod statement;

/// Parser utilities.
///
/// Helper functions for consuming expected tokens, skipping line breaks and
/// building error values.
pub mod utils;
