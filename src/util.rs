/// Source positions.
///
/// Defines the `Position` type attached to every token, AST node and error so
/// that diagnostics can point at the exact line and column of a failure.
pub mod position;
