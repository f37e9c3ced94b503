//! # simplelang
//!
//! simplelang is an interpreter for SimpleLang, a tiny scripting language with
//! typed variable declarations, `print` and `if`/`else`. Source text is
//! tokenized, parsed into a syntax tree and evaluated by walking that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::{self, SpannedToken},
        parser::core::parse_program,
    },
};

pub use crate::interpreter::lexer::tokenize;

/// Defines the structure of parsed code.
///
/// This module declares the statement, block, condition and expression types
/// that represent a program as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every language construct.
/// - Attaches source positions to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a script.
/// Each error carries the source position of the failure so a caller can build
/// a diagnostic.
///
/// # Responsibilities
/// - Defines one error enum per stage plus a combined `Error`.
/// - Attaches positions and detailed messages for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by every stage, such as source positions.
pub mod util;

/// What a successful run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Every printed line, in program order.
    pub output:      Vec<String>,
    /// The environment after the last statement; only the root scope remains.
    pub environment: Environment,
}

/// Parses a token stream produced by [`tokenize`].
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a valid program.
///
/// # Example
/// ```
/// use simplelang::{parse, tokenize};
///
/// let program = parse(&tokenize("if 1 < 2 { print \"yes\" }").unwrap()).unwrap();
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse(tokens: &[SpannedToken]) -> Result<Program, ParseError> {
    parse_program(tokens)
}

/// Runs a script and returns its printed output and final environment.
///
/// The source is tokenized, parsed and evaluated in turn; the first error at
/// any stage aborts the run.
///
/// # Errors
/// Returns an [`Error`] wrapping the lexing, parsing or runtime failure.
///
/// # Examples
/// ```
/// use simplelang::run;
///
/// let source = "number x = 5\nnumber y = 3\nif x > y {\n  print \"bigger\"\n} else {\n  print \"smaller\"\n}\n";
/// let outcome = run(source).unwrap();
/// assert_eq!(outcome.output, vec!["bigger"]);
///
/// // 'z' is never declared.
/// assert!(run("print z").is_err());
/// ```
pub fn run(source: &str) -> Result<Outcome, Error> {
    execute(source, false)
}

/// Like [`run`], but with `echo` set every printed line is also written to
/// standard output as soon as it is produced, so lines printed before a
/// failure still reach the user.
///
/// # Errors
/// Returns an [`Error`] wrapping the lexing, parsing or runtime failure.
pub fn execute(source: &str, echo: bool) -> Result<Outcome, Error> {
    let tokens = lexer::tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut context = Context::new().with_echo(echo);
    context.eval_program(&program)?;

    let (output, environment) = context.into_parts();
    Ok(Outcome { output, environment })
}
