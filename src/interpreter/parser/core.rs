use std::iter::Peekable;

use crate::{
    ast::{Condition, Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            binary::{parse_additive, token_to_comparison_operator},
            statement::parse_statement,
            utils::{next_token, skip_newlines, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a [`Program`].
///
/// Grammar: `program := NEWLINE* (statement NEWLINE*)* EOF`
///
/// Parsing stops at the first [`Token::Eof`].
///
/// # Errors
/// Returns the first `ParseError` met; no recovery is attempted.
///
/// # Example
/// ```
/// use simplelang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("number x = 1\nprint x + 2\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[SpannedToken]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    skip_newlines(&mut iter);
    while let Some((token, _)) = iter.peek() {
        if *token == Token::Eof {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
        skip_newlines(&mut iter);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_additive(tokens)
}

/// Parses the condition of an `if` statement.
///
/// Grammar: `condition := expression comp_op expression`
///
/// A condition is exactly one comparison; a second comparison operator after
/// the right-hand side is left for the caller, which will reject it.
///
/// # Errors
/// Returns a `ParseError` if either side fails to parse or no comparison
/// operator follows the left-hand side.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a SpannedToken>
{
    let left = parse_expression(tokens)?;

    let spanned = next_token(tokens, "a comparison operator")?;
    let Some(op) = token_to_comparison_operator(&spanned.0) else {
        return Err(unexpected("a comparison operator", spanned));
    };

    let right = parse_expression(tokens)?;

    Ok(Condition { left,
                   op,
                   right,
                   position: spanned.1 })
}
