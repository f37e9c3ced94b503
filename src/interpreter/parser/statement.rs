use std::iter::Peekable;

use crate::{
    ast::{Statement, ValueType},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_condition, parse_expression},
            utils::{expect, next_token, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the production:
/// - `number` / `text` start a variable declaration,
/// - `print` starts a print statement,
/// - `if` starts a conditional.
///
/// Trailing line breaks are left for the caller to skip.
///
/// # Errors
/// Returns a `ParseError` expecting "a statement" for any other leading
/// token, or whatever error the chosen production raises.
///
/// # Example
/// ```
/// use simplelang::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("print 1 + 2").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(statement, Statement::Print { .. }));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.peek() {
        Some((Token::Number | Token::Text, _)) => parse_variable_declaration(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        _ => {
            let spanned = next_token(tokens, "a statement")?;
            Err(unexpected("a statement", spanned))
        },
    }
}

/// Parses a variable declaration.
///
/// Grammar: `var_decl := ("number" | "text") ID "=" expression`
///
/// # Errors
/// Returns a `ParseError` if the name, the `=` or the initializer is missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = next_token(tokens, "'number' or 'text'")?;
    let declared_type = match spanned.0 {
        Token::Number => ValueType::Number,
        Token::Text => ValueType::Text,
        _ => return Err(unexpected("'number' or 'text'", spanned)),
    };

    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::VariableDeclaration { declared_type,
                                        name,
                                        value,
                                        position: spanned.1 })
}

/// Parses a print statement.
///
/// Grammar: `print_stmt := "print" expression`
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let position = expect(tokens, &Token::Print, "'print'")?;
    let expr = parse_expression(tokens)?;

    Ok(Statement::Print { expr, position })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Grammar: `if_stmt := "if" condition block ("else" block)?`
///
/// The `else` keyword must follow the closing brace of the first block on the
/// same line; a line break ends the statement.
///
/// # Errors
/// Returns a `ParseError` if the condition or either block is malformed.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let position = expect(tokens, &Token::If, "'if'")?;
    let condition = parse_condition(tokens)?;
    let then_block = parse_block(tokens)?;

    let else_block = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(parse_block(tokens)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       position })
}
