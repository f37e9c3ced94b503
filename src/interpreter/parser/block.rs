use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_newlines, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Parsing continues until a closing `}` token is encountered.
/// Leading and trailing newlines inside the block are ignored.
///
/// Grammar: `block := "{" NEWLINE* (statement NEWLINE*)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The block with all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement is
/// malformed, or the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a SpannedToken>
{
    let position = expect(tokens, &Token::LBrace, "'{'")?;
    let mut statements = Vec::new();

    skip_newlines(tokens);
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(spanned) if spanned.0 == Token::Eof => return Err(unexpected("'}'", spanned)),
            _ => {},
        }

        statements.push(parse_statement(tokens)?);
        skip_newlines(tokens);
    }

    Ok(Block { statements,
               position })
}
