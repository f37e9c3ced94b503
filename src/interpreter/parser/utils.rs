use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::core::ParseResult,
    },
    util::position::Position,
};

/// Builds the error for finding `spanned` where `expected` was required.
///
/// Running into [`Token::Eof`] yields `UnexpectedEndOfInput`, any other token
/// yields `UnexpectedToken`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 spanned: &SpannedToken)
                                                 -> ParseError {
    let (token, position) = spanned;
    match token {
        Token::Eof => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                         position: *position, },
        _ => ParseError::UnexpectedToken { expected: expected.to_string(),
                                           found:    token.to_string(),
                                           position: *position, },
    }
}

/// Consumes the next token.
///
/// A token stream produced by the lexer always ends with `Eof`, so running
/// out of tokens only happens for hand-built streams; it is reported as an
/// unexpected end of input.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseResult<&'a SpannedToken>
    where I: Iterator<Item = &'a SpannedToken>
{
    tokens.next()
          .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                            position: Position::default(), })
}

/// Consumes the next token, which must equal `wanted`, and returns its
/// position.
///
/// # Errors
/// Returns a `ParseError` naming `expected` if any other token is found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    wanted: &Token,
                                                    expected: &str)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = next_token(tokens, expected)?;
    if &spanned.0 == wanted {
        Ok(spanned.1)
    } else {
        Err(unexpected(expected, spanned))
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a SpannedToken>
{
    match next_token(tokens, "an identifier")? {
        (Token::Identifier(name), position) => Ok((name.clone(), *position)),
        other => Err(unexpected("an identifier", other)),
    }
}

/// Discards any line breaks at the front of the stream.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a SpannedToken>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}
