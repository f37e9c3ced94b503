use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, next_token, unexpected},
        },
    },
};

/// Parses a primary expression.
///
/// Grammar: `primary := INT | STRING | ID | "(" expression ")"`
///
/// A parenthesised expression yields its inner node unchanged.
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start an expression or a
/// closing parenthesis is missing.
///
/// # Example
/// ```
/// use simplelang::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::primary::parse_primary},
///     util::position::Position,
/// };
///
/// let tokens = tokenize("(count)").unwrap();
/// let expr = parse_primary(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(expr,
///            Expr::Variable { name:     "count".into(),
///                             position: Position::new(1, 2), });
/// ```
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = next_token(tokens, "an expression")?;
    let (token, position) = spanned;
    let position = *position;

    match token {
        Token::Integer(value) => Ok(Expr::IntegerLiteral { value: *value,
                                                           position }),
        Token::StringLiteral(raw) => Ok(Expr::StringLiteral { raw: raw.clone(),
                                                              position }),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                       position }),
        Token::LParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(inner)
        },
        _ => Err(unexpected("an expression", spanned)),
    }
}
