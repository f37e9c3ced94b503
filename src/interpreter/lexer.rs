use std::fmt;

use logos::Logos;

use crate::{error::LexError, util::position::Position};

/// A token paired with the position of its first character.
pub type SpannedToken = (Token, Position);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
pub enum Token {
    /// `number`
    #[token("number")]
    Number,
    /// `text`
    #[token("text")]
    Text,
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable names such as `x` or `total_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. Holds the raw text between the quotes; escapes
    /// are resolved when the literal is evaluated.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, parse_string, allow_greedy = true)]
    StringLiteral(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Line breaks. Runs of them are collapsed by [`tokenize`].
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and stray carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the lexer itself; [`tokenize`] appends
    /// it after the last real token.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "'number'"),
            Self::Text => write!(f, "'text'"),
            Self::Print => write!(f, "'print'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Integer(value) => write!(f, "integer {value}"),
            Self::StringLiteral(raw) => write!(f, "string \"{raw}\""),
            Self::Comment => write!(f, "comment"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::NewLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so token columns can be computed for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// The reason `logos` gave up on a slice of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No token rule matched.
    #[default]
    Unrecognized,
    /// A run of digits that does not fit an `i64`.
    IntegerTooLarge,
}

/// Converts source text into tokens.
///
/// Whitespace and `//` comments are dropped, consecutive line breaks collapse
/// into a single [`Token::NewLine`], and the result always ends with exactly
/// one [`Token::Eof`].
///
/// # Errors
/// Returns a [`LexError`] at the first character that starts no valid token,
/// at the opening quote of an unterminated string, or at an integer literal
/// too large for `i64`.
///
/// # Example
/// ```
/// use simplelang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("number x = 5\n\n\nprint x").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number,
///                 Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Integer(5),
///                 Token::NewLine,
///                 Token::Print,
///                 Token::Identifier("x".into()),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());
    let mut tokens: Vec<SpannedToken> = Vec::new();

    loop {
        // Skipped input never touches the extras, so these still describe the
        // line the next token starts on.
        let line = lexer.extras.line;
        let line_start = lexer.extras.line_start;

        let Some(token) = lexer.next() else {
            break;
        };
        let position = Position::new(line, column_at(source, line_start, lexer.span().start));

        match token {
            Ok(Token::NewLine) if matches!(tokens.last(), Some((Token::NewLine, _))) => {},
            Ok(token) => tokens.push((token, position)),
            Err(failure) => return Err(lex_error(failure, lexer.slice(), position)),
        }
    }

    let end = Position::new(lexer.extras.line,
                            column_at(source, lexer.extras.line_start, source.len()));
    tokens.push((Token::Eof, end));

    Ok(tokens)
}

fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(1, |prefix| prefix.chars().count() + 1)
}

fn lex_error(failure: LexFailure, slice: &str, position: Position) -> LexError {
    match failure {
        LexFailure::IntegerTooLarge => LexError::IntegerTooLarge { literal: slice.to_string(),
                                                                   position },
        LexFailure::Unrecognized => match slice.chars().next() {
            Some('"') => LexError::UnterminatedString { position },
            Some(character) => LexError::UnrecognizedCharacter { character, position },
            None => LexError::UnrecognizedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                      position },
        },
    }
}

/// Parses an integer literal from the current token slice.
///
/// Fails with [`LexFailure::IntegerTooLarge`] when the digits do not fit an
/// `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice()
       .parse()
       .map_err(|_| LexFailure::IntegerTooLarge)
}

/// Strips the quotes from a string literal and keeps line tracking correct
/// for literals that span several lines.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = slice[1..slice.len() - 1].to_string();
    let newlines = slice.matches('\n').count();

    if let Some(last_newline) = slice.rfind('\n') {
        let start = lex.span().start;
        lex.extras.line += newlines;
        lex.extras.line_start = start + last_newline + 1;
    }

    body
}
