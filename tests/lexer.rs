use simplelang::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
    util::position::Position,
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

#[test]
fn keywords_take_priority_over_identifiers() {
    assert_eq!(kinds("number text print if else"),
               vec![Token::Number, Token::Text, Token::Print, Token::If, Token::Else, Token::Eof]);
    assert_eq!(kinds("numbers texty iffy _else"),
               vec![Token::Identifier("numbers".into()),
                    Token::Identifier("texty".into()),
                    Token::Identifier("iffy".into()),
                    Token::Identifier("_else".into()),
                    Token::Eof]);
}

#[test]
fn operators_match_longest_first() {
    assert_eq!(kinds("== != <= >= < > = + - * /"),
               vec![Token::EqualEqual,
                    Token::BangEqual,
                    Token::LessEqual,
                    Token::GreaterEqual,
                    Token::Less,
                    Token::Greater,
                    Token::Equals,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Eof]);
    assert_eq!(kinds("a<=b"),
               vec![Token::Identifier("a".into()),
                    Token::LessEqual,
                    Token::Identifier("b".into()),
                    Token::Eof]);
}

#[test]
fn literals_carry_their_values() {
    assert_eq!(kinds(r#"42 "hi \"there\"""#),
               vec![Token::Integer(42),
                    Token::StringLiteral(r#"hi \"there\""#.into()),
                    Token::Eof]);
}

#[test]
fn consecutive_newlines_collapse() {
    assert_eq!(kinds("print 1\n\n  \n// note\n\nprint 2\n"),
               vec![Token::Print,
                    Token::Integer(1),
                    Token::NewLine,
                    Token::Print,
                    Token::Integer(2),
                    Token::NewLine,
                    Token::Eof]);
}

#[test]
fn comments_and_whitespace_are_dropped() {
    assert_eq!(kinds("\t print 1 // trailing / comment == here"),
               vec![Token::Print, Token::Integer(1), Token::Eof]);
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("number x = 5\n  print x").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|(_, position)| *position).collect();

    assert_eq!(positions,
               vec![Position::new(1, 1),
                    Position::new(1, 8),
                    Position::new(1, 10),
                    Position::new(1, 12),
                    Position::new(1, 13),
                    Position::new(2, 3),
                    Position::new(2, 9),
                    Position::new(2, 10)]);
}

#[test]
fn multi_line_strings_keep_line_count() {
    let tokens = tokenize("print \"a\nb\"\nprint x").unwrap();
    let (last_print, position) = &tokens[3];

    assert_eq!(*last_print, Token::Print);
    assert_eq!(*position, Position::new(3, 1));
}

#[test]
fn escaped_line_break_stays_inside_string() {
    let tokens = tokenize("print \"a\\\nb\"\nprint x").unwrap();

    assert_eq!(tokens[1], (Token::StringLiteral("a\\\nb".into()), Position::new(1, 7)));
    assert_eq!(tokens[3], (Token::Print, Position::new(3, 1)));
}

#[test]
fn unrecognized_characters_are_errors() {
    assert_eq!(tokenize("print 1 $ 2"),
               Err(LexError::UnrecognizedCharacter { character: '$',
                                                     position:  Position::new(1, 9), }));
    assert!(matches!(tokenize("print !"),
                     Err(LexError::UnrecognizedCharacter { character: '!', .. })));
}

#[test]
fn non_ascii_identifiers_are_rejected() {
    assert!(matches!(tokenize("number café = 1"),
                     Err(LexError::UnrecognizedCharacter { character: 'é', .. })));
    assert!(tokenize("print \"café\"").is_ok());
}

#[test]
fn unterminated_string_is_error() {
    assert!(matches!(tokenize("print \"open"),
                     Err(LexError::UnterminatedString { position }) if position == Position::new(1, 7)));
}

#[test]
fn oversized_integer_is_error() {
    assert!(matches!(tokenize("print 99999999999999999999"),
                     Err(LexError::IntegerTooLarge { .. })));
}

#[test]
fn tokenizing_is_idempotent() {
    let src = "number x = 5\nif x >= 2 {\n  print \"big\" // yes\n} else {\n  print x / 2\n}\n";
    assert_eq!(tokenize(src), tokenize(src));
}
