/// The evaluator module executes AST nodes.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements against the environment and collects printed output.
///
/// # Responsibilities
/// - Evaluates expressions to typed values and enforces operand types.
/// - Executes declarations, `print` and `if` statements in source order.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The environment module holds variable bindings.
///
/// Bindings live in a stack of block scopes. Declarations go into the
/// innermost scope; lookups search outward to the root.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// corresponding to a keyword, identifier, literal, operator or line break,
/// paired with its source position. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Drops whitespace and comments, collapses runs of line breaks.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into statements, blocks, conditions and expressions.
/// - Applies operator precedence and left associativity.
/// - Validates the grammar, reporting errors with position info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum with its two variants, integers and text, and
/// the rendering and escape handling they need.
pub mod value;
