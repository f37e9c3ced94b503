use std::fmt;

use crate::util::position::Position;

/// The two kinds of value the language knows about.
///
/// Used both for the type written in a declaration (`number x = ...`) and for
/// describing the type of a runtime value in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integers, declared with `number`.
    Number,
    /// Strings, declared with `text`.
    Text,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Arithmetic operators, in the order of the grammar's alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`, addition or text concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, integer division truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Comparison operators allowed in an `if` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl ComparisonOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    /// Whether the operator only tests equality, as opposed to ordering.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Children are owned exclusively through `Box`; the tree never shares nodes.
/// Parenthesised expressions have no node of their own, the parser returns the
/// inner expression directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    IntegerLiteral {
        /// The literal's value.
        value:    i64,
        /// Source position of the literal.
        position: Position,
    },
    /// A string literal. `raw` is the text between the quotes, with escape
    /// sequences still in place.
    StringLiteral {
        /// The undecoded body of the literal.
        raw:      String,
        /// Source position of the opening quote.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Source position of the name.
        position: Position,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Source position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Source position of the node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IntegerLiteral { position, .. }
            | Self::StringLiteral { position, .. }
            | Self::Variable { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// The condition of an `if` statement: exactly one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left-hand side.
    pub left:     Expr,
    /// The comparison.
    pub op:       ComparisonOperator,
    /// Right-hand side.
    pub right:    Expr,
    /// Source position of the comparison operator.
    pub position: Position,
}

/// A braced sequence of statements, evaluated in its own scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
    /// Source position of the opening brace.
    pub position:   Position,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `number x = expr` or `text x = expr`.
    VariableDeclaration {
        /// The type written before the name.
        declared_type: ValueType,
        /// Name being declared.
        name:          String,
        /// Initializer expression.
        value:         Expr,
        /// Source position of the type keyword.
        position:      Position,
    },
    /// `print expr`.
    Print {
        /// The expression to print.
        expr:     Expr,
        /// Source position of the `print` keyword.
        position: Position,
    },
    /// `if condition { ... } else { ... }`.
    If {
        /// The comparison deciding which block runs.
        condition:  Condition,
        /// Block run when the condition holds.
        then_block: Block,
        /// Optional block run otherwise.
        else_block: Option<Block>,
        /// Source position of the `if` keyword.
        position:   Position,
    },
}

/// A whole parsed script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}
