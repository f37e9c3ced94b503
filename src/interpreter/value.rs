use std::fmt;

use crate::ast::ValueType;

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and stored in the
/// environment by declarations. There is no implicit conversion between the
/// two variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer, the runtime form of `number`.
    Integer(i64),
    /// A string, the runtime form of `text`.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// The language-level type of the value.
    ///
    /// # Example
    /// ```
    /// use simplelang::{ast::ValueType, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Integer(3).value_type(), ValueType::Number);
    /// assert_eq!(Value::from("hi").value_type(), ValueType::Text);
    /// ```
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Number,
            Self::Text(_) => ValueType::Text,
        }
    }
}

/// Renders integers as decimal digits and text as its raw content, which is
/// exactly what `print` emits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Resolves the escape sequences of a string literal body.
///
/// `\"` becomes `"` and `\\` becomes `\`. Any other escaped character is kept
/// as written, backslash included.
///
/// # Example
/// ```
/// use simplelang::interpreter::value::unescape;
///
/// assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
/// assert_eq!(unescape(r"a\\b"), r"a\b");
/// assert_eq!(unescape(r"tab\t"), r"tab\t");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }

    out
}
