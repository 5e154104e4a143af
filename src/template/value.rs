//! Interpolation values
//!
//! This module defines the typed values that can be spliced into a command
//! template, and the two questions the renderer asks of them: "are you
//! absent?" and "what text do you produce?".

use std::path::{Path, PathBuf};

/// A value interpolated into a command template
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Literal text, spliced as-is (an empty string is still present)
    Text(String),

    /// Numeric value, rendered in plain decimal form
    Number(f64),

    /// Boolean flag: `true` renders as `"true"`, `false` signals omission
    Flag(bool),

    /// No value; the surrounding flag and operand tokens are dropped
    Absent,

    /// Ordered sequence, rendered as its elements joined by single spaces
    List(Vec<Value>),
}

impl Value {
    /// Check whether this value signals omission
    ///
    /// Absent values, `false` flags, and NaN numbers all omit the flag
    /// tokens around their interpolation point. Zero and the empty string
    /// are meaningful values and do not.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Flag(false) => true,
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Produce the text spliced in for this value
    ///
    /// Omission applies only at the interpolation point, so list elements
    /// are always stringified: an absent element renders as an empty
    /// string and a `false` flag inside a list renders as `"false"`.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => render_number(*n),
            Value::Flag(b) => b.to_string(),
            Value::Absent => String::new(),
            Value::List(items) => items
                .iter()
                .map(Value::render)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Render a number in plain decimal form
fn render_number(n: f64) -> String {
    // Negative zero renders as "0"
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&Path> for Value {
    fn from(p: &Path) -> Self {
        Value::Text(p.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Value {
    fn from(p: PathBuf) -> Self {
        Value::Text(p.to_string_lossy().into_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}
