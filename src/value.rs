use serde::Serialize;
use std::fmt;

/// Why an evaluation failed. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DivisionByZero,
    InvalidOperator,
    InvalidNumber,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::DivisionByZero => "Division by zero!",
            ErrorKind::InvalidOperator => "Invalid operation!",
            ErrorKind::InvalidNumber => "Invalid number!",
        })
    }
}

/// Result of evaluating any subtree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Integer(i64),
    Float(f64),
    Error(ErrorKind),
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            // printf("%f") spelling for the non-finite cases
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-inf" } else { "inf" })
            }
            Value::Float(x) => write!(f, "{x:.6}"),
            Value::Error(kind) => write!(f, "Error: {kind}"),
        }
    }
}
