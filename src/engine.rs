use crate::context::{Context, UnaryMinus};
use crate::expression::SyntaxNode;
use crate::value::{ErrorKind, Value};
use itertools::{FoldWhile, Itertools};

/// =========================
/// Public API (Evaluation)
/// =========================

/// Evaluate a tree with the default context. Never fails: problems come back
/// as `Value::Error`.
pub fn evaluate(tree: &SyntaxNode) -> Value {
    evaluate_with(tree, &Context::default())
}

/// Recurses once per nesting level. Trees from `parse_expr` are at most
/// [`MAX_DEPTH`] deep; a hand-built tree deep enough to exhaust the stack is
/// the caller's problem.
///
/// [`MAX_DEPTH`]: crate::expression::MAX_DEPTH
pub fn evaluate_with(tree: &SyntaxNode, ctx: &Context) -> Value {
    match tree {
        SyntaxNode::Literal(text) => parse_literal(text),
        SyntaxNode::Operation { op, operands } => fold_operands(op, operands, ctx),
    }
}

/// Left fold of `op` over the operands. Stops at the first error; the
/// remaining operands are never evaluated.
fn fold_operands(op: &str, operands: &[SyntaxNode], ctx: &Context) -> Value {
    let Some((first, rest)) = operands.split_first() else {
        return Value::Error(ErrorKind::InvalidOperator);
    };
    let first = evaluate_with(first, ctx);
    if rest.is_empty() && op == "-" && ctx.unary_minus == UnaryMinus::Negate {
        return negate(first);
    }
    rest.iter()
        .fold_while(first, |acc, node| {
            if let Value::Error(kind) = acc {
                tracing::trace!(op, %kind, "short-circuit");
                return FoldWhile::Done(acc);
            }
            FoldWhile::Continue(apply(op, acc, evaluate_with(node, ctx)))
        })
        .into_inner()
}

fn negate(v: Value) -> Value {
    match v {
        Value::Integer(n) => Value::Integer(n.wrapping_neg()),
        Value::Float(x) => Value::Float(-x),
        err @ Value::Error(_) => err,
    }
}

/// =========================
/// Literals
/// =========================

/// Text with a `.` is a float, anything else an integer. Out of range is
/// `InvalidNumber`, never a clamped or wrapped value.
pub fn parse_literal(text: &str) -> Value {
    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(x) if !x.is_finite() => Value::Error(ErrorKind::InvalidNumber),
            // underflow: subnormal, or non-zero digits that rounded away to nothing
            Ok(x) if x.is_subnormal() => Value::Error(ErrorKind::InvalidNumber),
            Ok(x) if x == 0.0 && text.bytes().any(|b| matches!(b, b'1'..=b'9')) => {
                Value::Error(ErrorKind::InvalidNumber)
            }
            Ok(x) => Value::Float(x),
            Err(_) => Value::Error(ErrorKind::InvalidNumber),
        }
    } else {
        text.parse::<i64>()
            .map_or(Value::Error(ErrorKind::InvalidNumber), Value::Integer)
    }
}

/// =========================
/// Operators
/// =========================

/// Combine two evaluated operands. An error operand is returned as is, the
/// left one first.
pub fn apply(op: &str, x: Value, y: Value) -> Value {
    if x.is_error() {
        return x;
    }
    if y.is_error() {
        return y;
    }
    match op {
        "+" => arith(x, y, i64::wrapping_add, |a, b| a + b),
        "-" => arith(x, y, i64::wrapping_sub, |a, b| a - b),
        "*" => arith(x, y, i64::wrapping_mul, |a, b| a * b),
        "/" if is_zero(y) => Value::Error(ErrorKind::DivisionByZero),
        "/" => arith(x, y, i64::wrapping_div, |a, b| a / b),
        "%" => match (x, y) {
            (Value::Integer(_), Value::Integer(0)) => Value::Error(ErrorKind::DivisionByZero),
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.wrapping_rem(b)),
            _ => Value::Error(ErrorKind::InvalidOperator),
        },
        _ => Value::Error(ErrorKind::InvalidOperator),
    }
}

/// Operand pair after promotion.
enum Operands {
    Integers(i64, i64),
    Floats(f64, f64),
}

#[allow(clippy::cast_precision_loss)]
fn promote(x: Value, y: Value) -> Option<Operands> {
    match (x, y) {
        (Value::Integer(a), Value::Integer(b)) => Some(Operands::Integers(a, b)),
        (Value::Integer(a), Value::Float(b)) => Some(Operands::Floats(a as f64, b)),
        (Value::Float(a), Value::Integer(b)) => Some(Operands::Floats(a, b as f64)),
        (Value::Float(a), Value::Float(b)) => Some(Operands::Floats(a, b)),
        _ => None,
    }
}

fn arith(x: Value, y: Value, int: fn(i64, i64) -> i64, float: fn(f64, f64) -> f64) -> Value {
    match promote(x, y) {
        Some(Operands::Integers(a, b)) => Value::Integer(int(a, b)),
        Some(Operands::Floats(a, b)) => Value::Float(float(a, b)),
        None => Value::Error(ErrorKind::InvalidOperator),
    }
}

// 0 and 0.0 of either sign; NaN is not zero
fn is_zero(v: Value) -> bool {
    match v {
        Value::Integer(n) => n == 0,
        Value::Float(x) => x == 0.0,
        Value::Error(_) => false,
    }
}
