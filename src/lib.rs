pub mod errors;
pub mod context;
pub mod engine;
pub mod expression;
pub mod parser;
pub mod repl;
pub mod value;

use context::Context;
use errors::Result;
use expression::SyntaxNode;

pub use context::UnaryMinus;
pub use value::{ErrorKind, Value};

/// Parses a line and evaluates it under a fixed `Context`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    ctx: Context,
}

impl Evaluator {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Evaluate one input line. Only syntax errors come back as `Err`;
    /// arithmetic failures are an `Ok(Value::Error(_))`.
    pub fn eval(&self, line: &str) -> Result<Value> {
        let tree = expression::parse_expr(line)?;
        let value = self.evaluate(&tree);
        tracing::debug!(line, %value, "evaluated");
        Ok(value)
    }

    pub fn evaluate(&self, tree: &SyntaxNode) -> Value {
        engine::evaluate_with(tree, &self.ctx)
    }
}

/// Convenience: evaluate with the default context.
pub fn eval(line: &str) -> Result<Value> {
    Evaluator::default().eval(line)
}

pub use engine::{apply, evaluate, parse_literal};
pub use expression::parse_expr;
