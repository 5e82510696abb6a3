/// What a `-` applied to a single operand means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnaryMinus {
    /// Fold with zero reduction steps: `(- 5)` is `5`.
    #[default]
    Identity,
    /// Negate the lone operand: `(- 5)` is `-5`.
    Negate,
}

/// Evaluation options. Immutable for the lifetime of an evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Context {
    pub unary_minus: UnaryMinus,
}

impl Context {
    pub fn with_unary_minus(mut self, unary_minus: UnaryMinus) -> Self {
        self.unary_minus = unary_minus;
        self
    }
}
