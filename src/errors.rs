use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

use crate::parser::ParseError;

// Errors surfaced at the interface level. Arithmetic failures are not here:
// they travel inside `Value::Error`.
#[derive(Debug, Error)]
pub enum EvalError {
    // The input line does not match the grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    // Reading input for the line loop failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    // Serializing a result for `--json` output failed
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

// Type alias for results that use `EvalError` as the error type
pub type Result<T> = std::result::Result<T, EvalError>;
