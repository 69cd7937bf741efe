//! Formula error types
//!
//! Every failure is a value handed back to the caller. The evaluator runs
//! on each keystroke of a live preview, so nothing in this crate panics on
//! user input; the host UI renders the error code next to the table.

use thiserror::Error;

/// Result type for formula operations
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while parsing or evaluating a formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Formula text does not match the FUNCTION(ARGUMENT) shape
    #[error("Formula must have the form FUNCTION(ARGUMENT)")]
    BadFormat,

    /// Parentheses present but empty
    #[error("Missing function argument")]
    MissingArgument,

    /// Function name outside the supported set
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// An argument that must be a reference or range did not parse as one
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl From<quillcalc_core::Error> for EvalError {
    fn from(err: quillcalc_core::Error) -> Self {
        match err {
            quillcalc_core::Error::InvalidReference(s) => EvalError::InvalidReference(s),
            quillcalc_core::Error::InvalidRange(s) => EvalError::InvalidReference(s),
        }
    }
}
