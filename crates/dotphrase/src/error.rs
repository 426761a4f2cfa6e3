//! Error types for formula parsing.

use thiserror::Error;

/// Errors that can occur while parsing a calculation formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Parse error at a specific position in the input.
    #[error("parse error at position {position}: {message}")]
    ParseError {
        /// Position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// Formula is incomplete.
    #[error("formula is incomplete: {0}")]
    Incomplete(String),

    /// Empty input provided.
    #[error("empty formula")]
    EmptyFormula,
}

/// Result type for formula operations.
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;
