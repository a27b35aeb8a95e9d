//! Tokenizer error types.

use thiserror::Error;

/// An error that occurred while splitting a literal into segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A `${` with no `}` after it.
    #[error("not found closing `}}` of an interpolation in string value: {text}")]
    UnterminatedInterpolation {
        /// The complete text of the literal being tokenized.
        text: String,
    },
}
