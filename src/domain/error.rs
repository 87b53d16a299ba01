//! Domain errors raised while normalizing exchange data.

use thiserror::Error;

/// Errors produced by the pure normalization layer.
///
/// Each variant rejects a value rather than letting it flow on as an
/// infinite, NaN-like or truncated number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A reciprocal price or ratio had a zero divisor.
    #[error("division by zero while computing {context}")]
    DivisionByZero { context: &'static str },

    /// A multiplication left the representable decimal range.
    #[error("arithmetic overflow while computing {context}")]
    Overflow { context: &'static str },

    /// An API timestamp could not be parsed as a UTC instant.
    #[error("invalid timestamp: {value:?}")]
    InvalidTimestamp { value: String },

    /// An amount cannot be expressed in on-chain base units.
    #[error("invalid amount: {value}")]
    InvalidAmount { value: String },
}
