// ============================================================================
// Decimal Errors
// Error types for decimal parsing and arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal parsing and arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text matches neither the plain decimal nor the scientific grammar
    InvalidFormat,
    /// Operation is not defined on this path (e.g. negative exponent on the
    /// longhand power algorithm)
    UnsupportedOperation,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(f, "invalid format: text is not a decimal or scientific number")
            },
            NumericError::UnsupportedOperation => {
                write!(f, "unsupported operation for this backend")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
