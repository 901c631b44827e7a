//! Core error type for styleblocks operations
//!
//! Provides the `CoreError` enum that wraps error types from different
//! modules in the crate. Soft validation problems never reach this type;
//! they accumulate on the `Document` or `Block` instead.

use core::fmt;

use thiserror::Error;

use crate::parser::ParseError;

/// Main error type for styleblocks core operations
///
/// Wraps module errors for unified propagation. Soft per-declaration
/// validation problems are not errors at this level; this type carries only
/// failures that abort an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Unrecoverable parsing error
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal consistency error (indicates a bug, not bad input)
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Create an internal error (indicates a bug in the pipeline)
    pub fn internal<T: fmt::Display>(message: T) -> Self {
        Self::Internal(message.to_string())
    }

    /// Whether the error signals bad input rather than a defect
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(_) | Self::Config(_) => true,
            Self::Internal(_) => false,
        }
    }

    /// Whether the error indicates a bug in the library or its callers
    #[must_use]
    pub const fn is_internal_bug(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
