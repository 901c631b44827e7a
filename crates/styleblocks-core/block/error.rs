//! Structured diagnostic records accumulated on a block
//!
//! Validation problems discovered while processing a definition file are not
//! thrown; they are collected on the owning [`Block`](super::Block) so one
//! pass can surface every problem in the file. Each record pairs a message
//! with the most precise location available: a file+line+column range when a
//! declaration is at fault, or the file alone for whole-file problems.

use core::fmt;

use crate::parser::Span;

/// Location a block error is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorLocation {
    /// The file as a whole, with no usable line/column
    File {
        /// Display path of the definition file
        path: String,
    },

    /// A precise position inside the file
    Range {
        /// Display path of the definition file
        path: String,
        /// Line number (1-based)
        line: u32,
        /// Column number (1-based)
        column: u32,
    },
}

impl ErrorLocation {
    /// Attribute to the file as a whole
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::File { path: path.into() }
    }

    /// Attribute to the position a span starts at
    #[must_use]
    pub fn range(path: impl Into<String>, span: Span) -> Self {
        Self::Range {
            path: path.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// Display path of the definition file
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::File { path } | Self::Range { path, .. } => path,
        }
    }

    /// Line number, when the location is a range
    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        match self {
            Self::File { .. } => None,
            Self::Range { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{path}"),
            Self::Range { path, line, column } => write!(f, "{path}:{line}:{column}"),
        }
    }
}

/// One validation error accumulated on a block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockError {
    /// Human-readable message
    message: String,

    /// Most precise location available
    location: ErrorLocation,
}

impl BlockError {
    /// Create a new block error
    #[must_use]
    pub fn new(message: impl Into<String>, location: ErrorLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location the error is attributed to
    #[must_use]
    pub const fn location(&self) -> &ErrorLocation {
        &self.location
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: error: {}", self.location, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_location_display() {
        let location = ErrorLocation::range("blocks/nav.block", Span::new(10, 20, 3, 5));
        assert_eq!(location.to_string(), "blocks/nav.block:3:5");
        assert_eq!(location.path(), "blocks/nav.block");
        assert_eq!(location.line(), Some(3));
    }

    #[test]
    fn file_location_display() {
        let location = ErrorLocation::file("blocks/nav.block");
        assert_eq!(location.to_string(), "blocks/nav.block");
        assert_eq!(location.line(), None);
    }

    #[test]
    fn error_display_is_compiler_style() {
        let error = BlockError::new(
            "block-interface-index must be a number",
            ErrorLocation::range("nav.block", Span::new(0, 0, 2, 9)),
        );
        assert_eq!(
            error.to_string(),
            "nav.block:2:9: error: block-interface-index must be a number"
        );
        assert_eq!(error.message(), "block-interface-index must be a number");
    }
}
