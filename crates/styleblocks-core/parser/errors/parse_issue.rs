//! Parse issue types for recoverable parsing problems
//!
//! Contains types for representing warnings and errors that can be recovered
//! from during parsing. These allow continued parsing while collecting
//! problems for later review.

use core::fmt;

/// Parse issue severity levels for partial recovery
///
/// Determines how serious an issue is and whether it should block
/// downstream processing of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueSeverity {
    /// Information that may be useful but doesn't affect processing
    Info,

    /// Warning about potential problems or non-standard usage
    Warning,

    /// Error that was recovered from but invalidates part of the document
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Issue categories for filtering and editor integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueCategory {
    /// Document structure issues (braces, at-rules, stray text)
    Structure,

    /// Selector syntax problems
    Selector,

    /// Declaration syntax problems
    Declaration,

    /// Syntax-version problems
    Version,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Selector => write!(f, "selector"),
            Self::Declaration => write!(f, "declaration"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// Parse issue for recoverable problems and warnings
///
/// Used for problems that don't prevent parsing the rest of the file.
/// Includes location information for editor integration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: usize,

    /// Column number where issue occurred (1-based)
    pub column: Option<usize>,
}

impl ParseIssue {
    /// Create new parse issue with minimal information
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
            column: None,
        }
    }

    /// Add column information to an existing issue
    #[must_use]
    pub const fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Whether this issue invalidates part of the document
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity >= IssueSeverity::Error
    }

    /// Format issue for display in editor or console
    #[must_use]
    pub fn format_for_display(&self) -> String {
        let location = self.column.map_or_else(
            || format!("{}", self.line),
            |column| format!("{}:{}", self.line, column),
        );

        format!(
            "[{}:{}] {}: {}",
            location, self.category, self.severity, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", IssueSeverity::Info), "info");
        assert_eq!(format!("{}", IssueSeverity::Warning), "warning");
        assert_eq!(format!("{}", IssueSeverity::Error), "error");
    }

    #[test]
    fn severity_ordering() {
        assert!(IssueSeverity::Info < IssueSeverity::Warning);
        assert!(IssueSeverity::Warning < IssueSeverity::Error);
    }

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", IssueCategory::Structure), "structure");
        assert_eq!(format!("{}", IssueCategory::Selector), "selector");
        assert_eq!(format!("{}", IssueCategory::Declaration), "declaration");
        assert_eq!(format!("{}", IssueCategory::Version), "version");
    }

    #[test]
    fn issue_creation() {
        let issue = ParseIssue::warning(
            IssueCategory::Selector,
            "Unsupported selector".to_string(),
            10,
        );

        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert_eq!(issue.category, IssueCategory::Selector);
        assert_eq!(issue.line, 10);
        assert_eq!(issue.column, None);
        assert!(!issue.is_error());
    }

    #[test]
    fn issue_with_column() {
        let issue = ParseIssue::error(
            IssueCategory::Declaration,
            "Missing ':' in declaration".to_string(),
            8,
        )
        .at_column(5);

        assert_eq!(issue.column, Some(5));
        assert!(issue.is_error());
    }

    #[test]
    fn issue_formatting() {
        let issue = ParseIssue::error(
            IssueCategory::Declaration,
            "Missing ':' in declaration".to_string(),
            8,
        );
        let formatted = issue.format_for_display();
        assert!(formatted.contains("[8:declaration]"));
        assert!(formatted.contains("error"));
        assert!(formatted.contains("Missing ':'"));

        let formatted = issue.at_column(5).format_for_display();
        assert!(formatted.contains("[8:5]"));
    }
}
