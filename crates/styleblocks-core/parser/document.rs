//! Parsed definition-file container with zero-copy lifetime-generic design
//!
//! The `Document` struct provides the main API for accessing a parsed block
//! definition file while maintaining zero-copy semantics through
//! lifetime-generic spans.

use crate::{DefinitionVersion, Result};

use super::{ast::Rule, errors::ParseIssue, main::Parser};

/// Parsed block definition file
///
/// Uses `&'a str` spans throughout the AST to avoid allocations during
/// parsing. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Input source text for span validation
    source: &'a str,

    /// Syntax version detected from the `@block-syntax-version` at-rule
    version: DefinitionVersion,

    /// Parsed rules in document order
    rules: Vec<Rule<'a>>,

    /// Parse warnings and recoverable errors
    issues: Vec<ParseIssue>,
}

impl<'a> Document<'a> {
    /// Parse a definition file from source text with zero-copy design
    ///
    /// Performs full validation and partial error recovery. Returns the
    /// document even with errors - check `issues()` for problems.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use styleblocks_core::parser::Document;
    /// let document = Document::parse(".foo { block-interface-index: 1; }")?;
    /// assert_eq!(document.rules().len(), 1);
    /// assert!(document.issues().is_empty());
    /// # Ok::<(), styleblocks_core::CoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Reserved for unrecoverable failures; the current parser recovers from
    /// every malformed construct and reports it through `issues()`.
    pub fn parse(source: &'a str) -> Result<Self> {
        let parser = Parser::new(source);
        Ok(parser.parse())
    }

    /// Get syntax version detected during parsing
    #[must_use]
    pub const fn version(&self) -> DefinitionVersion {
        self.version
    }

    /// Get all parsed rules in document order
    #[must_use]
    pub fn rules(&self) -> &[Rule<'a>] {
        &self.rules
    }

    /// Get parse issues (warnings, recoverable errors)
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Get source text that spans reference
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Whether any collected issue is error severity
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ParseIssue::is_error)
    }

    /// Create document from parsed components (internal constructor)
    pub(super) fn from_parts(
        source: &'a str,
        version: DefinitionVersion,
        rules: Vec<Rule<'a>>,
        issues: Vec<ParseIssue>,
    ) -> Self {
        Self {
            source,
            version,
            rules,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_definition() {
        let document = Document::parse(":scope { block-interface-index: 0; }").unwrap();
        assert_eq!(document.rules().len(), 1);
        assert_eq!(document.version(), DefinitionVersion::V1);
        assert!(!document.has_errors());
    }

    #[test]
    fn parse_with_version_at_rule() {
        let document =
            Document::parse("@block-syntax-version 1;\n.foo { block-interface-index: 1; }")
                .unwrap();
        assert_eq!(document.version(), DefinitionVersion::V1);
        assert_eq!(document.rules().len(), 1);
    }

    #[test]
    fn parse_with_bom() {
        let document = Document::parse("\u{FEFF}.foo { }").unwrap();
        assert_eq!(document.rules().len(), 1);
    }

    #[test]
    fn parse_empty_input() {
        let document = Document::parse("").unwrap();
        assert_eq!(document.rules().len(), 0);
        assert!(document.issues().is_empty());
    }
}
