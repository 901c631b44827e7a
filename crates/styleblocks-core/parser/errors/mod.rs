//! Error types for definition-file parsing
//!
//! Splits problems into two kinds: [`ParseError`] for unrecoverable
//! structural failures that abort a construct, and [`ParseIssue`] for
//! recoverable problems collected on the document while parsing continues.

mod parse_error;
mod parse_issue;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
