//! Utility functions and shared types for styleblocks core
//!
//! Contains small pure helpers used across parser, block model, and analysis
//! modules: quote normalization for declaration values, identifier validation
//! for block and class names, path helpers for diagnostic display, and the
//! crate-level error type.

pub mod errors;

pub use errors::CoreError;

/// Strip one matched pair of surrounding quote characters from a value.
///
/// Definition files may wrap declaration values in single or double quotes
/// (`block-interface-index: "2"`). Only a matched leading/trailing pair is
/// removed; a lone or mismatched quote is left untouched.
///
/// # Examples
///
/// ```rust
/// use styleblocks_core::utils::strip_quotes;
///
/// assert_eq!(strip_quotes("\"2\""), "2");
/// assert_eq!(strip_quotes("'on'"), "on");
/// assert_eq!(strip_quotes("2"), "2");
/// assert_eq!(strip_quotes("\"2'"), "\"2'");
/// ```
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Check whether a string is a valid block or class identifier.
///
/// Identifiers follow CSS ident rules restricted to ASCII: letters, digits,
/// `-` and `_`, not starting with a digit and not starting with `--`.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '-' || first == '_') {
        return false;
    }
    if first == '-' && name.starts_with("--") {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Derive a block name from a definition file path.
///
/// Uses the file stem, dropping a trailing `.block` compound extension when
/// present (`nav.block.css` names the block `nav`). Falls back to
/// `"anonymous"` when the path yields no usable stem.
#[must_use]
pub fn block_name_from_path(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = file.split('.').next().unwrap_or(file);
    if stem.is_empty() {
        "anonymous"
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_double() {
        assert_eq!(strip_quotes("\"2\""), "2");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn strip_quotes_single() {
        assert_eq!(strip_quotes("'on'"), "on");
    }

    #[test]
    fn strip_quotes_unquoted_passthrough() {
        assert_eq!(strip_quotes("2"), "2");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn strip_quotes_mismatched_pair_untouched() {
        assert_eq!(strip_quotes("\"2'"), "\"2'");
        assert_eq!(strip_quotes("'2\""), "'2\"");
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn strip_quotes_only_outer_pair() {
        assert_eq!(strip_quotes("\"'a'\""), "'a'");
    }

    #[test]
    fn identifier_accepts_css_idents() {
        assert!(is_valid_identifier("nav"));
        assert!(is_valid_identifier("nav-item"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("-moz-box"));
        assert!(is_valid_identifier("a1"));
    }

    #[test]
    fn identifier_rejects_malformed() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("--custom"));
        assert!(!is_valid_identifier("nav item"));
        assert!(!is_valid_identifier("näv"));
    }

    #[test]
    fn block_name_from_simple_path() {
        assert_eq!(block_name_from_path("nav.block"), "nav");
        assert_eq!(block_name_from_path("src/blocks/nav.block.css"), "nav");
        assert_eq!(block_name_from_path("C:\\blocks\\nav.block"), "nav");
    }

    #[test]
    fn block_name_fallback() {
        assert_eq!(block_name_from_path(""), "anonymous");
        assert_eq!(block_name_from_path(".block"), "anonymous");
    }
}
