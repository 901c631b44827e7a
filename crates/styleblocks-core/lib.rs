//! # styleblocks-core
//!
//! Parser, object model, and validation passes for block definition files -
//! the companion artifacts a modular stylesheet block system emits so that
//! separate compilation units agree on the identity of every style a block
//! exposes.
//!
//! A definition file records, per style node, a fixed integer *interface
//! index*. Reprocessing a definition file re-applies that committed numbering
//! to a freshly built block model and flags every inconsistency: malformed or
//! duplicate index declarations, and style nodes the file forgot to declare.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: rules and declarations reference `&str` spans of
//!   the input, with line/column positions for diagnostics
//! - **Full-file validation**: soft problems accumulate on the document and
//!   block so one pass surfaces everything at once
//! - **Deterministic**: single-threaded, synchronous, no I/O in the core
//!
//! ## Quick Start
//!
//! ```rust
//! use styleblocks_core::{analysis::process_definition, CompilerConfig};
//!
//! let source = r#"
//! @block-syntax-version 1;
//! :scope { block-interface-index: 0; }
//! .button { block-interface-index: 1; }
//! .button[state|disabled] { block-interface-index: 2; }
//! "#;
//!
//! let config = CompilerConfig::new();
//! let (document, block) = process_definition(&config, source, "button.block")?;
//!
//! assert!(document.issues().is_empty());
//! assert!(!block.has_errors());
//!
//! let id = block.find_node(".button").unwrap();
//! assert_eq!(block.node(id).interface_index(), Some(1));
//! # Ok::<(), styleblocks_core::CoreError>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod block;
pub mod config;
pub mod parser;
pub mod utils;

pub use block::{Block, BlockError, ErrorLocation, StyleNode, StyleNodeId, StyleNodeKind};
pub use config::CompilerConfig;
pub use parser::{Document, ParseError, ParseIssue, Span};
pub use utils::CoreError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported definition-file syntax versions.
///
/// Definition files may declare their syntax version through a leading
/// `@block-syntax-version` at-rule. The version decides which constructs the
/// parser accepts; files without the at-rule are treated as the current
/// version.
///
/// # Examples
///
/// ```rust
/// use styleblocks_core::DefinitionVersion;
///
/// let version = DefinitionVersion::from_declaration("1").unwrap();
/// assert_eq!(version, DefinitionVersion::V1);
/// assert_eq!(version.as_number(), 1);
/// assert_eq!(DefinitionVersion::from_declaration("99"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitionVersion {
    /// Version 1, the only syntax published so far.
    V1,
}

impl DefinitionVersion {
    /// The version assumed when a file declares none.
    pub const CURRENT: Self = Self::V1;

    /// Parse a version from the `@block-syntax-version` argument.
    ///
    /// Returns `None` for unrecognized version numbers; the parser reports
    /// those as a warning and proceeds with [`Self::CURRENT`].
    #[must_use]
    pub fn from_declaration(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::V1),
            _ => None,
        }
    }

    /// Numeric form of the version, as written in definition files.
    #[must_use]
    pub const fn as_number(self) -> u32 {
        match self {
            Self::V1 => 1,
        }
    }
}

/// Result type for core operations, using the crate's unified `CoreError`.
///
/// # Examples
///
/// ```rust
/// use styleblocks_core::{parser::Document, Result};
///
/// fn parse_definition(input: &str) -> Result<Document<'_>> {
///     Document::parse(input)
/// }
/// ```
pub type Result<T> = core::result::Result<T, CoreError>;
