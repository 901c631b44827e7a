//! Analysis passes over parsed definition files and their block models
//!
//! The passes here run after parsing and block construction, mutating the
//! block in place and accumulating validation errors on its sink:
//!
//! - Interface-index assignment: re-applies the committed per-node indexes
//!   from the definition file and audits completeness.
//!
//! # Example
//!
//! ```rust
//! use styleblocks_core::{analysis::process_definition, CompilerConfig};
//!
//! let source = r#"
//! :scope { block-interface-index: 0; }
//! .button { block-interface-index: 1; }
//! "#;
//!
//! let config = CompilerConfig::new();
//! let (document, block) = process_definition(&config, source, "button.block")?;
//! assert!(document.issues().is_empty());
//! assert!(!block.has_errors());
//! # Ok::<(), styleblocks_core::CoreError>(())
//! ```

mod indexes;

pub use indexes::assign_interface_indexes;

use crate::{block::Block, config::CompilerConfig, parser::Document, Result};

/// Run the full definition-file pipeline over one source text.
///
/// Parses the source, builds the block model, and re-applies the committed
/// interface indexes. Soft problems are found on the returned document
/// (`issues()`) and block (`errors()`); the surrounding pipeline decides how
/// to render them.
///
/// # Errors
///
/// Propagates the assigner's fatal internal-consistency error; parsing and
/// block construction recover from everything and report through their
/// collections.
pub fn process_definition<'a>(
    config: &CompilerConfig,
    source: &'a str,
    file_path: &str,
) -> Result<(Document<'a>, Block)> {
    let document = Document::parse(source)?;
    let mut block = Block::from_document(config, &document, file_path);
    assign_interface_indexes(config, &document, &mut block, file_path)?;
    Ok((document, block))
}
