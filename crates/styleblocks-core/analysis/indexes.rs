//! Interface-index assignment for definition files
//!
//! A definition file commits, for every style node its block exposes, a
//! fixed integer index that downstream tooling uses to correlate the same
//! logical style across separate compilation units. This pass re-applies
//! that committed numbering when a definition file is reprocessed: it reads
//! the `block-interface-index` declaration on each rule, resolves the rule's
//! selectors back to the block's style nodes, assigns the index, and then
//! audits that no style node was left without one.
//!
//! Validation problems (a non-numeric index, a duplicate, a node the file
//! never declares) accumulate on the block so one pass reports every problem
//! in the file. The single fatal condition is a selector that resolves to no
//! style node at all: that is a defect in block construction, not bad input,
//! and aborts the operation.

use crate::{
    block::{Block, BlockError, ErrorLocation, INTERFACE_INDEX_PROPERTY},
    config::CompilerConfig,
    parser::Document,
    utils::{strip_quotes, CoreError},
    Result,
};

/// Ordered set of indexes seen so far in one assigner invocation
///
/// Scoped to a single pass over a single file and used only to detect
/// duplicate declarations; document order decides which duplicate counts as
/// first. The per-file index count is small, so a scan beats a hash set.
#[derive(Debug, Default)]
struct FoundIndexes(Vec<u32>);

impl FoundIndexes {
    fn contains(&self, index: u32) -> bool {
        self.0.contains(&index)
    }

    fn insert(&mut self, index: u32) {
        self.0.push(index);
    }
}

/// Re-apply the committed interface indexes from a definition file.
///
/// Walks every rule of `document` in document order, processing each
/// `block-interface-index` declaration independently:
///
/// 1. The value is unquoted and parsed as a base-10 integer; a non-numeric
///    value records "block-interface-index must be a number" at the
///    declaration's position and processing continues.
/// 2. A value already declared earlier in the file records "Each
///    block-interface-index in a definition file must be unique" and is not
///    applied; the first declaration keeps the index.
/// 3. A new value is applied to every compound selector the rule's prelude
///    expands to, independently: the first matching attribute node when one
///    exists, otherwise the first matching class node. The assigned node's
///    reset flag is marked for the audit.
///
/// After the traversal, every style node the block owns - including the
/// implicit root - must have had its index set during this pass; each node
/// left unset records a whole-file error naming its source representation.
///
/// The operation mutates `block` only; nothing is returned on success.
///
/// # Errors
///
/// Returns [`CoreError::Internal`] when a selector resolves to no style node
/// of either kind. The selector was resolvable during block construction, so
/// an empty resolution at assignment time indicates a bug in the pipeline
/// and must not be swallowed into the soft-error list.
pub fn assign_interface_indexes(
    config: &CompilerConfig,
    document: &Document<'_>,
    block: &mut Block,
    file_path: &str,
) -> Result<()> {
    let path = config.display_path(file_path);
    let mut found = FoundIndexes::default();

    for rule in document.rules() {
        for decl in rule.declarations_of(INTERFACE_INDEX_PROPERTY) {
            let raw = strip_quotes(decl.value);

            let Ok(index) = raw.parse::<u32>() else {
                block.push_error(BlockError::new(
                    "block-interface-index must be a number",
                    ErrorLocation::range(&path, decl.span),
                ));
                continue;
            };

            if found.contains(index) {
                block.push_error(BlockError::new(
                    "Each block-interface-index in a definition file must be unique",
                    ErrorLocation::range(&path, decl.span),
                ));
                continue;
            }
            found.insert(index);

            for compound in &rule.selectors {
                let resolved = block.resolve_selector(compound);
                let Some(target) = resolved.assignment_target() else {
                    return Err(CoreError::internal(format!(
                        "Selector `{compound}` in `{path}` resolved to no style node while \
                         assigning interface indexes"
                    )));
                };
                block.node_mut(target).reset_interface_index(index);
            }
        }
    }

    audit_index_coverage(block, &path);

    Ok(())
}

/// Record an error for every style node the pass did not reach.
///
/// Enumerates the block's style nodes with implicit nodes included, so the
/// root is audited even though no rule is required to declare it. Errors are
/// attributed to the file as a whole; there is no declaration to point at.
fn audit_index_coverage(block: &mut Block, path: &str) {
    let unreached: Vec<String> = block
        .style_nodes(true)
        .filter(|&id| !block.node(id).index_was_reset())
        .map(|id| block.node(id).repr().to_string())
        .collect();

    for repr in unreached {
        block.push_error(BlockError::new(
            format!(
                "Style node `{repr}` doesn't have a preset interface index after parsing \
                 definition file. You may need to declare this style node in the definition file."
            ),
            ErrorLocation::file(path),
        ));
    }
}
