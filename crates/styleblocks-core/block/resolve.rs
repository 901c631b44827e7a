//! Selector resolution results against the block object model
//!
//! Resolving one compound selector key yields the attribute-style-node and
//! class-style-node matches for that key. Either list may be empty; a key
//! with no match of either kind signals an internal inconsistency to the
//! passes that consume resolutions.

use super::style_node::StyleNodeId;

/// Result of resolving one compound selector key against a block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSelector {
    /// Matching attribute style nodes, in selector-part order
    pub attributes: Vec<StyleNodeId>,

    /// Matching class style nodes (the block root is class-like)
    pub classes: Vec<StyleNodeId>,
}

impl ResolvedSelector {
    /// Whether the key matched nothing of either kind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.classes.is_empty()
    }

    /// The node an index assignment lands on: the first attribute match when
    /// any exists, otherwise the first class match.
    #[must_use]
    pub fn assignment_target(&self) -> Option<StyleNodeId> {
        self.attributes
            .first()
            .or_else(|| self.classes.first())
            .copied()
    }
}
