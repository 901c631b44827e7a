//! Style-node arena entries for the block object model
//!
//! A style node is one selector target a block exposes: the implicit root,
//! a class, or an attribute. Nodes carry the interface index re-applied from
//! a definition file together with the flag the completeness audit uses to
//! tell a freshly assigned index from a stale one.

use core::fmt;

/// Handle to a style node inside its owning block's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleNodeId(pub(super) usize);

/// Kind of selector target a style node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleNodeKind {
    /// The implicit block root (`:scope`)
    Root,
    /// A class selector target (`.foo`)
    Class,
    /// An attribute selector target (`[state|on]`, `.foo[state|on]`)
    Attribute,
}

/// One style node owned by a block
///
/// Created during block construction; its interface index is mutated at most
/// once per definition-file pass, and the node is never destroyed by that
/// pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNode {
    /// What kind of selector target this is
    kind: StyleNodeKind,

    /// Human-readable source representation (`:scope`, `.foo[state|on]`)
    repr: String,

    /// Compiled class name preset via `block-class`, if declared
    compiled_class: Option<String>,

    /// Interface index, unset until a definition file commits one
    index: Option<u32>,

    /// Whether the index was explicitly (re-)set during the current pass
    index_reset: bool,
}

impl StyleNode {
    /// Create a fresh node with no index
    pub(super) fn new(kind: StyleNodeKind, repr: String) -> Self {
        Self {
            kind,
            repr,
            compiled_class: None,
            index: None,
            index_reset: false,
        }
    }

    /// Kind of selector target
    #[must_use]
    pub const fn kind(&self) -> StyleNodeKind {
        self.kind
    }

    /// Human-readable source representation
    #[must_use]
    pub fn repr(&self) -> &str {
        &self.repr
    }

    /// Interface index, if one has been committed
    #[must_use]
    pub const fn interface_index(&self) -> Option<u32> {
        self.index
    }

    /// Whether the index was explicitly set during the current pass
    #[must_use]
    pub const fn index_was_reset(&self) -> bool {
        self.index_reset
    }

    /// Compiled class name preset via `block-class`, if declared
    #[must_use]
    pub fn compiled_class(&self) -> Option<&str> {
        self.compiled_class.as_deref()
    }

    /// Commit an interface index and mark it as reset for the audit
    pub(crate) fn reset_interface_index(&mut self, index: u32) {
        self.index = Some(index);
        self.index_reset = true;
    }

    /// Preset the compiled class name
    pub(super) fn set_compiled_class(&mut self, name: String) {
        self.compiled_class = Some(name);
    }

    /// Clear the reset flag, keeping the committed index
    pub(super) fn clear_reset_flag(&mut self) {
        self.index_reset = false;
    }
}

impl fmt::Display for StyleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}
