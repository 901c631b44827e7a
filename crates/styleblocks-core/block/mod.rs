//! Block object model for one compiled stylesheet module
//!
//! A [`Block`] owns the style nodes a stylesheet module exposes (the
//! implicit root, classes, and attributes), the lookup tables that resolve
//! parsed selector keys back to those nodes, and the error sink that
//! accumulates validation problems while a definition file is processed.
//!
//! # Example
//!
//! ```rust
//! use styleblocks_core::{block::Block, parser::Document, CompilerConfig};
//!
//! let source = ".button { block-interface-index: 1; }";
//! let document = Document::parse(source)?;
//! let config = CompilerConfig::new();
//! let block = Block::from_document(&config, &document, "button.block");
//!
//! assert_eq!(block.name(), "button");
//! assert_eq!(block.style_nodes(true).count(), 2); // root + .button
//! # Ok::<(), styleblocks_core::CoreError>(())
//! ```

mod error;
mod resolve;
mod style_node;

pub use error::{BlockError, ErrorLocation};
pub use resolve::ResolvedSelector;
pub use style_node::{StyleNode, StyleNodeId, StyleNodeKind};

use ahash::AHashMap;

use crate::{
    config::CompilerConfig,
    parser::{AttributeSelector, CompoundSelector, Document},
    utils::{block_name_from_path, is_valid_identifier, strip_quotes},
};

/// Reserved property naming the block in a `:scope` rule
pub const BLOCK_NAME_PROPERTY: &str = "block-name";

/// Reserved property carrying the block's globally unique id
pub const BLOCK_ID_PROPERTY: &str = "block-id";

/// Reserved property presetting a node's compiled class name
pub const BLOCK_CLASS_PROPERTY: &str = "block-class";

/// Reserved property committing a node's interface index
pub const INTERFACE_INDEX_PROPERTY: &str = "block-interface-index";

/// Source representation of the implicit root node
pub const ROOT_REPR: &str = ":scope";

/// In-memory model of one compiled stylesheet module
///
/// Owns the style-node arena (the implicit root always exists at creation),
/// per-kind lookup maps, and the accumulated validation errors. Mutated
/// exclusively through `&mut` borrows by one pass at a time; no interior
/// mutability and no locking.
#[derive(Debug, Clone)]
pub struct Block {
    /// Block name, from `block-name` or the definition file stem
    name: String,

    /// Globally unique id from `block-id`, if declared
    guid: Option<String>,

    /// Style-node arena; the root node is always entry 0
    nodes: Vec<StyleNode>,

    /// Class name -> node lookup
    classes: AHashMap<String, StyleNodeId>,

    /// Canonical attribute key -> node lookup
    attributes: AHashMap<String, StyleNodeId>,

    /// Validation errors accumulated while processing the definition file
    errors: Vec<BlockError>,
}

impl Block {
    /// Create an empty block containing only the implicit root node
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: None,
            nodes: vec![StyleNode::new(StyleNodeKind::Root, ROOT_REPR.to_string())],
            classes: AHashMap::new(),
            attributes: AHashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Build the block model from a parsed definition file
    ///
    /// Interns a style node for every selector target the document names and
    /// reads the reserved metadata declarations (`block-name`, `block-id`,
    /// `block-class`). Interface indexes are not applied here; that is the
    /// assigner pass's job. Problems are accumulated on the block's error
    /// sink, never thrown.
    #[must_use]
    pub fn from_document(
        config: &CompilerConfig,
        document: &Document<'_>,
        file_path: &str,
    ) -> Self {
        let mut block = Self::new(block_name_from_path(file_path));
        let path = config.display_path(file_path);

        for rule in document.rules() {
            for compound in &rule.selectors {
                block.ensure_selector(compound);
            }

            for decl in &rule.declarations {
                match decl.property {
                    BLOCK_NAME_PROPERTY => {
                        let name = strip_quotes(decl.value);
                        if !rule.selectors.iter().all(is_pure_scope) {
                            block.errors.push(BlockError::new(
                                "block-name may only be declared in a :scope rule",
                                ErrorLocation::range(&path, decl.span),
                            ));
                        } else if is_valid_identifier(name) {
                            block.name = name.to_string();
                        } else {
                            block.errors.push(BlockError::new(
                                format!("Illegal block name. `{name}` is not a legal CSS identifier"),
                                ErrorLocation::range(&path, decl.span),
                            ));
                        }
                    }
                    BLOCK_ID_PROPERTY => {
                        if rule.selectors.iter().all(is_pure_scope) {
                            block.guid = Some(strip_quotes(decl.value).to_string());
                        } else {
                            block.errors.push(BlockError::new(
                                "block-id may only be declared in a :scope rule",
                                ErrorLocation::range(&path, decl.span),
                            ));
                        }
                    }
                    BLOCK_CLASS_PROPERTY => {
                        let class = strip_quotes(decl.value);
                        if is_valid_identifier(class) {
                            for compound in &rule.selectors {
                                let target = block.ensure_selector(compound);
                                block.nodes[target.0].set_compiled_class(class.to_string());
                            }
                        } else {
                            block.errors.push(BlockError::new(
                                format!("block-class must be a valid class name (found `{class}`)"),
                                ErrorLocation::range(&path, decl.span),
                            ));
                        }
                    }
                    INTERFACE_INDEX_PROPERTY => {}
                    other if other.starts_with("block-") => {
                        block.errors.push(BlockError::new(
                            format!("Unknown block metadata property `{other}`"),
                            ErrorLocation::range(&path, decl.span),
                        ));
                    }
                    _ => {}
                }
            }
        }

        block
    }

    /// Block name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Globally unique id from `block-id`, if declared
    #[must_use]
    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    /// Handle of the implicit root node
    #[must_use]
    pub fn root(&self) -> StyleNodeId {
        StyleNodeId(0)
    }

    /// Shared access to a style node
    #[must_use]
    pub fn node(&self, id: StyleNodeId) -> &StyleNode {
        &self.nodes[id.0]
    }

    /// Exclusive access to a style node
    pub(crate) fn node_mut(&mut self, id: StyleNodeId) -> &mut StyleNode {
        &mut self.nodes[id.0]
    }

    /// Enumerate style nodes in arena order
    ///
    /// The implicit root exists without any declaring rule; pass
    /// `include_implicit` to include it, the way the completeness audit does.
    pub fn style_nodes(&self, include_implicit: bool) -> impl Iterator<Item = StyleNodeId> + '_ {
        let skip = usize::from(!include_implicit);
        (skip..self.nodes.len()).map(StyleNodeId)
    }

    /// Find a style node by its source representation
    #[must_use]
    pub fn find_node(&self, repr: &str) -> Option<StyleNodeId> {
        self.nodes
            .iter()
            .position(|node| node.repr() == repr)
            .map(StyleNodeId)
    }

    /// Resolve one compound selector key against the model
    ///
    /// A key with attribute parts resolves to its attribute nodes; a plain
    /// class key resolves to its class node; a pure `:scope` key resolves to
    /// the root through the class list (the root is class-like).
    #[must_use]
    pub fn resolve_selector(&self, compound: &CompoundSelector<'_>) -> ResolvedSelector {
        let mut resolved = ResolvedSelector::default();

        if compound.has_attributes() {
            for part in &compound.attributes {
                if let Some(&id) = self.attributes.get(&attribute_key(compound.class, part)) {
                    resolved.attributes.push(id);
                }
            }
        } else if let Some(class) = compound.class {
            if let Some(&id) = self.classes.get(class) {
                resolved.classes.push(id);
            }
        } else {
            resolved.classes.push(self.root());
        }

        resolved
    }

    /// Validation errors accumulated so far
    #[must_use]
    pub fn errors(&self) -> &[BlockError] {
        &self.errors
    }

    /// Whether any validation error has been recorded
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Append a validation error to the sink
    pub fn push_error(&mut self, error: BlockError) {
        self.errors.push(error);
    }

    /// Clear every node's index-reset flag, keeping committed indexes
    ///
    /// Prepares the block for re-running the assigner pass over the same
    /// definition file.
    pub fn reset_index_flags(&mut self) {
        for node in &mut self.nodes {
            node.clear_reset_flag();
        }
    }

    /// Intern the style nodes a compound selector names
    ///
    /// Returns the node an assignment against this compound lands on: the
    /// first attribute part's node when the compound has attribute parts,
    /// otherwise the class node, otherwise the root.
    fn ensure_selector(&mut self, compound: &CompoundSelector<'_>) -> StyleNodeId {
        let class_id = compound.class.map(|name| self.ensure_class(name));

        let mut first_attribute = None;
        for part in &compound.attributes {
            let id = self.ensure_attribute(compound.class, part);
            if first_attribute.is_none() {
                first_attribute = Some(id);
            }
        }

        first_attribute
            .or(class_id)
            .unwrap_or_else(|| self.root())
    }

    /// Intern a class node
    fn ensure_class(&mut self, name: &str) -> StyleNodeId {
        if let Some(&id) = self.classes.get(name) {
            return id;
        }
        let id = StyleNodeId(self.nodes.len());
        self.nodes
            .push(StyleNode::new(StyleNodeKind::Class, format!(".{name}")));
        self.classes.insert(name.to_string(), id);
        id
    }

    /// Intern an attribute node parented to a class or the root
    fn ensure_attribute(
        &mut self,
        class: Option<&str>,
        part: &AttributeSelector<'_>,
    ) -> StyleNodeId {
        let key = attribute_key(class, part);
        if let Some(&id) = self.attributes.get(&key) {
            return id;
        }
        let id = StyleNodeId(self.nodes.len());
        self.nodes
            .push(StyleNode::new(StyleNodeKind::Attribute, key.clone()));
        self.attributes.insert(key, id);
        id
    }
}

/// Canonical lookup key for an attribute node
fn attribute_key(class: Option<&str>, part: &AttributeSelector<'_>) -> String {
    match class {
        Some(class) => format!(".{class}{part}"),
        None => part.to_string(),
    }
}

/// Whether a compound is exactly `:scope` with no class or attribute parts
fn is_pure_scope(compound: &CompoundSelector<'_>) -> bool {
    compound.scope && compound.class.is_none() && !compound.has_attributes()
}
