//! Rule and declaration AST nodes for block definition files
//!
//! A definition file is a flat list of rules. Each rule pairs a parsed
//! selector prelude with its declarations; both keep zero-copy references
//! into the source text plus spans for diagnostics.

use super::{CompoundSelector, Span};

/// One `property: value` declaration inside a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name, trimmed
    pub property: &'a str,

    /// Raw declaration value, trimmed but with quotes preserved
    pub value: &'a str,

    /// Span of the declaration, positioned at the property name
    pub span: Span,
}

impl Declaration<'_> {
    /// Whether this declaration carries the given reserved property
    #[must_use]
    pub fn is_property(&self, name: &str) -> bool {
        self.property == name
    }
}

/// One rule block from a definition file
///
/// `selectors` holds the compound selectors the prelude expands to; a prelude
/// of `.a, .b` produces two compounds that downstream passes process
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    /// Raw prelude text before `{`, trimmed
    pub prelude: &'a str,

    /// Parsed compound selectors in prelude order
    pub selectors: Vec<CompoundSelector<'a>>,

    /// Declarations in source order
    pub declarations: Vec<Declaration<'a>>,

    /// Span covering the whole rule
    pub span: Span,
}

impl<'a> Rule<'a> {
    /// Find every declaration of the given property, in source order.
    ///
    /// Well-formed input carries at most one occurrence per reserved
    /// property, but each occurrence is surfaced so callers can process (or
    /// reject) repeats explicitly.
    pub fn declarations_of<'s>(
        &'s self,
        property: &'s str,
    ) -> impl Iterator<Item = &'s Declaration<'a>> + 's {
        self.declarations
            .iter()
            .filter(move |decl| decl.property == property)
    }

    /// First declaration of the given property, if any
    #[must_use]
    pub fn declaration_of<'s>(&'s self, property: &'s str) -> Option<&'s Declaration<'a>> {
        self.declarations_of(property).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::selector::parse_selector_list;

    fn rule<'a>(prelude: &'a str, declarations: Vec<Declaration<'a>>) -> Rule<'a> {
        let span = Span::new(0, prelude.len(), 1, 1);
        Rule {
            prelude,
            selectors: parse_selector_list(prelude, span).unwrap(),
            declarations,
            span,
        }
    }

    #[test]
    fn declarations_of_filters_by_property() {
        let decls = vec![
            Declaration {
                property: "block-class",
                value: "foo-a",
                span: Span::new(0, 0, 2, 3),
            },
            Declaration {
                property: "block-interface-index",
                value: "1",
                span: Span::new(0, 0, 3, 3),
            },
        ];
        let rule = rule(".foo", decls);

        let found: Vec<_> = rule.declarations_of("block-interface-index").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "1");
        assert!(found[0].is_property("block-interface-index"));
    }

    #[test]
    fn declaration_of_returns_first() {
        let decls = vec![
            Declaration {
                property: "block-interface-index",
                value: "1",
                span: Span::new(0, 0, 2, 3),
            },
            Declaration {
                property: "block-interface-index",
                value: "2",
                span: Span::new(0, 0, 3, 3),
            },
        ];
        let rule = rule(".foo", decls);

        assert_eq!(rule.declaration_of("block-interface-index").unwrap().value, "1");
        assert_eq!(rule.declarations_of("block-interface-index").count(), 2);
        assert!(rule.declaration_of("block-name").is_none());
    }
}
