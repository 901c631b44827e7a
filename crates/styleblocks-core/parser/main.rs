//! Main parser coordination and recovery logic
//!
//! Contains the core `Parser` struct that scans a definition file into rules
//! and declarations, tracking line/column positions and recovering from
//! malformed constructs by skipping to the next safe boundary.

use crate::DefinitionVersion;

use super::{
    ast::{parse_selector_list, Declaration, Rule, Span},
    document::Document,
    errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue},
};

/// Internal parser state for scanning a definition file
pub(super) struct Parser<'a> {
    /// Source text being parsed
    source: &'a str,
    /// Current byte position in source
    position: usize,
    /// Current line number for error reporting (1-based)
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
    /// Detected syntax version
    version: DefinitionVersion,
    /// Parsed rules accumulated so far
    rules: Vec<Rule<'a>>,
    /// Parse issues and warnings
    issues: Vec<ParseIssue>,
}

impl<'a> Parser<'a> {
    /// Create new parser for source text
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            line_start: 0,
            version: DefinitionVersion::CURRENT,
            rules: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Parse the complete definition file
    pub fn parse(mut self) -> Document<'a> {
        if self.source.starts_with('\u{FEFF}') {
            self.position = 3;
            self.line_start = 3;
        }

        loop {
            self.skip_trivia();
            if self.position >= self.source.len() {
                break;
            }

            match self.source.as_bytes()[self.position] {
                b'@' => self.parse_at_rule(),
                b'}' => {
                    self.push_error(
                        IssueCategory::Structure,
                        ParseError::UnexpectedCloseBrace { line: self.line },
                    );
                    self.advance_to(self.position + 1);
                }
                _ => self.parse_rule(),
            }
        }

        Document::from_parts(self.source, self.version, self.rules, self.issues)
    }

    /// Parse one rule: selector prelude, `{`, declarations, `}`
    fn parse_rule(&mut self) {
        let rule_start = self.position;
        let rule_line = self.line;
        let rule_column = self.column();

        let Some((open, _)) = self.find_unquoted(self.position, &[b'{']) else {
            self.push_error(
                IssueCategory::Structure,
                ParseError::UnclosedRule { line: rule_line },
            );
            self.advance_to(self.source.len());
            return;
        };

        let prelude = self.source[rule_start..open].trim_end();
        let prelude_span = Span::new(
            rule_start,
            rule_start + prelude.len(),
            truncate(rule_line),
            truncate(rule_column),
        );

        self.advance_to(open + 1);

        if prelude.is_empty() {
            self.push_error(
                IssueCategory::Structure,
                ParseError::ExpectedSelector { line: rule_line },
            );
            self.skip_declarations();
            return;
        }

        let selectors = match parse_selector_list(prelude, prelude_span) {
            Ok(selectors) => Some(selectors),
            Err(e) => {
                self.issues.push(
                    ParseIssue::error(
                        IssueCategory::Selector,
                        format!("Invalid selector `{prelude}`: {e}"),
                        rule_line,
                    )
                    .at_column(rule_column),
                );
                None
            }
        };

        let declarations = self.parse_declarations(rule_line);

        // A rule whose prelude failed to parse is dropped after its body is
        // consumed, so one bad selector cannot poison later rules.
        if let Some(selectors) = selectors {
            self.rules.push(Rule {
                prelude,
                selectors,
                declarations,
                span: Span::new(
                    rule_start,
                    self.position,
                    truncate(rule_line),
                    truncate(rule_column),
                ),
            });
        }
    }

    /// Parse declarations until the closing `}` of the current rule
    fn parse_declarations(&mut self, rule_line: usize) -> Vec<Declaration<'a>> {
        let mut declarations = Vec::new();

        loop {
            self.skip_trivia();
            if self.position >= self.source.len() {
                self.push_error(
                    IssueCategory::Structure,
                    ParseError::UnclosedRule { line: rule_line },
                );
                break;
            }
            if self.source.as_bytes()[self.position] == b'}' {
                self.advance_to(self.position + 1);
                break;
            }
            if self.source.as_bytes()[self.position] == b';' {
                self.advance_to(self.position + 1);
                continue;
            }

            if let Some(declaration) = self.parse_declaration() {
                declarations.push(declaration);
            }
        }

        declarations
    }

    /// Parse a single `property: value` declaration
    fn parse_declaration(&mut self) -> Option<Declaration<'a>> {
        let decl_start = self.position;
        let decl_line = self.line;
        let decl_column = self.column();

        let terminator = self.find_unquoted(self.position, &[b':', b';', b'}']);
        let Some((colon, b':')) = terminator else {
            self.issues.push(
                ParseIssue::error(
                    IssueCategory::Declaration,
                    "Declaration is missing ':'".to_string(),
                    decl_line,
                )
                .at_column(decl_column),
            );
            // Skip the malformed fragment up to its terminator; the closing
            // brace stays put for the declaration loop.
            match terminator {
                Some((stop, b'}')) => self.advance_to(stop),
                Some((stop, _)) => self.advance_to(stop + 1),
                None => self.advance_to(self.source.len()),
            }
            return None;
        };

        let property = self.source[decl_start..colon].trim_end();

        let (value_end, terminated_by) = self
            .find_unquoted(colon + 1, &[b';', b'}'])
            .unwrap_or((self.source.len(), b';'));
        let value = self.source[colon + 1..value_end].trim();

        self.advance_to(if terminated_by == b'}' {
            value_end
        } else {
            (value_end + 1).min(self.source.len())
        });

        if property.is_empty() || property.contains(char::is_whitespace) {
            self.issues.push(
                ParseIssue::error(
                    IssueCategory::Declaration,
                    format!("Invalid property name `{property}`"),
                    decl_line,
                )
                .at_column(decl_column),
            );
            return None;
        }

        Some(Declaration {
            property,
            value,
            span: Span::new(
                decl_start,
                value_end,
                truncate(decl_line),
                truncate(decl_column),
            ),
        })
    }

    /// Parse an at-rule such as `@block-syntax-version 1;`
    fn parse_at_rule(&mut self) {
        let at_line = self.line;
        let at_column = self.column();

        let Some((semi, _)) = self.find_unquoted(self.position, &[b';']) else {
            self.push_error(
                IssueCategory::Structure,
                ParseError::UnterminatedAtRule { line: at_line },
            );
            self.advance_to(self.source.len());
            return;
        };

        let body = &self.source[self.position + 1..semi];
        self.advance_to(semi + 1);

        let (name, argument) = match body.find(|c: char| c.is_whitespace() || c == ':') {
            Some(split) => (&body[..split], body[split..].trim_start_matches(':').trim()),
            None => (body, ""),
        };

        if name == "block-syntax-version" {
            let raw = crate::utils::strip_quotes(argument);
            match DefinitionVersion::from_declaration(raw) {
                Some(version) => self.version = version,
                None => self.issues.push(
                    ParseIssue::warning(
                        IssueCategory::Version,
                        format!("Unknown block syntax version `{raw}`"),
                        at_line,
                    )
                    .at_column(at_column),
                ),
            }
        } else {
            self.issues.push(
                ParseIssue::warning(
                    IssueCategory::Structure,
                    format!("Unknown at-rule `@{name}`"),
                    at_line,
                )
                .at_column(at_column),
            );
        }
    }

    /// Consume a rule body whose prelude was malformed
    fn skip_declarations(&mut self) {
        match self.find_unquoted(self.position, &[b'}']) {
            Some((close, _)) => self.advance_to(close + 1),
            None => self.advance_to(self.source.len()),
        }
    }

    /// Skip whitespace and `/* */` comments
    fn skip_trivia(&mut self) {
        loop {
            let rest = &self.source[self.position..];
            let trimmed = rest.trim_start();
            if trimmed.len() != rest.len() {
                self.advance_to(self.position + (rest.len() - trimmed.len()));
                continue;
            }

            if trimmed.starts_with("/*") {
                let comment_line = self.line;
                match trimmed[2..].find("*/") {
                    Some(close) => self.advance_to(self.position + 2 + close + 2),
                    None => {
                        self.push_error(
                            IssueCategory::Structure,
                            ParseError::UnclosedComment { line: comment_line },
                        );
                        self.advance_to(self.source.len());
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Find the first of `stops` at or after `from`, skipping quoted strings
    fn find_unquoted(&self, from: usize, stops: &[u8]) -> Option<(usize, u8)> {
        let bytes = self.source.as_bytes();
        let mut quote: Option<u8> = None;
        let mut i = from;
        while i < bytes.len() {
            let b = bytes[i];
            match quote {
                Some(q) => {
                    if b == q {
                        quote = None;
                    }
                }
                None => {
                    if b == b'"' || b == b'\'' {
                        quote = Some(b);
                    } else if stops.contains(&b) {
                        return Some((i, b));
                    }
                }
            }
            i += 1;
        }
        None
    }

    /// Advance to a byte position, updating line tracking
    fn advance_to(&mut self, new_position: usize) {
        let upto = new_position.min(self.source.len());
        let bytes = self.source.as_bytes();
        let mut i = self.position;
        while i < upto {
            if bytes[i] == b'\n' {
                self.line += 1;
                self.line_start = i + 1;
            }
            i += 1;
        }
        self.position = upto;
    }

    /// Current column (1-based, bytes from line start)
    const fn column(&self) -> usize {
        self.position - self.line_start + 1
    }

    /// Record an error-severity issue from a structural parse error
    fn push_error(&mut self, category: IssueCategory, error: ParseError) {
        let line = error.line();
        self.issues
            .push(ParseIssue::new(
                IssueSeverity::Error,
                category,
                error.to_string(),
                line,
            ));
    }
}

/// Narrow a usize position to the u32 stored in spans
fn truncate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Document<'_> {
        Parser::new(source).parse()
    }

    #[test]
    fn parses_rule_with_declarations() {
        let document = parse(".foo { block-class: foo-cls; block-interface-index: 1; }");
        assert_eq!(document.rules().len(), 1);

        let rule = &document.rules()[0];
        assert_eq!(rule.prelude, ".foo");
        assert_eq!(rule.selectors.len(), 1);
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations[0].property, "block-class");
        assert_eq!(rule.declarations[0].value, "foo-cls");
        assert_eq!(rule.declarations[1].property, "block-interface-index");
        assert_eq!(rule.declarations[1].value, "1");
    }

    #[test]
    fn tracks_lines_and_columns() {
        let document = parse(":scope {\n  block-interface-index: 0;\n}\n.foo {\n  block-interface-index: 1;\n}");
        let rules = document.rules();
        assert_eq!(rules.len(), 2);

        let first_decl = &rules[0].declarations[0];
        assert_eq!(first_decl.span.line, 2);
        assert_eq!(first_decl.span.column, 3);

        assert_eq!(rules[1].span.line, 4);
        let second_decl = &rules[1].declarations[0];
        assert_eq!(second_decl.span.line, 5);
        assert_eq!(second_decl.span.column, 3);
    }

    #[test]
    fn preserves_quoted_values() {
        let document = parse(".foo { block-interface-index: \"2\"; }");
        assert_eq!(document.rules()[0].declarations[0].value, "\"2\"");
    }

    #[test]
    fn quoted_semicolon_stays_in_value() {
        let document = parse(":scope { block-id: \"a;b\"; }");
        assert_eq!(document.rules()[0].declarations[0].value, "\"a;b\"");
    }

    #[test]
    fn skips_comments() {
        let document = parse("/* header */\n.foo { /* inline */ block-interface-index: 1; }");
        assert_eq!(document.rules().len(), 1);
        assert_eq!(document.rules()[0].declarations.len(), 1);
        assert!(document.issues().is_empty());
    }

    #[test]
    fn recovers_from_bad_selector() {
        let document = parse("div span { color: red; }\n.foo { block-interface-index: 1; }");
        assert_eq!(document.rules().len(), 1);
        assert_eq!(document.rules()[0].prelude, ".foo");
        assert_eq!(document.issues().len(), 1);
        assert!(document.issues()[0].message.contains("Invalid selector"));
        assert!(document.has_errors());
    }

    #[test]
    fn recovers_from_missing_colon() {
        let document = parse(".foo { nonsense; block-interface-index: 1; }");
        let rule = &document.rules()[0];
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(rule.declarations[0].property, "block-interface-index");
        assert_eq!(document.issues().len(), 1);
        assert!(document.issues()[0].message.contains("missing ':'"));
    }

    #[test]
    fn last_declaration_may_omit_semicolon() {
        let document = parse(".foo { block-interface-index: 1 }");
        let rule = &document.rules()[0];
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(rule.declarations[0].value, "1");
    }

    #[test]
    fn reports_unclosed_rule() {
        let document = parse(".foo { block-interface-index: 1;");
        assert!(document.has_errors());
        assert!(document.issues().iter().any(|i| i.message.contains("Unclosed rule")));
    }

    #[test]
    fn reports_stray_close_brace() {
        let document = parse("}\n.foo { }");
        assert_eq!(document.rules().len(), 1);
        assert!(document.issues().iter().any(|i| i.message.contains("Unexpected '}'")));
    }

    #[test]
    fn reports_missing_selector() {
        let document = parse("{ block-interface-index: 1; }\n.foo { }");
        assert_eq!(document.rules().len(), 1);
        assert!(document
            .issues()
            .iter()
            .any(|i| i.message.contains("Expected a selector")));
    }

    #[test]
    fn unknown_at_rule_is_warning() {
        let document = parse("@media screen;\n.foo { }");
        assert_eq!(document.rules().len(), 1);
        assert!(!document.has_errors());
        assert!(document.issues()[0].message.contains("Unknown at-rule"));
    }

    #[test]
    fn unknown_syntax_version_is_warning() {
        let document = parse("@block-syntax-version 99;\n.foo { }");
        assert_eq!(document.version(), DefinitionVersion::V1);
        assert!(!document.has_errors());
        assert!(document.issues()[0]
            .message
            .contains("Unknown block syntax version `99`"));
    }

    #[test]
    fn version_at_rule_accepts_colon_form() {
        let document = parse("@block-syntax-version: 1;\n.foo { }");
        assert_eq!(document.version(), DefinitionVersion::V1);
        assert!(document.issues().is_empty());
    }

    #[test]
    fn unclosed_comment_reported() {
        let document = parse(".foo { } /* trailing");
        assert_eq!(document.rules().len(), 1);
        assert!(document.issues().iter().any(|i| i.message.contains("Unclosed comment")));
    }
}
