//! Top-level statement parsing
//!
//! Wraps the tree-sitter JavaScript grammar and reduces a source file to the
//! flat list of top-level statements the binding extractor works on. Nothing
//! below the top level is inspected except variable declarators.

use crate::{Error, Result};
use std::ops::Range;
use tree_sitter::{Language, Node, Parser};

/// What a top-level statement declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `function name() {}` (including generator declarations)
    FunctionDeclaration { name: String },
    /// `var`, `let` or `const` with one or more declarators
    VariableDeclaration { declarators: Vec<Declarator> },
    /// Anything else; ignored by extraction
    Other,
}

/// One `name = init` entry of a variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    /// Source text of the binding target
    pub name: String,
    /// Shape of the initializer
    pub init: InitializerKind,
}

/// Initializer classification for a declarator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializerKind {
    /// `function () {}`, including async and generator forms
    FunctionExpression,
    /// `() => {}`
    ArrowFunction,
    /// Any other expression
    Other,
    /// No initializer at all (`var x;`)
    None,
}

impl InitializerKind {
    pub fn is_function(&self) -> bool {
        matches!(self, InitializerKind::FunctionExpression | InitializerKind::ArrowFunction)
    }
}

/// A top-level statement with its byte range into the parsed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatement {
    pub kind: StatementKind,
    /// Half-open byte range `[start, end)`
    pub range: Range<usize>,
}

/// Turns JavaScript text into top-level statements
pub trait SourceParser {
    /// Parse a whole script. Malformed input is an `Error::Parse`.
    fn parse(&self, source: &str) -> Result<Vec<SourceStatement>>;
}

/// `SourceParser` backed by tree-sitter-javascript
pub struct TreeSitterParser {
    language: Language,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    fn classify(&self, node: Node, source: &str) -> Result<StatementKind> {
        let kind = match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                let name_node = node
                    .child_by_field_name("name")
                    .ok_or_else(|| Error::Parse(format!("function declaration without a name at {}", position(node))))?;
                StatementKind::FunctionDeclaration {
                    name: node_text(name_node, source)?.to_string(),
                }
            }
            "variable_declaration" | "lexical_declaration" => {
                let mut cursor = node.walk();
                let mut declarators = Vec::new();
                for child in node.named_children(&mut cursor) {
                    if child.kind() != "variable_declarator" {
                        continue;
                    }
                    let name_node = child
                        .child_by_field_name("name")
                        .ok_or_else(|| Error::Parse(format!("declarator without a target at {}", position(child))))?;
                    declarators.push(Declarator {
                        name: node_text(name_node, source)?.to_string(),
                        init: initializer_kind(child.child_by_field_name("value")),
                    });
                }
                StatementKind::VariableDeclaration { declarators }
            }
            _ => StatementKind::Other,
        };
        Ok(kind)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for TreeSitterParser {
    fn parse(&self, source: &str) -> Result<Vec<SourceStatement>> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)
            .map_err(|e| Error::Parser(format!("Failed to set language: {}", e)))?;

        let tree = parser.parse(source, None)
            .ok_or_else(|| Error::Parser("Failed to parse file".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root);
            let what = if at.is_missing() { "missing token" } else { "unexpected syntax" };
            return Err(Error::Parse(format!("{} at {}", what, position(at))));
        }

        let mut cursor = root.walk();
        let mut statements = Vec::new();
        for node in root.named_children(&mut cursor) {
            let kind = self.classify(node, source)?;
            let end = content_end(node);
            tracing::trace!("{} statement at {}..{}", node.kind(), node.start_byte(), end);
            statements.push(SourceStatement {
                kind,
                range: node.start_byte()..end,
            });
        }
        Ok(statements)
    }
}

fn initializer_kind(value: Option<Node>) -> InitializerKind {
    let Some(mut value) = value else {
        return InitializerKind::None;
    };
    // `(function () {})` is still a function expression
    while value.kind() == "parenthesized_expression" {
        match value.named_child(0) {
            Some(inner) => value = inner,
            None => return InitializerKind::Other,
        }
    }
    match value.kind() {
        "function_expression" | "function" | "generator_function" => InitializerKind::FunctionExpression,
        "arrow_function" => InitializerKind::ArrowFunction,
        _ => InitializerKind::Other,
    }
}

/// End of a statement's own tokens.
///
/// Without a semicolon the grammar closes the statement after a comment on the
/// same line, so trailing comments and the zero-width automatic semicolon are
/// not part of the statement text.
fn content_end(node: Node) -> usize {
    let mut cursor = node.walk();
    let last = node
        .children(&mut cursor)
        .filter(|c| !c.is_extra() && c.end_byte() > c.start_byte())
        .last();
    match last {
        Some(child) => content_end(child),
        None => node.end_byte(),
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

fn node_text<'a>(node: Node, source: &'a str) -> Result<&'a str> {
    source
        .get(node.start_byte()..node.end_byte())
        .ok_or_else(|| Error::Parse(format!("node range is not valid UTF-8 at {}", position(node))))
}

fn position(node: Node) -> String {
    let point = node.start_position();
    format!("line {}, column {}", point.row + 1, point.column + 1)
}
