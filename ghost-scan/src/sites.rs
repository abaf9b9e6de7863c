//! Call-site extraction: which component calls `useGhost`, with which alias.
//!
//! Sources are parsed with tree-sitter (`tsx` grammar for `.tsx`/`.js`/`.jsx`,
//! `typescript` for `.ts`). A walk over the syntax tree keeps a stack of
//! component scopes, opened on entering
//!
//! ```text
//! function Name(…) { … }
//! const Name = (…) => …
//! const Name = function (…) { … }
//! ```
//!
//! and closed on leaving that node. Each `useGhost(…)` call is attributed to
//! the innermost open scope. This cannot see render order; every site is
//! reported once, in source order.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::ScanError;

/// The hook whose calls are collected.
pub const HOOK_NAME: &str = "useGhost";

/// Component name used for calls outside any recognised component.
pub const UNKNOWN_COMPONENT: &str = "Unknown";

/// One `useGhost(…)` call found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub component: String,
    pub alias: Option<String>,
    pub line: usize,
}

/// Grammar a file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Plain TypeScript, where `<T>expr` is a type assertion.
    TypeScript,
    /// TypeScript with JSX; also accepts JavaScript and JSX.
    #[default]
    Tsx,
}

impl Dialect {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => Dialect::TypeScript,
            _ => Dialect::Tsx,
        }
    }
}

/// Reusable parsers, one per dialect.
pub struct SiteFinder {
    typescript: Parser,
    tsx: Parser,
}

impl SiteFinder {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            typescript: parser_for(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?,
            tsx: parser_for(tree_sitter_typescript::LANGUAGE_TSX.into())?,
        })
    }

    /// Every hook call in `source`, attributed to its innermost component.
    ///
    /// `None` only when the parser gives up without producing a tree.
    pub fn find(&mut self, source: &str, dialect: Dialect) -> Option<Vec<CallSite>> {
        let parser = match dialect {
            Dialect::TypeScript => &mut self.typescript,
            Dialect::Tsx => &mut self.tsx,
        };
        let tree = parser.parse(source, None)?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("source has syntax errors; call sites may be incomplete");
        }
        Some(collect(root, source.as_bytes()))
    }
}

fn parser_for(language: Language) -> Result<Parser, ScanError> {
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    Ok(parser)
}

/// Depth-first walk with enter/exit hooks, driven by a tree cursor.
fn collect(root: Node<'_>, src: &[u8]) -> Vec<CallSite> {
    let mut sites = Vec::new();
    let mut scopes: Vec<(String, usize)> = Vec::new();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        if let Some(name) = component_name(node, src) {
            scopes.push((name, node.id()));
        }
        if let Some(alias) = hook_call(node, src) {
            let component = scopes
                .last()
                .map_or(UNKNOWN_COMPONENT, |(name, _)| name.as_str());
            sites.push(CallSite {
                component: component.to_string(),
                alias,
                line: node.start_position().row + 1,
            });
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            let leaving = cursor.node().id();
            if scopes.last().is_some_and(|(_, id)| *id == leaving) {
                scopes.pop();
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return sites;
            }
        }
    }
}

/// The component a node declares, if it opens a component scope.
fn component_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    let name = match node.kind() {
        "function_declaration" | "generator_function_declaration" => node.child_by_field_name("name")?,
        "variable_declarator" => {
            let value = node.child_by_field_name("value")?;
            if !matches!(value.kind(), "arrow_function" | "function_expression" | "function") {
                return None;
            }
            node.child_by_field_name("name")?
        }
        _ => return None,
    };
    if name.kind() != "identifier" {
        return None;
    }
    let name = name.utf8_text(src).ok()?;
    is_component_name(name).then(|| name.to_string())
}

/// `Some(alias)` when `node` is a direct `useGhost(…)` call.
///
/// The alias is the first argument when it is a plain string literal;
/// template literals, identifiers and empty strings give no alias.
fn hook_call(node: Node<'_>, src: &[u8]) -> Option<Option<String>> {
    if node.kind() != "call_expression" {
        return None;
    }
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "identifier" || callee.utf8_text(src).ok()? != HOOK_NAME {
        return None;
    }
    let first = node.child_by_field_name("arguments").and_then(|args| {
        let mut cursor = args.walk();
        let first = args
            .named_children(&mut cursor)
            .find(|arg| arg.kind() != "comment");
        first
    });
    let alias = first
        .filter(|arg| arg.kind() == "string")
        .map(|arg| string_value(arg, src))
        .filter(|alias| !alias.is_empty());
    Some(alias)
}

fn string_value(node: Node<'_>, src: &[u8]) -> String {
    let mut out = String::new();
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        let Ok(text) = part.utf8_text(src) else { continue };
        match part.kind() {
            "string_fragment" => out.push_str(text),
            "escape_sequence" => unescape_into(text, &mut out),
            _ => {}
        }
    }
    out
}

fn unescape_into(seq: &str, out: &mut String) {
    let body = seq.strip_prefix('\\').unwrap_or(seq);
    let mut chars = body.chars();
    let decoded = match chars.next() {
        Some('n') => Some('\n'),
        Some('t') => Some('\t'),
        Some('r') => Some('\r'),
        Some('b') => Some('\u{8}'),
        Some('f') => Some('\u{c}'),
        Some('v') => Some('\u{b}'),
        Some('0') if body.len() == 1 => Some('\0'),
        Some('x' | 'u') => {
            let hex = chars.as_str().trim_start_matches('{').trim_end_matches('}');
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }
        // Line continuation.
        Some('\n' | '\r') => None,
        Some(other) => Some(other),
        None => None,
    };
    out.extend(decoded);
}

fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
