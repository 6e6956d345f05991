//! Structured highlighting over a tree-sitter parse.
//!
//! ## Learning: Result for Expected Failure
//!
//! Users type code that does not parse all the time. That is not an
//! exceptional situation, so the parse step returns
//! `Result<SyntaxTree, ParseFailure>` and the caller's `Err` arm is the
//! designed path into the regex fallback:
//!
//! ```text
//! match parser.parse(text, &lines) {
//!     Ok(tree) => highlight_structured(..),
//!     Err(failure) => highlight_basic(..),
//! }
//! ```
//!
//! tree-sitter itself never fails on bad input; it inserts ERROR and
//! MISSING nodes instead. Any such node counts as a failure for the whole
//! buffer.

use glint_buffer::Position;
use tracing::debug;

use crate::batch::TagSink;
use crate::language::{Language, LanguageDef};
use crate::mapper::{LineIndex, Token, position_of};
use crate::symbols::{ImportedSymbolTable, is_likely_class_name};
use crate::tree::{FlatNode, SyntaxTree};
use crate::{SyntaxError, SyntaxResult};

/// Why a buffer could not be highlighted structurally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("No grammar for {0}")]
    NoGrammar(Language),

    #[error("Syntax error at {0}")]
    Syntax(Position),

    #[error("Parser returned no tree")]
    Aborted,
}

/// A tree-sitter parser bound to one language.
pub struct StructuredParser {
    language: Language,
    parser: tree_sitter::Parser,
}

impl StructuredParser {
    pub fn new(language: Language) -> SyntaxResult<Self> {
        let grammar = language
            .grammar()
            .ok_or(SyntaxError::NoGrammar(language))?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| SyntaxError::Grammar(e.to_string()))?;

        Ok(Self { language, parser })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Parses the whole buffer.
    pub fn parse(&mut self, text: &str, lines: &LineIndex) -> Result<SyntaxTree, ParseFailure> {
        let tree = self.parser.parse(text, None).ok_or(ParseFailure::Aborted)?;
        let flat = SyntaxTree::from_tree(&tree, text, lines);
        if let Some(node) = flat.first_error() {
            debug!(language = %self.language, at = %node.start, kind = node.kind, "Parse failed");
            return Err(ParseFailure::Syntax(node.start));
        }
        Ok(flat)
    }
}

impl std::fmt::Debug for StructuredParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredParser")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Walk control returned by node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Visit the node's children next.
    Continue,
    /// The node's subtree is fully covered; skip it.
    Skip,
}

/// Emits tags for every node of a parsed buffer.
///
/// `symbols` must already hold this pass's imports so identifier nodes
/// can be matched against them.
pub fn highlight_structured(
    language: Language,
    tree: &SyntaxTree,
    text: &str,
    lines: &LineIndex,
    symbols: &ImportedSymbolTable,
    sink: &mut dyn TagSink,
) {
    let mut walk = Walk {
        language,
        def: language.def(),
        tree,
        text,
        lines,
        symbols,
        sink,
    };

    let mut id = 0;
    while id < tree.len() {
        id = match walk.step(id) {
            Flow::Continue => id + 1,
            Flow::Skip => tree.node(id).subtree_end,
        };
    }
}

// ==================== Walk Context ====================

/// Per-pass state shared with the per-language classifiers.
pub(crate) struct Walk<'a> {
    pub(crate) language: Language,
    pub(crate) def: &'static LanguageDef,
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) text: &'a str,
    pub(crate) lines: &'a LineIndex,
    pub(crate) symbols: &'a ImportedSymbolTable,
    sink: &'a mut dyn TagSink,
}

impl<'a> Walk<'a> {
    fn step(&mut self, id: usize) -> Flow {
        let node = self.node(id);

        if let (Some(field), Some(parent)) = (node.field, node.parent)
            && self.def.is_annotation_slot(self.kind(parent), field)
        {
            self.emit("type_annotation", id);
            return Flow::Skip;
        }

        if !node.named && self.def.is_keyword(node.kind) {
            let searched = node
                .parent
                .and_then(|p| self.def.line_keywords(self.kind(p)))
                .is_some_and(|words| words.contains(&node.kind));
            if !searched {
                self.emit("keyword", id);
            }
            return Flow::Continue;
        }

        let flow = self.language.classify_node(self, id);

        if let Some(words) = self.def.line_keywords(node.kind) {
            self.line_keywords(id, words);
        }
        flow
    }

    /// Tags `words` found on the node's start line.
    ///
    /// The search starts at the node's column and each keyword continues
    /// after the previous match. Boolean operators search only between
    /// their operands.
    fn line_keywords(&mut self, id: usize, words: &[&'static str]) {
        let node = self.node(id);
        let line_no = node.start.line;
        let line = self.lines.line(self.text, line_no);
        let mut from = node.start.column;
        let mut until = usize::MAX;

        if node.kind == "boolean_operator" {
            if let Some(left) = self.child(id, "left").map(|l| self.node(l))
                && left.end.line == line_no
            {
                from = left.end.column;
            }
            if let Some(right) = self.child(id, "right").map(|r| self.node(r))
                && right.start.line == line_no
            {
                until = right.start.column;
            }
        }

        for &word in words {
            let Some(column) = find_word(line, word, from) else {
                continue;
            };
            if column + word.chars().count() > until {
                continue;
            }
            let token = Token {
                start: Position::new(line_no, column),
                text: word,
            };
            let (start, end) = position_of(&token, self.lines, self.text);
            self.sink.emit("keyword", start, end);
            from = end.column;
        }
    }

    // ==================== Tree Queries ====================

    pub(crate) fn node(&self, id: usize) -> &'a FlatNode {
        let tree: &'a SyntaxTree = self.tree;
        tree.node(id)
    }

    pub(crate) fn kind(&self, id: usize) -> &'static str {
        self.tree.node(id).kind
    }

    pub(crate) fn text(&self, id: usize) -> &'a str {
        let tree: &'a SyntaxTree = self.tree;
        tree.text(id, self.text)
    }

    pub(crate) fn parent(&self, id: usize) -> Option<usize> {
        self.tree.node(id).parent
    }

    pub(crate) fn parent_kind(&self, id: usize) -> Option<&'static str> {
        self.parent(id).map(|p| self.kind(p))
    }

    pub(crate) fn field(&self, id: usize) -> Option<&'static str> {
        self.tree.node(id).field
    }

    pub(crate) fn child(&self, id: usize, field: &str) -> Option<usize> {
        self.tree.child_by_field(id, field)
    }

    /// Whether any ancestor has one of `kinds`.
    pub(crate) fn inside(&self, id: usize, kinds: &[&str]) -> bool {
        self.tree.ancestor(id, kinds).is_some()
    }

    /// Whether `id` lies within the `field` child of an ancestor of `kind`.
    pub(crate) fn within_field(&self, id: usize, kind: &str, field: &str) -> bool {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.kind(parent) == kind && self.field(current) == Some(field) {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Whether the node is the callee of a call or constructor expression.
    pub(crate) fn is_call_target(&self, id: usize) -> bool {
        matches!(
            (self.parent_kind(id), self.field(id)),
            (Some("call") | Some("call_expression"), Some("function"))
                | (Some("new_expression"), Some("constructor"))
        )
    }

    /// Class-likely call target becomes `class`, anything else `function`.
    pub(crate) fn callee_tag(&self, id: usize) -> &'static str {
        if is_likely_class_name(self.text(id)) {
            "class"
        } else {
            "function"
        }
    }

    // ==================== Emission ====================

    pub(crate) fn emit(&mut self, tag: &'static str, id: usize) {
        let node = self.node(id);
        self.sink.emit(tag, node.start, node.end);
    }

    pub(crate) fn emit_span(&mut self, tag: &'static str, start: Position, end: Position) {
        self.sink.emit(tag, start, end);
    }

    /// Tags `pkg.member` when `object` names an imported module or package.
    pub(crate) fn namespace_member(&mut self, object: usize, member: usize) -> bool {
        let Some(kind) = self.symbols.kind_of(self.text(object)) else {
            return false;
        };
        if !kind.is_namespace() {
            return false;
        }
        self.emit(kind.tag(), object);
        let member_kind = self.language.classify_member(self.text(member));
        self.emit(member_kind.tag(), member);
        true
    }
}

/// Character column of the first whole-word `word` at or after `from`.
fn find_word(line: &str, word: &str, from: usize) -> Option<usize> {
    let start = line
        .char_indices()
        .nth(from)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    line[start..]
        .match_indices(word)
        .map(|(i, _)| start + i)
        .find(|&at| {
            let before = line[..at].chars().next_back();
            let after = line[at + word.len()..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
        .map(|at| line[..at].chars().count())
}

/// Anonymous token made only of symbol characters, like `+` or `==`.
pub(crate) fn is_operator_token(node: &FlatNode) -> bool {
    !node.named && !node.kind.is_empty() && !node.kind.chars().any(char::is_alphanumeric)
}
