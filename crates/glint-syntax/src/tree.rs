//! Flattened syntax tree.
//!
//! ## Learning: Arenas Instead of Parent Pointers
//!
//! tree-sitter nodes can walk down cheaply but asking "who is my parent?"
//! repeatedly is awkward. Rather than building a map keyed by node identity,
//! one preorder walk copies every node into a `Vec` and records indices:
//!
//! ```text
//! 0 module            parent: -      children: [1]
//! 1 import_statement  parent: 0      children: [2, 3]
//! 2 "import"          parent: 1      children: []
//! 3 dotted_name       parent: 1      children: [4]
//! 4 identifier        parent: 3      children: []
//! ```
//!
//! Because the order is preorder, a node's whole subtree occupies the
//! contiguous index range `id..subtree_end`, which makes "skip this
//! subtree" a single assignment.

use glint_buffer::Position;

use crate::mapper::LineIndex;

/// One node of a [`SyntaxTree`].
#[derive(Debug, Clone)]
pub struct FlatNode {
    /// Grammar node kind, or the literal token text for anonymous nodes.
    pub kind: &'static str,
    pub named: bool,
    /// Field name under the parent, e.g. `name` or `return_type`.
    pub field: Option<&'static str>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub start_byte: usize,
    pub end_byte: usize,
    pub start: Position,
    pub end: Position,
    /// One past the last index of this node's subtree.
    pub subtree_end: usize,
}

/// Arena copy of a parse tree, indexed in preorder.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<FlatNode>,
    first_error: Option<usize>,
}

impl SyntaxTree {
    /// Flattens a tree-sitter tree.
    pub fn from_tree(tree: &tree_sitter::Tree, text: &str, lines: &LineIndex) -> Self {
        let mut nodes: Vec<FlatNode> = Vec::new();
        let mut first_error = None;
        let mut stack: Vec<usize> = Vec::new();
        let mut cursor = tree.walk();

        loop {
            let node = cursor.node();
            let id = nodes.len();
            let parent = stack.last().copied();
            if let Some(p) = parent {
                nodes[p].children.push(id);
            }
            if first_error.is_none() && (node.is_error() || node.is_missing()) {
                first_error = Some(id);
            }

            let start = node.start_position();
            let end = node.end_position();
            nodes.push(FlatNode {
                kind: node.kind(),
                named: node.is_named(),
                field: cursor.field_name(),
                parent,
                children: Vec::new(),
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
                start: lines.position_of_point(text, start.row, start.column),
                end: lines.position_of_point(text, end.row, end.column),
                subtree_end: id + 1,
            });

            if cursor.goto_first_child() {
                stack.push(id);
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Self { nodes, first_error };
                }
                if let Some(done) = stack.pop() {
                    nodes[done].subtree_end = nodes.len();
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Panics if `id` is out of range; ids come from this tree.
    pub fn node(&self, id: usize) -> &FlatNode {
        &self.nodes[id]
    }

    pub fn get(&self, id: usize) -> Option<&FlatNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    /// Source text of a node.
    pub fn text<'t>(&self, id: usize, text: &'t str) -> &'t str {
        let node = &self.nodes[id];
        text.get(node.start_byte..node.end_byte).unwrap_or("")
    }

    pub fn child_by_field(&self, id: usize, field: &str) -> Option<usize> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].field == Some(field))
    }

    /// Nearest ancestor (excluding `id`) whose kind is one of `kinds`.
    pub fn ancestor(&self, id: usize, kinds: &[&str]) -> Option<usize> {
        let mut current = self.nodes[id].parent;
        while let Some(p) = current {
            if kinds.contains(&self.nodes[p].kind) {
                return Some(p);
            }
            current = self.nodes[p].parent;
        }
        None
    }

    /// First ERROR or MISSING node, if any.
    pub fn first_error(&self) -> Option<&FlatNode> {
        self.first_error.map(|id| &self.nodes[id])
    }

    pub fn has_error(&self) -> bool {
        self.first_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    fn parse(lang: Language, text: &str) -> SyntaxTree {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&lang.grammar().unwrap()).unwrap();
        let tree = parser.parse(text, None).unwrap();
        SyntaxTree::from_tree(&tree, text, &LineIndex::new(text))
    }

    #[test]
    fn test_preorder_with_parents() {
        let text = "import os";
        let tree = parse(Language::Python, text);

        assert_eq!(tree.node(0).kind, "module");
        assert_eq!(tree.node(0).parent, None);
        assert_eq!(tree.node(0).subtree_end, tree.len());

        let import = tree.node(1);
        assert_eq!(import.kind, "import_statement");
        assert_eq!(import.parent, Some(0));
        assert_eq!(tree.node(2).kind, "import");
        assert!(!tree.node(2).named);

        let name = tree.child_by_field(1, "name").unwrap();
        assert_eq!(tree.node(name).kind, "dotted_name");
        assert_eq!(tree.text(name, text), "os");
        assert_eq!(tree.node(name).start, Position::new(1, 7));
        assert!(!tree.has_error());
    }

    #[test]
    fn test_subtree_ranges_are_contiguous() {
        let text = "def f(a, b):\n    return a + b\n";
        let tree = parse(Language::Python, text);
        for (id, node) in tree.nodes().iter().enumerate() {
            assert!(node.subtree_end > id);
            for &child in &node.children {
                assert_eq!(tree.node(child).parent, Some(id));
                assert!(child > id && child < node.subtree_end);
            }
        }
        let ret = tree.nodes().iter().position(|n| n.kind == "return_statement").unwrap();
        assert_eq!(
            tree.ancestor(ret, &["function_definition"]).map(|id| tree.node(id).kind),
            Some("function_definition")
        );
    }

    #[test]
    fn test_error_detection() {
        let tree = parse(Language::Python, "def f(:\n");
        assert!(tree.has_error());
        assert!(tree.first_error().is_some());
    }

    #[test]
    fn test_positions_use_char_columns() {
        let text = "s = \"é\" + x";
        let tree = parse(Language::Python, text);
        let x = tree
            .nodes()
            .iter()
            .rposition(|n| n.kind == "identifier")
            .unwrap();
        assert_eq!(tree.node(x).start, Position::new(1, 10));
    }
}
