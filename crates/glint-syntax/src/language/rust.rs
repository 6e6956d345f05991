//! Rust node classification.

use crate::structured::{Flow, Walk, is_operator_token};
use crate::symbols::{is_constant_name, is_likely_class_name};

const TYPE_DEFINITIONS: &[&str] = &[
    "struct_item",
    "enum_item",
    "trait_item",
    "type_item",
    "union_item",
];

const OPERATOR_PARENTS: &[&str] = &[
    "binary_expression",
    "unary_expression",
    "compound_assignment_expr",
    "assignment_expression",
    "range_expression",
];

pub(crate) fn classify(walk: &mut Walk<'_>, id: usize) -> Flow {
    let node = walk.node(id);
    match node.kind {
        "attribute_item" | "inner_attribute_item" => {
            walk.emit("decorator", id);
            Flow::Skip
        }
        "line_comment" | "block_comment" => {
            walk.emit("comment", id);
            Flow::Skip
        }
        "string_literal" | "raw_string_literal" | "char_literal" => {
            walk.emit("string", id);
            Flow::Skip
        }
        "integer_literal" | "float_literal" => {
            walk.emit("number", id);
            Flow::Continue
        }
        "boolean_literal" => {
            walk.emit("boolean", id);
            Flow::Skip
        }
        "lifetime" => {
            walk.emit("lifetime", id);
            Flow::Skip
        }
        "primitive_type" => {
            walk.emit("type", id);
            Flow::Continue
        }
        "self" => {
            walk.emit("self", id);
            Flow::Continue
        }
        "crate" | "super" | "mutable_specifier" => {
            walk.emit("keyword", id);
            Flow::Skip
        }
        "macro_invocation" => {
            // name through the `!`
            let bang = node.children.iter().map(|&c| walk.node(c)).find(|c| c.kind == "!");
            if let Some(bang) = bang {
                walk.emit_span("macro", node.start, bang.end);
            }
            Flow::Continue
        }
        "identifier" => {
            identifier(walk, id);
            Flow::Continue
        }
        "type_identifier" => {
            type_identifier(walk, id);
            Flow::Continue
        }
        "field_identifier" => {
            let call = walk.parent_kind(id) == Some("field_expression")
                && walk.parent(id).is_some_and(|p| walk.is_call_target(p));
            walk.emit(if call { "function" } else { "property" }, id);
            Flow::Continue
        }
        "shorthand_field_identifier" => {
            walk.emit("property", id);
            Flow::Continue
        }
        _ => {
            if is_operator_token(node)
                && walk
                    .parent_kind(id)
                    .is_some_and(|p| OPERATOR_PARENTS.contains(&p))
            {
                walk.emit("operator", id);
            }
            Flow::Continue
        }
    }
}

fn identifier(walk: &mut Walk<'_>, id: usize) {
    let name = walk.text(id);
    let parent = walk.parent(id);
    let parent_kind = walk.parent_kind(id).unwrap_or("");
    let field = walk.field(id);

    if walk.within_field(id, "macro_invocation", "macro") {
        return;
    }

    if walk.inside(id, &["use_declaration"]) {
        let tag = if parent_kind == "use_as_clause" && field == Some("alias") {
            "variable"
        } else if field == Some("path") {
            "namespace"
        } else {
            match walk.symbols.kind_of(name) {
                Some(kind) if !kind.is_namespace() => kind.tag(),
                _ => "namespace",
            }
        };
        walk.emit(tag, id);
        return;
    }

    let tag = match (parent_kind, field) {
        ("function_item" | "function_signature_item", Some("name")) => Some("function"),
        ("mod_item", Some("name")) => Some("namespace"),
        ("macro_definition", Some("name")) => Some("macro"),
        ("const_item" | "static_item" | "enum_variant", Some("name")) => Some("constant"),
        _ if is_parameter(walk, id) => Some("parameter"),
        _ => None,
    };
    if let Some(tag) = tag {
        walk.emit(tag, id);
        return;
    }

    if let Some(kind) = walk.symbols.kind_of(name) {
        let call = walk.is_call_target(id);
        walk.emit(if call { imported_callee(name) } else { kind.tag() }, id);
        return;
    }

    let tag = match (parent_kind, field) {
        ("scoped_identifier", Some("path")) => {
            if is_likely_class_name(name) {
                "class"
            } else {
                "namespace"
            }
        }
        ("scoped_identifier", Some("name")) if parent.is_some_and(|p| walk.is_call_target(p)) => {
            walk.callee_tag(id)
        }
        _ if walk.is_call_target(id) => walk.callee_tag(id),
        _ if is_let_binding(walk, id) => "variable",
        _ if walk.def.is_builtin(name) => "builtin",
        _ if is_constant_name(name) && name.chars().count() > 1 => "constant",
        _ if is_likely_class_name(name) => "class",
        _ => "variable",
    };
    walk.emit(tag, id);
}

fn imported_callee(name: &str) -> &'static str {
    if is_likely_class_name(name) {
        "imported_class"
    } else {
        "imported_function"
    }
}

fn type_identifier(walk: &mut Walk<'_>, id: usize) {
    let name = walk.text(id);
    let parent_kind = walk.parent_kind(id).unwrap_or("");
    let field = walk.field(id);

    let defines = (TYPE_DEFINITIONS.contains(&parent_kind) && field == Some("name"))
        || (parent_kind == "impl_item" && matches!(field, Some("type") | Some("trait")));
    let tag = if defines {
        "class"
    } else if let Some(kind) = walk.symbols.kind_of(name) {
        kind.tag()
    } else {
        "type"
    };
    walk.emit(tag, id);
}

/// Bindings introduced by a function or closure parameter pattern.
fn is_parameter(walk: &Walk<'_>, id: usize) -> bool {
    let mut current = id;
    while let Some(parent) = walk.parent(current) {
        match walk.kind(parent) {
            "tuple_pattern" | "ref_pattern" | "mut_pattern" | "reference_pattern" => {
                current = parent;
            }
            "parameter" => return walk.field(current) == Some("pattern"),
            "closure_parameters" => return true,
            _ => return false,
        }
    }
    false
}

fn is_let_binding(walk: &Walk<'_>, id: usize) -> bool {
    let mut current = id;
    while let Some(parent) = walk.parent(current) {
        match walk.kind(parent) {
            "tuple_pattern" | "ref_pattern" | "mut_pattern" => current = parent,
            "let_declaration" | "for_expression" => return walk.field(current) == Some("pattern"),
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::Language;
    use crate::mapper::LineIndex;
    use crate::structured::{StructuredParser, highlight_structured};
    use glint_buffer::Position;

    fn tags(text: &str) -> Vec<(&'static str, String)> {
        let lines = LineIndex::new(text);
        let mut parser = StructuredParser::new(Language::Rust).unwrap();
        let tree = parser.parse(text, &lines).unwrap();
        let symbols = Language::Rust.extract_symbols(text);
        let mut out: Vec<(&'static str, Position, Position)> = Vec::new();
        highlight_structured(Language::Rust, &tree, text, &lines, &symbols, &mut out);
        out.into_iter()
            .map(|(tag, s, e)| {
                let (a, b) = (lines.offset_of(text, s), lines.offset_of(text, e));
                (tag, text[a..b].to_string())
            })
            .collect()
    }

    fn has(tags: &[(&'static str, String)], tag: &str, text: &str) -> bool {
        tags.iter().any(|(t, s)| *t == tag && s == text)
    }

    const SOURCE: &str = r#"use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
struct Point {
    x: i32,
}

fn main(count: usize) -> bool {
    let mut map = HashMap::new();
    let total = count * 2;
    println!("{}", total);
    map.insert(count, 'a');
    // done
    true
}
"#;

    #[test]
    fn test_items_and_bindings() {
        let tags = tags(SOURCE);
        assert!(has(&tags, "keyword", "use"));
        assert!(has(&tags, "namespace", "std"));
        assert!(has(&tags, "imported_type", "HashMap"));
        assert!(has(&tags, "namespace", "fmt"));
        assert!(has(&tags, "decorator", "#[derive(Debug)]"));
        assert!(has(&tags, "keyword", "struct"));
        assert!(has(&tags, "class", "Point"));
        assert!(has(&tags, "property", "x"));
        assert!(has(&tags, "type", "i32"));
        assert!(has(&tags, "keyword", "fn"));
        assert!(has(&tags, "function", "main"));
        assert!(has(&tags, "parameter", "count"));
        assert!(has(&tags, "type_annotation", "usize"));
        assert!(has(&tags, "type_annotation", "bool"));
    }

    #[test]
    fn test_expressions() {
        let tags = tags(SOURCE);
        assert!(has(&tags, "keyword", "let"));
        assert!(has(&tags, "keyword", "mut"));
        assert!(has(&tags, "variable", "map"));
        assert!(has(&tags, "function", "new"));
        assert!(has(&tags, "operator", "*"));
        assert!(has(&tags, "number", "2"));
        assert!(has(&tags, "macro", "println!"));
        assert!(has(&tags, "string", "\"{}\""));
        assert!(has(&tags, "function", "insert"));
        assert!(has(&tags, "string", "'a'"));
        assert!(tags.iter().any(|(t, s)| *t == "comment" && s.starts_with("// done")));
        assert!(has(&tags, "boolean", "true"));
    }

    #[test]
    fn test_control_flow_and_lifetimes() {
        let tags = tags(
            "fn pick<'a>(xs: &'a [u8]) -> &'a u8 {\n    for x in xs {\n        if *x > 0 { return x; }\n    }\n    loop {}\n}\n",
        );
        assert!(has(&tags, "lifetime", "'a"));
        assert!(has(&tags, "keyword", "for"));
        assert!(has(&tags, "keyword", "in"));
        assert!(has(&tags, "keyword", "if"));
        assert!(has(&tags, "keyword", "loop"));
        assert!(has(&tags, "keyword", "return"));
        assert!(has(&tags, "variable", "x"));
    }
}
