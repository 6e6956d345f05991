//! Python node classification.

use crate::structured::{Flow, Walk, is_operator_token};
use crate::symbols::{is_constant_name, is_dunder, is_likely_class_name};

const IMPORTS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

const OPERATOR_PARENTS: &[&str] = &[
    "binary_operator",
    "comparison_operator",
    "unary_operator",
    "augmented_assignment",
];

pub(crate) fn classify(walk: &mut Walk<'_>, id: usize) -> Flow {
    let node = walk.node(id);
    match node.kind {
        "dotted_name" | "relative_import" if walk.inside(id, IMPORTS) => {
            walk.emit("namespace", id);
            Flow::Skip
        }
        "identifier" => {
            identifier(walk, id);
            Flow::Continue
        }
        "attribute" => {
            match (walk.child(id, "object"), walk.child(id, "attribute")) {
                (Some(object), Some(member))
                    if walk.kind(object) == "identifier" && walk.namespace_member(object, member) =>
                {
                    Flow::Skip
                }
                _ => Flow::Continue,
            }
        }
        "decorator" => {
            // the node also spans the trailing newline
            let end = node
                .children
                .iter()
                .rev()
                .map(|&c| walk.node(c))
                .find(|c| c.named)
                .map_or(node.end, |c| c.end);
            walk.emit_span("decorator", node.start, end);
            Flow::Skip
        }
        "string" => {
            walk.emit(string_tag(walk.text(id)), id);
            Flow::Skip
        }
        "integer" | "float" => {
            walk.emit("number", id);
            Flow::Continue
        }
        "true" | "false" => {
            walk.emit("boolean", id);
            Flow::Skip
        }
        "none" => {
            walk.emit("null", id);
            Flow::Skip
        }
        "comment" => {
            walk.emit("comment", id);
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

/// Docstrings are triple quoted; prefixes pick the string flavor.
fn string_tag(text: &str) -> &'static str {
    let prefix_len = text.find(['"', '\'']).unwrap_or(0);
    let (prefix, body) = text.split_at(prefix_len);
    let prefix = prefix.to_ascii_lowercase();
    if body.starts_with("\"\"\"") || body.starts_with("'''") {
        "docstring"
    } else if prefix.contains('f') {
        "f_string"
    } else if prefix.contains('b') {
        "bytes"
    } else {
        "string"
    }
}

fn identifier(walk: &mut Walk<'_>, id: usize) {
    let name = walk.text(id);
    let parent = walk.parent(id);
    let parent_kind = walk.parent_kind(id).unwrap_or("");
    let field = walk.field(id);

    if walk.inside(id, IMPORTS) {
        if parent_kind == "aliased_import" && field == Some("alias") {
            walk.emit("variable", id);
        }
        return;
    }

    let tag = match (parent_kind, field) {
        ("class_definition", Some("name")) => Some("class"),
        ("function_definition", Some("name")) => {
            Some(if is_dunder(name) { "method" } else { "function" })
        }
        ("keyword_argument", Some("name")) => Some("parameter"),
        ("argument_list", _)
            if parent.is_some_and(|p| walk.within_field(p, "class_definition", "superclasses"))
                && walk.field(id).is_none() =>
        {
            Some("class")
        }
        _ if is_parameter(walk, id) => Some("parameter"),
        _ if is_exception(walk, id) => Some("exception"),
        ("attribute", Some("attribute")) => {
            let call = parent.is_some_and(|p| walk.is_call_target(p));
            Some(if call { "function" } else { "property" })
        }
        _ => None,
    };
    if let Some(tag) = tag {
        walk.emit(tag, id);
        return;
    }

    if let Some(kind) = walk.symbols.kind_of(name) {
        let tag = if walk.is_call_target(id) {
            if is_likely_class_name(name) {
                "imported_class"
            } else {
                "imported_function"
            }
        } else if kind.is_namespace() {
            kind.tag()
        } else if is_likely_class_name(name) {
            "imported_class"
        } else {
            "imported_variable"
        };
        walk.emit(tag, id);
        return;
    }

    let tag = if walk.def.is_keyword(name) {
        "keyword"
    } else if walk.def.is_builtin(name) {
        "builtin"
    } else if is_constant_name(name) && name.chars().count() > 1 {
        "constant"
    } else if name == "self" || name == "cls" {
        "self"
    } else if walk.is_call_target(id) {
        walk.callee_tag(id)
    } else if parent_kind == "attribute" && field == Some("object") {
        "variable"
    } else if is_assignment_target(walk, id) {
        "variable"
    } else if is_likely_class_name(name) {
        "class"
    } else {
        "variable"
    };
    walk.emit(tag, id);
}

fn is_parameter(walk: &Walk<'_>, id: usize) -> bool {
    let mut current = id;
    while let Some(parent) = walk.parent(current) {
        match walk.kind(parent) {
            "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                current = parent;
            }
            "default_parameter" | "typed_default_parameter" => {
                return walk.field(current) == Some("name");
            }
            "parameters" | "lambda_parameters" => return true,
            _ => return false,
        }
    }
    false
}

/// Class names in `except A`, `except (A, B)` or `except A as e`.
fn is_exception(walk: &Walk<'_>, id: usize) -> bool {
    let mut current = id;
    while let Some(parent) = walk.parent(current) {
        match walk.kind(parent) {
            "tuple" | "parenthesized_expression" => current = parent,
            "as_pattern" if walk.field(current) != Some("alias") => current = parent,
            "except_clause" | "except_group_clause" => {
                // `except A as e` without an as_pattern node: `e` follows `as`
                let children = &walk.node(parent).children;
                return !children
                    .iter()
                    .take_while(|&&c| c != current)
                    .any(|&c| walk.kind(c) == "as");
            }
            _ => return false,
        }
    }
    false
}

fn is_assignment_target(walk: &Walk<'_>, id: usize) -> bool {
    let mut current = id;
    while let Some(parent) = walk.parent(current) {
        match walk.kind(parent) {
            "pattern_list" | "tuple_pattern" | "list_pattern" => current = parent,
            "assignment" | "augmented_assignment" | "for_statement" | "for_in_clause" => {
                return walk.field(current) == Some("left");
            }
            _ => return false,
        }
    }
    false
}
