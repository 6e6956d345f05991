//! JavaScript node classification.

use crate::structured::{Flow, Walk, is_operator_token};
use crate::symbols::{is_constant_name, is_likely_class_name};

const FUNCTION_DEFINITIONS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "generator_function_declaration",
    "generator_function",
];

const OPERATOR_PARENTS: &[&str] = &[
    "binary_expression",
    "unary_expression",
    "update_expression",
    "assignment_expression",
    "augmented_assignment_expression",
    "ternary_expression",
];

pub(crate) fn classify(walk: &mut Walk<'_>, id: usize) -> Flow {
    let node = walk.node(id);
    match node.kind {
        "comment" => {
            walk.emit("comment", id);
            Flow::Skip
        }
        "string" if walk.parent_kind(id) == Some("import_statement") => {
            walk.emit("namespace", id);
            Flow::Skip
        }
        "string" | "template_string" => {
            walk.emit("string", id);
            Flow::Skip
        }
        "regex" => {
            walk.emit("regex", id);
            Flow::Skip
        }
        "number" => {
            walk.emit("number", id);
            Flow::Continue
        }
        "true" | "false" => {
            walk.emit("boolean", id);
            Flow::Continue
        }
        "null" | "undefined" => {
            walk.emit("null", id);
            Flow::Continue
        }
        "this" => {
            walk.emit("self", id);
            Flow::Continue
        }
        "super" => {
            walk.emit("keyword", id);
            Flow::Continue
        }
        "decorator" => {
            walk.emit("decorator", id);
            Flow::Skip
        }
        "member_expression" => {
            match (walk.child(id, "object"), walk.child(id, "property")) {
                (Some(object), Some(member))
                    if walk.kind(object) == "identifier"
                        && walk.namespace_member(object, member) =>
                {
                    Flow::Skip
                }
                _ => Flow::Continue,
            }
        }
        "property_identifier" => {
            let tag = match (walk.parent_kind(id), walk.field(id)) {
                (Some("member_expression"), Some("property"))
                    if walk.parent(id).is_some_and(|p| walk.is_call_target(p)) =>
                {
                    "function"
                }
                (Some("method_definition"), Some("name")) => {
                    if walk.text(id) == "constructor" {
                        "method"
                    } else {
                        "function"
                    }
                }
                _ => "property",
            };
            walk.emit(tag, id);
            Flow::Continue
        }
        "shorthand_property_identifier" => {
            walk.emit("property", id);
            Flow::Continue
        }
        "shorthand_property_identifier_pattern" => {
            walk.emit("variable", id);
            Flow::Continue
        }
        "identifier" => {
            identifier(walk, id);
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

    if walk.inside(id, &["import_statement"]) {
        let tag = if parent_kind == "import_specifier" && field == Some("alias") {
            "variable"
        } else {
            walk.symbols
                .kind_of(name)
                .map_or("variable", |kind| kind.tag())
        };
        walk.emit(tag, id);
        return;
    }

    let tag = match (parent_kind, field) {
        ("class_declaration" | "class", Some("name")) | ("class_heritage", _) => Some("class"),
        (kind, Some("name")) if FUNCTION_DEFINITIONS.contains(&kind) => Some("function"),
        ("variable_declarator", Some("name")) => {
            let value = parent.and_then(|p| walk.child(p, "value"));
            let function = value.is_some_and(|v| {
                matches!(walk.kind(v), "arrow_function" | "function_expression" | "function")
            });
            Some(if function { "function" } else { "variable" })
        }
        ("arrow_function", Some("parameter")) => Some("parameter"),
        _ if is_parameter(walk, id) => Some("parameter"),
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
        } else {
            kind.tag()
        };
        walk.emit(tag, id);
        return;
    }

    let tag = if walk.def.is_builtin(name) {
        "builtin"
    } else if walk.is_call_target(id) {
        if parent_kind == "new_expression" {
            "class"
        } else {
            walk.callee_tag(id)
        }
    } else if is_constant_name(name) && name.chars().count() > 1 {
        "constant"
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
            "assignment_pattern" if walk.field(current) == Some("left") => current = parent,
            "rest_pattern" => current = parent,
            "formal_parameters" => return true,
            _ => return false,
        }
    }
    false
}
