//! Import statement scanning.
//!
//! Import extraction runs on the raw text for every language, including
//! the ones with a grammar, so that a buffer which fails to parse still
//! gets its imported names highlighted by the fallback pass.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Language;
use crate::symbols::{
    ImportedSymbolTable, SymbolKind, classify_by_convention, is_constant_name,
    is_likely_class_name,
};

/// Extracts every name bound by an import statement in `text`.
pub(super) fn extract(lang: Language, text: &str) -> ImportedSymbolTable {
    let mut table = ImportedSymbolTable::new();
    match lang {
        Language::Python => python(text, &mut table),
        Language::Rust => rust(text, &mut table),
        Language::JavaScript | Language::TypeScript => javascript(text, &mut table),
        Language::Java => java(text, &mut table),
        Language::Kotlin => kotlin(text, &mut table),
        Language::Scala => scala(text, &mut table),
        Language::Go => go(text, &mut table),
        Language::C | Language::Cpp | Language::ObjC => c_family(text, &mut table),
        Language::Swift => swift(text, &mut table),
        Language::Php => php(text, &mut table),
        Language::Dart => dart(text, &mut table),
        _ => {}
    }
    table
}

/// Classifies `member` in a `pkg.member` access on an imported namespace.
pub(super) fn classify_member(lang: Language, member: &str) -> SymbolKind {
    if is_constant_name(member) && member.chars().count() > 1 {
        return SymbolKind::Constant;
    }
    match lang {
        Language::Python => {
            if member.ends_with('_') {
                SymbolKind::Variable
            } else if is_likely_class_name(member) {
                SymbolKind::Class
            } else {
                SymbolKind::Function
            }
        }
        Language::JavaScript | Language::TypeScript => js_kind(member),
        Language::Rust => rust_kind(member),
        Language::Java | Language::Scala | Language::Dart => jvm_kind(member),
        Language::Kotlin => kotlin_kind(member),
        Language::Go => {
            if member.ends_with("er") && starts_upper(member) {
                SymbolKind::Interface
            } else {
                SymbolKind::Function
            }
        }
        _ => classify_by_convention(member),
    }
}

// ==================== Naming Rules ====================

fn starts_upper(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn screaming(name: &str) -> bool {
    is_constant_name(name) && name.chars().count() > 1
}

fn python_kind(name: &str) -> SymbolKind {
    if screaming(name) {
        SymbolKind::Constant
    } else if is_likely_class_name(name) {
        SymbolKind::Class
    } else {
        SymbolKind::Function
    }
}

fn rust_kind(name: &str) -> SymbolKind {
    if name.ends_with('!') {
        SymbolKind::Macro
    } else if screaming(name) {
        SymbolKind::Constant
    } else if starts_upper(name) {
        if name.ends_with("Trait") {
            SymbolKind::Trait
        } else if name.ends_with("Enum") {
            SymbolKind::Enum
        } else {
            SymbolKind::Type
        }
    } else {
        SymbolKind::Function
    }
}

fn js_kind(name: &str) -> SymbolKind {
    let mut chars = name.chars();
    let interface = chars.next() == Some('I') && chars.next().is_some_and(char::is_uppercase);
    if screaming(name) {
        SymbolKind::Constant
    } else if interface {
        SymbolKind::Interface
    } else if name.ends_with("Type") || name.ends_with("Props") {
        SymbolKind::Type
    } else if starts_upper(name) {
        SymbolKind::Class
    } else {
        SymbolKind::Function
    }
}

fn jvm_kind(name: &str) -> SymbolKind {
    if name.ends_with("Exception") || name.ends_with("Error") {
        SymbolKind::Class
    } else if name.ends_with("Interface") {
        SymbolKind::Interface
    } else if name.ends_with("Enum") {
        SymbolKind::Enum
    } else if name.ends_with("Annotation") {
        SymbolKind::Annotation
    } else if screaming(name) {
        SymbolKind::Constant
    } else if starts_upper(name) {
        SymbolKind::Class
    } else {
        SymbolKind::Function
    }
}

fn kotlin_kind(name: &str) -> SymbolKind {
    if screaming(name) {
        SymbolKind::Constant
    } else if starts_upper(name) {
        if name.ends_with("Interface") {
            SymbolKind::Interface
        } else if name.ends_with("Object") {
            SymbolKind::Object
        } else {
            SymbolKind::Class
        }
    } else {
        SymbolKind::Function
    }
}

/// Splits `a, b as c` style lists into `(name, alias)` pairs.
fn name_list(list: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    list.split(',').filter_map(|item| {
        let mut words = item.split_whitespace();
        let name = words.next()?;
        let alias = match (words.next(), words.next()) {
            (Some("as"), Some(alias)) => Some(alias),
            _ => None,
        };
        Some((name, alias))
    })
}

// ==================== Python ====================

static PY_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*import[ \t]+([^#\n;]+)").expect("valid regex"));

static PY_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*from[ \t]+(\.*[\w.]*)[ \t]+import[ \t]+(\([^)]*\)|[^#\n;]+)")
        .expect("valid regex")
});

/// Names made visible by `from <module> import *`.
const PY_WILDCARDS: &[(&str, &[(&str, SymbolKind)])] = &[
    (
        "tkinter",
        &[
            ("Tk", SymbolKind::Class),
            ("Toplevel", SymbolKind::Class),
            ("Frame", SymbolKind::Class),
            ("Button", SymbolKind::Class),
            ("Label", SymbolKind::Class),
            ("Entry", SymbolKind::Class),
            ("Text", SymbolKind::Class),
            ("Canvas", SymbolKind::Class),
            ("Listbox", SymbolKind::Class),
            ("Scrollbar", SymbolKind::Class),
            ("Menu", SymbolKind::Class),
            ("StringVar", SymbolKind::Class),
            ("IntVar", SymbolKind::Class),
            ("END", SymbolKind::Constant),
            ("LEFT", SymbolKind::Constant),
            ("RIGHT", SymbolKind::Constant),
            ("TOP", SymbolKind::Constant),
            ("BOTTOM", SymbolKind::Constant),
            ("BOTH", SymbolKind::Constant),
            ("NORMAL", SymbolKind::Constant),
            ("DISABLED", SymbolKind::Constant),
        ],
    ),
    (
        "os.path",
        &[
            ("join", SymbolKind::Function),
            ("exists", SymbolKind::Function),
            ("dirname", SymbolKind::Function),
            ("basename", SymbolKind::Function),
            ("abspath", SymbolKind::Function),
            ("isfile", SymbolKind::Function),
            ("isdir", SymbolKind::Function),
            ("splitext", SymbolKind::Function),
        ],
    ),
    (
        "math",
        &[
            ("sqrt", SymbolKind::Function),
            ("sin", SymbolKind::Function),
            ("cos", SymbolKind::Function),
            ("tan", SymbolKind::Function),
            ("floor", SymbolKind::Function),
            ("ceil", SymbolKind::Function),
            ("log", SymbolKind::Function),
            ("exp", SymbolKind::Function),
            ("pi", SymbolKind::Constant),
            ("e", SymbolKind::Constant),
            ("tau", SymbolKind::Constant),
            ("inf", SymbolKind::Constant),
        ],
    ),
];

fn python(text: &str, table: &mut ImportedSymbolTable) {
    for caps in PY_IMPORT.captures_iter(text) {
        for (path, alias) in name_list(&caps[1]) {
            match alias {
                Some(alias) => table.insert(alias, path, SymbolKind::Module),
                // `import a.b` binds `a`
                None => {
                    let root = path.split('.').next().unwrap_or(path);
                    table.insert(root, root, SymbolKind::Module);
                }
            }
        }
    }

    for caps in PY_FROM.captures_iter(text) {
        let module = &caps[1];
        let names = caps[2].trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace());
        let names = names.replace('\\', " ");
        for (name, alias) in name_list(&names) {
            if name == "*" {
                wildcard(PY_WILDCARDS, module, table);
                continue;
            }
            let origin = if module.is_empty() || module.ends_with('.') {
                format!("{module}{name}")
            } else {
                format!("{module}.{name}")
            };
            table.insert(alias.unwrap_or(name), origin, python_kind(name));
        }
    }
}

fn wildcard(
    known: &[(&str, &[(&str, SymbolKind)])],
    module: &str,
    table: &mut ImportedSymbolTable,
) {
    let Some((_, names)) = known.iter().find(|(m, _)| *m == module) else {
        return;
    };
    for &(name, kind) in names.iter() {
        table.insert(name, module, kind);
    }
}

// ==================== Rust ====================

static RUST_USE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?use[ \t]+([^;]+);").expect("valid regex")
});

const RUST_ROOTS: &[&str] = &["std", "core", "alloc", "crate", "super", "self"];

fn rust(text: &str, table: &mut ImportedSymbolTable) {
    for caps in RUST_USE.captures_iter(text) {
        let tree = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
        rust_use_tree("", &tree, table);
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}::{path}"),
    }
}

/// Splits on commas that are not nested inside braces.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&list[start..]);
    items.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

fn rust_use_tree(prefix: &str, tree: &str, table: &mut ImportedSymbolTable) {
    let tree = tree.trim().trim_start_matches("::");
    if let Some(open) = tree.find('{') {
        let base = tree[..open].trim().trim_end_matches("::");
        let inner = &tree[open + 1..];
        let inner = inner.trim_end().strip_suffix('}').unwrap_or(inner);
        let prefix = join_path(prefix, base);
        for item in split_top_level(inner) {
            rust_use_tree(&prefix, item, table);
        }
        return;
    }

    let (path, alias) = match tree.split_once(" as ") {
        Some((path, alias)) => (path.trim(), Some(alias.trim())),
        None => (tree, None),
    };
    let full = join_path(prefix, path);
    let mut segments = full.rsplit("::");
    let leaf = segments.next().unwrap_or(&full);
    let parent = segments.next();

    match leaf {
        "*" | "_" => {}
        "self" => {
            if let Some(module) = parent {
                let origin = full.trim_end_matches("::self");
                table.insert(alias.unwrap_or(module), origin, SymbolKind::Module);
            }
        }
        _ => {
            let module_like = !starts_upper(leaf)
                && !screaming(leaf)
                && parent.is_none_or(|p| RUST_ROOTS.contains(&p));
            let kind = if module_like {
                SymbolKind::Module
            } else {
                rust_kind(leaf)
            };
            table.insert(alias.unwrap_or(leaf), full.as_str(), kind);
        }
    }
}

// ==================== JavaScript / TypeScript ====================

static JS_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:type\s+)?([\w$*{},\s]+?)\s+from\s+['"]([^'"]+)['"]"#)
        .expect("valid regex")
});

static JS_REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:const|let|var)\s+([\w$]+|\{[^}]*\})\s*=\s*require\(\s*['"]([^'"]+)['"]\s*\)"#,
    )
    .expect("valid regex")
});

fn javascript(text: &str, table: &mut ImportedSymbolTable) {
    for caps in JS_IMPORT.captures_iter(text) {
        let clause = caps[1].trim();
        let source = &caps[2];

        let (outer, named) = match (clause.find('{'), clause.rfind('}')) {
            (Some(open), Some(close)) if open < close => (
                format!("{} {}", &clause[..open], &clause[close + 1..]),
                Some(&clause[open + 1..close]),
            ),
            _ => (clause.to_string(), None),
        };

        for part in outer.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if let Some(ns) = part.strip_prefix('*') {
                if let Some(name) = ns.trim().strip_prefix("as") {
                    table.insert(name.trim(), source, SymbolKind::Module);
                }
            } else {
                let kind = if is_likely_class_name(part) {
                    SymbolKind::Class
                } else {
                    SymbolKind::Module
                };
                table.insert(part, source, kind);
            }
        }

        for (name, alias) in named.into_iter().flat_map(name_list) {
            let name = name.strip_prefix("type ").unwrap_or(name);
            table.insert(alias.unwrap_or(name), format!("{source}.{name}"), js_kind(name));
        }
    }

    for caps in JS_REQUIRE.captures_iter(text) {
        let binding = &caps[1];
        let source = &caps[2];
        match binding.strip_prefix('{') {
            Some(fields) => {
                for field in fields.trim_end_matches('}').split(',') {
                    let (name, local) = match field.split_once(':') {
                        Some((name, local)) => (name.trim(), local.trim()),
                        None => (field.trim(), field.trim()),
                    };
                    table.insert(local, format!("{source}.{name}"), js_kind(name));
                }
            }
            None => table.insert(binding, source, SymbolKind::Module),
        }
    }
}

// ==================== JVM ====================

static JAVA_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*import\s+(static\s+)?([\w.]+(?:\.\*)?)\s*;").expect("valid regex")
});

static KOTLIN_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*import\s+([\w.*]+)(?:\s+as\s+(\w+))?").expect("valid regex")
});

static SCALA_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*import\s+([\w.]+?)(?:\.\{([^}]*)\})?\s*$").expect("valid regex")
});

const KOTLIN_WILDCARDS: &[(&str, &[(&str, SymbolKind)])] = &[
    (
        "kotlin.collections",
        &[
            ("listOf", SymbolKind::Function),
            ("setOf", SymbolKind::Function),
            ("mapOf", SymbolKind::Function),
            ("mutableListOf", SymbolKind::Function),
            ("mutableSetOf", SymbolKind::Function),
            ("mutableMapOf", SymbolKind::Function),
            ("emptyList", SymbolKind::Function),
            ("emptyMap", SymbolKind::Function),
        ],
    ),
    (
        "kotlin.io",
        &[
            ("readText", SymbolKind::Function),
            ("writeText", SymbolKind::Function),
            ("copyTo", SymbolKind::Function),
            ("forEachLine", SymbolKind::Function),
        ],
    ),
    (
        "kotlin.text",
        &[
            ("toInt", SymbolKind::Function),
            ("toDouble", SymbolKind::Function),
            ("toBoolean", SymbolKind::Function),
        ],
    ),
];

fn leaf(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

fn java(text: &str, table: &mut ImportedSymbolTable) {
    for caps in JAVA_IMPORT.captures_iter(text) {
        let path = &caps[2];
        if path.ends_with(".*") {
            continue;
        }
        table.insert(leaf(path), path, jvm_kind(leaf(path)));
    }
}

fn kotlin(text: &str, table: &mut ImportedSymbolTable) {
    for caps in KOTLIN_IMPORT.captures_iter(text) {
        let path = &caps[1];
        if let Some(package) = path.strip_suffix(".*") {
            wildcard(KOTLIN_WILDCARDS, package, table);
            continue;
        }
        let name = caps.get(2).map_or(leaf(path), |m| m.as_str());
        table.insert(name, path, kotlin_kind(leaf(path)));
    }
}

fn scala(text: &str, table: &mut ImportedSymbolTable) {
    for caps in SCALA_IMPORT.captures_iter(text) {
        let path = &caps[1];
        let Some(group) = caps.get(2) else {
            let name = leaf(path);
            if name != "_" {
                table.insert(name, path, jvm_kind(name));
            }
            continue;
        };
        for item in group.as_str().split(',') {
            let (name, local) = match item.split_once("=>").or_else(|| item.split_once(" as ")) {
                Some((name, local)) => (name.trim(), local.trim()),
                None => (item.trim(), item.trim()),
            };
            if name != "_" && local != "_" {
                table.insert(local, format!("{path}.{name}"), jvm_kind(name));
            }
        }
    }
}

// ==================== Go ====================

static GO_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:([\w.]+)\s+)?"([^"]+)""#).expect("valid regex")
});

static GO_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\bimport\s*\(([^)]*)\)").expect("valid regex"));

static GO_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*(?:([\w.]+)\s+)?"([^"]+)""#).expect("valid regex"));

fn go_bind(alias: Option<&str>, path: &str, table: &mut ImportedSymbolTable) {
    let name = match alias {
        Some("_") | Some(".") => return,
        Some(alias) => alias,
        None => path.rsplit('/').next().unwrap_or(path),
    };
    table.insert(name, path, SymbolKind::Package);
}

fn go(text: &str, table: &mut ImportedSymbolTable) {
    for caps in GO_SINGLE.captures_iter(text) {
        go_bind(caps.get(1).map(|m| m.as_str()), &caps[2], table);
    }
    for block in GO_BLOCK.captures_iter(text) {
        for caps in GO_SPEC.captures_iter(&block[1]) {
            go_bind(caps.get(1).map(|m| m.as_str()), &caps[2], table);
        }
    }
}

// ==================== C Family ====================

static C_INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*#\s*(?:include|import)\s*<([^>]+)>").expect("valid regex")
});

/// What the common system headers declare.
const C_HEADERS: &[(&str, &[(&str, SymbolKind)])] = &[
    (
        "stdio.h",
        &[
            ("printf", SymbolKind::Function),
            ("fprintf", SymbolKind::Function),
            ("sprintf", SymbolKind::Function),
            ("scanf", SymbolKind::Function),
            ("fopen", SymbolKind::Function),
            ("fclose", SymbolKind::Function),
            ("fgets", SymbolKind::Function),
            ("puts", SymbolKind::Function),
            ("FILE", SymbolKind::Type),
        ],
    ),
    (
        "stdlib.h",
        &[
            ("malloc", SymbolKind::Function),
            ("calloc", SymbolKind::Function),
            ("realloc", SymbolKind::Function),
            ("free", SymbolKind::Function),
            ("exit", SymbolKind::Function),
            ("atoi", SymbolKind::Function),
            ("qsort", SymbolKind::Function),
        ],
    ),
    (
        "string.h",
        &[
            ("strlen", SymbolKind::Function),
            ("strcpy", SymbolKind::Function),
            ("strcmp", SymbolKind::Function),
            ("strcat", SymbolKind::Function),
            ("memcpy", SymbolKind::Function),
            ("memset", SymbolKind::Function),
        ],
    ),
    (
        "math.h",
        &[
            ("sqrt", SymbolKind::Function),
            ("pow", SymbolKind::Function),
            ("sin", SymbolKind::Function),
            ("cos", SymbolKind::Function),
            ("fabs", SymbolKind::Function),
        ],
    ),
    (
        "iostream",
        &[
            ("cout", SymbolKind::Variable),
            ("cin", SymbolKind::Variable),
            ("cerr", SymbolKind::Variable),
            ("endl", SymbolKind::Function),
        ],
    ),
    ("vector", &[("vector", SymbolKind::Class)]),
    ("string", &[("string", SymbolKind::Class)]),
    (
        "map",
        &[("map", SymbolKind::Class), ("multimap", SymbolKind::Class)],
    ),
    (
        "memory",
        &[
            ("unique_ptr", SymbolKind::Class),
            ("shared_ptr", SymbolKind::Class),
            ("make_unique", SymbolKind::Function),
            ("make_shared", SymbolKind::Function),
        ],
    ),
    (
        "Foundation/Foundation.h",
        &[
            ("NSString", SymbolKind::Class),
            ("NSArray", SymbolKind::Class),
            ("NSDictionary", SymbolKind::Class),
            ("NSLog", SymbolKind::Function),
        ],
    ),
];

fn c_family(text: &str, table: &mut ImportedSymbolTable) {
    for caps in C_INCLUDE.captures_iter(text) {
        wildcard(C_HEADERS, caps[1].trim(), table);
    }
}

// ==================== Others ====================

static SWIFT_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^\s*(?:@testable\s+)?import\s+(?:(?:class|struct|enum|protocol|func|var|let|typealias)\s+)?([\w.]+)",
    )
    .expect("valid regex")
});

static PHP_USE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*use\s+(function\s+|const\s+)?([\w\\]+)(?:\s+as\s+(\w+))?\s*;")
        .expect("valid regex")
});

static DART_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^\s*import\s+['"]([^'"]+)['"](?:\s+(?:deferred\s+)?as\s+(\w+))?(?:\s+show\s+([\w\s,]+))?"#,
    )
    .expect("valid regex")
});

fn swift(text: &str, table: &mut ImportedSymbolTable) {
    for caps in SWIFT_IMPORT.captures_iter(text) {
        let path = &caps[1];
        table.insert(leaf(path), path, SymbolKind::Module);
    }
}

fn php(text: &str, table: &mut ImportedSymbolTable) {
    for caps in PHP_USE.captures_iter(text) {
        let path = &caps[2];
        let name = path.rsplit('\\').next().unwrap_or(path);
        let kind = match caps.get(1).map(|m| m.as_str().trim()) {
            Some("function") => SymbolKind::Function,
            Some("const") => SymbolKind::Constant,
            _ => SymbolKind::Class,
        };
        let local = caps.get(3).map_or(name, |m| m.as_str());
        table.insert(local, path, kind);
    }
}

fn dart(text: &str, table: &mut ImportedSymbolTable) {
    for caps in DART_IMPORT.captures_iter(text) {
        let uri = &caps[1];
        if let Some(prefix) = caps.get(2) {
            table.insert(prefix.as_str(), uri, SymbolKind::Module);
        }
        if let Some(shown) = caps.get(3) {
            for name in shown.as_str().split(',').map(str::trim).filter(|n| !n.is_empty()) {
                table.insert(name, uri, jvm_kind(name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lang: Language, text: &str) -> Vec<(String, SymbolKind)> {
        extract(lang, text)
            .iter()
            .map(|(name, sym)| (name.to_string(), sym.kind))
            .collect()
    }

    #[test]
    fn test_python_imports() {
        let table = extract(
            Language::Python,
            "import os\nimport numpy as np, os.path\nfrom typing import (\n    List,\n    Optional as Opt,\n)\nfrom . import utils\n",
        );
        assert_eq!(table.kind_of("os"), Some(SymbolKind::Module));
        assert_eq!(table.kind_of("np"), Some(SymbolKind::Module));
        assert_eq!(table.get("np").unwrap().origin, "numpy");
        assert_eq!(table.kind_of("List"), Some(SymbolKind::Class));
        assert_eq!(table.get("Opt").unwrap().origin, "typing.Optional");
        assert!(!table.contains("Optional"));
        assert_eq!(table.get("utils").unwrap().origin, ".utils");
        assert!(!table.contains("path"));
    }

    #[test]
    fn test_python_wildcard() {
        let table = extract(Language::Python, "from tkinter import *\nfrom unknown import *\n");
        assert_eq!(table.kind_of("Button"), Some(SymbolKind::Class));
        assert_eq!(table.kind_of("END"), Some(SymbolKind::Constant));
        assert!(!table.contains("*"));
    }

    #[test]
    fn test_rust_use_trees() {
        let table = extract(
            Language::Rust,
            "use std::collections::{HashMap, hash_map::Entry as E};\nuse std::fmt;\npub use crate::io::{self, Read};\nuse serde::*;\nuse tracing::info;\nconst MAX: usize = 1;\nuse foo::BAR_BAZ;\n",
        );
        assert_eq!(table.kind_of("HashMap"), Some(SymbolKind::Type));
        assert_eq!(table.get("E").unwrap().origin, "std::collections::hash_map::Entry");
        assert_eq!(table.kind_of("fmt"), Some(SymbolKind::Module));
        assert_eq!(table.kind_of("io"), Some(SymbolKind::Module));
        assert_eq!(table.get("io").unwrap().origin, "crate::io");
        assert_eq!(table.kind_of("Read"), Some(SymbolKind::Type));
        assert_eq!(table.kind_of("info"), Some(SymbolKind::Function));
        assert_eq!(table.kind_of("BAR_BAZ"), Some(SymbolKind::Constant));
        assert!(!table.contains("serde"));
    }

    #[test]
    fn test_javascript_imports() {
        let table = extract(
            Language::JavaScript,
            "import React, { useState, Component as C } from 'react';\nimport * as path from \"path\";\nimport express from 'express';\nconst fs = require('fs');\nconst { join, resolve: res } = require('path');\n",
        );
        assert_eq!(table.kind_of("React"), Some(SymbolKind::Class));
        assert_eq!(table.kind_of("useState"), Some(SymbolKind::Function));
        assert_eq!(table.kind_of("C"), Some(SymbolKind::Class));
        assert_eq!(table.kind_of("path"), Some(SymbolKind::Module));
        assert_eq!(table.kind_of("express"), Some(SymbolKind::Module));
        assert_eq!(table.kind_of("fs"), Some(SymbolKind::Module));
        assert_eq!(table.kind_of("join"), Some(SymbolKind::Function));
        assert_eq!(table.get("res").unwrap().origin, "path.resolve");
    }

    #[test]
    fn test_jvm_imports() {
        let java = extract(
            Language::Java,
            "import java.util.List;\nimport java.io.IOException;\nimport static java.lang.Math.PI;\nimport java.util.*;\n",
        );
        assert_eq!(java.kind_of("List"), Some(SymbolKind::Class));
        assert_eq!(java.kind_of("IOException"), Some(SymbolKind::Class));
        assert_eq!(java.kind_of("PI"), Some(SymbolKind::Constant));
        assert_eq!(java.len(), 3);

        let kotlin = extract(
            Language::Kotlin,
            "import kotlin.collections.*\nimport com.example.MainObject\nimport com.example.helper as h\n",
        );
        assert_eq!(kotlin.kind_of("listOf"), Some(SymbolKind::Function));
        assert_eq!(kotlin.kind_of("MainObject"), Some(SymbolKind::Object));
        assert_eq!(kotlin.kind_of("h"), Some(SymbolKind::Function));

        let scala = extract(Language::Scala, "import scala.collection.{Map => M, Seq}\n");
        assert_eq!(scala.kind_of("M"), Some(SymbolKind::Class));
        assert_eq!(scala.kind_of("Seq"), Some(SymbolKind::Class));
    }

    #[test]
    fn test_go_imports() {
        let table = extract(
            Language::Go,
            "import \"fmt\"\nimport (\n    \"net/http\"\n    str \"strings\"\n    _ \"embed\"\n)\n",
        );
        assert_eq!(
            kinds(Language::Go, "import \"fmt\""),
            vec![("fmt".to_string(), SymbolKind::Package)]
        );
        assert_eq!(table.kind_of("http"), Some(SymbolKind::Package));
        assert_eq!(table.kind_of("str"), Some(SymbolKind::Package));
        assert!(!table.contains("embed"));
    }

    #[test]
    fn test_other_languages() {
        let c = extract(Language::C, "#include <stdio.h>\n#include \"local.h\"\n");
        assert_eq!(c.kind_of("printf"), Some(SymbolKind::Function));
        assert_eq!(c.kind_of("FILE"), Some(SymbolKind::Type));

        let php = extract(Language::Php, "use App\\Models\\User;\nuse function App\\helper as h;\n");
        assert_eq!(php.kind_of("User"), Some(SymbolKind::Class));
        assert_eq!(php.kind_of("h"), Some(SymbolKind::Function));

        let swift = extract(Language::Swift, "import Foundation\n@testable import MyApp\n");
        assert_eq!(swift.kind_of("MyApp"), Some(SymbolKind::Module));

        let dart = extract(
            Language::Dart,
            "import 'package:http/http.dart' as http;\nimport 'dart:math' show Random, max;\n",
        );
        assert_eq!(dart.kind_of("http"), Some(SymbolKind::Module));
        assert_eq!(dart.kind_of("Random"), Some(SymbolKind::Class));
        assert_eq!(dart.kind_of("max"), Some(SymbolKind::Function));

        assert!(extract(Language::Markdown, "import os").is_empty());
    }

    #[test]
    fn test_member_classification() {
        assert_eq!(classify_member(Language::Python, "Path"), SymbolKind::Class);
        assert_eq!(classify_member(Language::Python, "SEEK_SET"), SymbolKind::Constant);
        assert_eq!(classify_member(Language::Python, "type_"), SymbolKind::Variable);
        assert_eq!(classify_member(Language::Python, "join"), SymbolKind::Function);
        assert_eq!(classify_member(Language::TypeScript, "IProps"), SymbolKind::Interface);
        assert_eq!(classify_member(Language::Go, "Reader"), SymbolKind::Interface);
        assert_eq!(classify_member(Language::Go, "Println"), SymbolKind::Function);
    }
}
