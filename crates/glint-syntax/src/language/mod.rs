//! Supported languages.
//!
//! ## Learning: Enums Instead of Class Hierarchies
//!
//! Every language is a variant of one closed `Language` enum. What differs
//! between languages is mostly *data* (keyword sets, builtins, regex rules,
//! default colors), which lives in static [`LanguageDef`] tables. The few
//! behaviors that need code (structured node classification, import
//! extraction) are plain functions selected by a `match`, so adding a
//! language is a compile-checked change rather than a new subclass.

mod imports;
mod javascript;
mod json;
mod python;
mod rust;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SyntaxError;
use crate::structured::Walk;
use crate::symbols::{ImportedSymbolTable, SymbolKind};

/// A language the engine can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Rust,
    JavaScript,
    TypeScript,
    Json,
    C,
    Cpp,
    Java,
    Go,
    Kotlin,
    Swift,
    Ruby,
    Php,
    Lua,
    Sql,
    Css,
    Html,
    Xml,
    Yaml,
    Dart,
    Scala,
    ObjC,
    Markdown,
    Log,
    Bash,
}

/// Default color for a language-specific tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDefault {
    /// Use whatever color the named tag has.
    Inherit(&'static str),
    /// A fixed `#RRGGBB` color.
    Fixed(&'static str),
}

/// A per-line regex rule. `group` selects the capture that gets tagged.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub tag: &'static str,
    pub group: usize,
}

/// A whole-text regex rule for constructs that span lines.
#[derive(Debug, Clone, Copy)]
pub struct BlockRule {
    pub pattern: &'static str,
    pub tag: &'static str,
    /// Whether line matches inside the block are suppressed.
    pub shields: bool,
}

/// Static description of a language.
#[derive(Debug)]
pub struct LanguageDef {
    pub keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
    /// Builtin type names, tagged `type`.
    pub types: &'static [&'static str],
    /// Single-line comment marker.
    pub comment: Option<&'static str>,
    pub case_insensitive: bool,
    /// String literal pattern, `None` for languages without strings.
    pub strings: Option<&'static str>,
    pub numbers: bool,
    pub rules: &'static [Rule],
    pub blocks: &'static [BlockRule],
    pub tags: &'static [(&'static str, TagDefault)],
    /// Structured only: node kinds whose keywords are found on their start line.
    pub line_keywords: &'static [(&'static str, &'static [&'static str])],
    /// Structured only: `(parent kind, field)` slots tagged `type_annotation`.
    pub annotation_slots: &'static [(&'static str, &'static str)],
}

impl LanguageDef {
    pub fn is_keyword(&self, word: &str) -> bool {
        if self.case_insensitive {
            self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word))
        } else {
            self.keywords.contains(&word)
        }
    }

    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.contains(&word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(&word)
    }

    /// Keywords searched on the start line of a node of `kind`.
    pub fn line_keywords(&self, kind: &str) -> Option<&'static [&'static str]> {
        self.line_keywords
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, words)| *words)
    }

    pub fn is_annotation_slot(&self, parent_kind: &str, field: &str) -> bool {
        self.annotation_slots
            .iter()
            .any(|(p, f)| *p == parent_kind && *f == field)
    }
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Python,
        Language::Rust,
        Language::JavaScript,
        Language::TypeScript,
        Language::Json,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Go,
        Language::Kotlin,
        Language::Swift,
        Language::Ruby,
        Language::Php,
        Language::Lua,
        Language::Sql,
        Language::Css,
        Language::Html,
        Language::Xml,
        Language::Yaml,
        Language::Dart,
        Language::Scala,
        Language::ObjC,
        Language::Markdown,
        Language::Log,
        Language::Bash,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Json => "json",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Go => "go",
            Language::Kotlin => "kotlin",
            Language::Swift => "swift",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Lua => "lua",
            Language::Sql => "sql",
            Language::Css => "css",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
            Language::Dart => "dart",
            Language::Scala => "scala",
            Language::ObjC => "objc",
            Language::Markdown => "markdown",
            Language::Log => "log",
            Language::Bash => "bash",
        }
    }

    /// Looks a language up by name or common alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let lang = match name.as_str() {
            "python" | "py" | "python3" => Language::Python,
            "rust" | "rs" => Language::Rust,
            "javascript" | "js" | "jsx" | "node" => Language::JavaScript,
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "json" => Language::Json,
            "c" => Language::C,
            "cpp" | "c++" | "cxx" => Language::Cpp,
            "java" => Language::Java,
            "go" | "golang" => Language::Go,
            "kotlin" | "kt" => Language::Kotlin,
            "swift" => Language::Swift,
            "ruby" | "rb" => Language::Ruby,
            "php" => Language::Php,
            "lua" => Language::Lua,
            "sql" => Language::Sql,
            "css" => Language::Css,
            "html" | "htm" => Language::Html,
            "xml" => Language::Xml,
            "yaml" | "yml" => Language::Yaml,
            "dart" => Language::Dart,
            "scala" => Language::Scala,
            "objc" | "objective-c" | "objectivec" => Language::ObjC,
            "markdown" | "md" => Language::Markdown,
            "log" | "text" | "txt" => Language::Log,
            "bash" | "sh" | "shell" | "zsh" => Language::Bash,
            _ => return None,
        };
        Some(lang)
    }

    /// Static tables for this language.
    pub fn def(self) -> &'static LanguageDef {
        match self {
            Language::Python => &tables::PYTHON,
            Language::Rust => &tables::RUST,
            Language::JavaScript => &tables::JAVASCRIPT,
            Language::TypeScript => &tables::TYPESCRIPT,
            Language::Json => &tables::JSON,
            Language::C => &tables::C,
            Language::Cpp => &tables::CPP,
            Language::Java => &tables::JAVA,
            Language::Go => &tables::GO,
            Language::Kotlin => &tables::KOTLIN,
            Language::Swift => &tables::SWIFT,
            Language::Ruby => &tables::RUBY,
            Language::Php => &tables::PHP,
            Language::Lua => &tables::LUA,
            Language::Sql => &tables::SQL,
            Language::Css => &tables::CSS,
            Language::Html => &tables::HTML,
            Language::Xml => &tables::XML,
            Language::Yaml => &tables::YAML,
            Language::Dart => &tables::DART,
            Language::Scala => &tables::SCALA,
            Language::ObjC => &tables::OBJC,
            Language::Markdown => &tables::MARKDOWN,
            Language::Log => &tables::LOG,
            Language::Bash => &tables::BASH,
        }
    }

    /// Tree-sitter grammar, for languages with a structured pass.
    pub fn grammar(self) -> Option<tree_sitter::Language> {
        match self {
            Language::Python => Some(tree_sitter_python::LANGUAGE.into()),
            Language::Rust => Some(tree_sitter_rust::LANGUAGE.into()),
            Language::JavaScript => Some(tree_sitter_javascript::LANGUAGE.into()),
            Language::Json => Some(tree_sitter_json::LANGUAGE.into()),
            _ => None,
        }
    }

    pub fn has_grammar(self) -> bool {
        matches!(
            self,
            Language::Python | Language::Rust | Language::JavaScript | Language::Json
        )
    }

    /// Extracts the names bound by import statements in `text`.
    pub fn extract_symbols(self, text: &str) -> ImportedSymbolTable {
        imports::extract(self, text)
    }

    /// Classifies a `pkg.member` access on an imported module or package.
    pub fn classify_member(self, name: &str) -> SymbolKind {
        imports::classify_member(self, name)
    }

    /// Per-language structured classification of one node.
    pub(crate) fn classify_node(self, walk: &mut Walk<'_>, id: usize) -> crate::structured::Flow {
        match self {
            Language::Python => python::classify(walk, id),
            Language::Rust => rust::classify(walk, id),
            Language::JavaScript => javascript::classify(walk, id),
            Language::Json => json::classify(walk, id),
            _ => crate::structured::Flow::Continue,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SyntaxError::UnknownLanguage(s.to_string()))
    }
}
