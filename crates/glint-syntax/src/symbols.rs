//! Imported symbols and naming-convention heuristics.

use std::collections::BTreeMap;
use std::fmt;

/// Role of an imported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Module,
    Package,
    Class,
    Interface,
    Type,
    Enum,
    Trait,
    Struct,
    Object,
    Function,
    Macro,
    Constant,
    Variable,
    Property,
    Annotation,
}

impl SymbolKind {
    /// Tag used for occurrences of a symbol of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            SymbolKind::Module => "imported_module",
            SymbolKind::Package => "imported_package",
            SymbolKind::Class => "imported_class",
            SymbolKind::Interface => "imported_interface",
            SymbolKind::Type => "imported_type",
            SymbolKind::Enum => "imported_enum",
            SymbolKind::Trait => "imported_trait",
            SymbolKind::Struct => "imported_struct",
            SymbolKind::Object => "imported_object",
            SymbolKind::Function => "imported_function",
            SymbolKind::Macro => "imported_macro",
            SymbolKind::Constant => "imported_constant",
            SymbolKind::Variable => "imported_variable",
            SymbolKind::Property => "imported_property",
            SymbolKind::Annotation => "imported_annotation",
        }
    }

    /// True for names that stand for a module or package (`pkg.member` bases).
    pub fn is_namespace(self) -> bool {
        matches!(self, SymbolKind::Module | SymbolKind::Package)
    }

    /// True for names that behave like types at use sites.
    pub fn is_type_like(self) -> bool {
        matches!(
            self,
            SymbolKind::Class
                | SymbolKind::Interface
                | SymbolKind::Type
                | SymbolKind::Enum
                | SymbolKind::Trait
                | SymbolKind::Struct
                | SymbolKind::Object
        )
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        f.write_str(tag.strip_prefix("imported_").unwrap_or(tag))
    }
}

/// Where an imported name came from and what it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedSymbol {
    /// Fully qualified origin, e.g. `os.path` or `std::collections::HashMap`
    pub origin: String,
    pub kind: SymbolKind,
}

/// Names bound by import statements, rebuilt at the start of every pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedSymbolTable {
    symbols: BTreeMap<String, ImportedSymbol>,
}

impl ImportedSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`. A later import of the same name wins.
    pub fn insert(&mut self, name: impl Into<String>, origin: impl Into<String>, kind: SymbolKind) {
        let name = name.into();
        if name.is_empty() || name == "*" {
            return;
        }
        self.symbols.insert(
            name,
            ImportedSymbol {
                origin: origin.into(),
                kind,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&ImportedSymbol> {
        self.symbols.get(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        self.symbols.get(name).map(|s| s.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportedSymbol)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// ==================== Naming Heuristics ====================

/// GUI widget classes that are commonly called without being recognizable
/// as classes by case alone.
const WIDGET_CLASSES: &[&str] = &[
    "Tk", "Frame", "Button", "Label", "Entry", "Text", "Canvas", "Listbox", "Scrollbar", "Menu",
    "Message", "Scale", "Spinbox",
];

/// A name that is probably a class: starts uppercase, or a known widget class.
pub fn is_likely_class_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) || WIDGET_CLASSES.contains(&name)
}

/// ALL_CAPS: at least one cased character and no lowercase ones.
pub fn is_constant_name(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

/// `__name__` style special names.
pub fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

/// Generic classification: constant, class-like, otherwise function.
pub fn classify_by_convention(name: &str) -> SymbolKind {
    if is_constant_name(name) && name.chars().count() > 1 {
        SymbolKind::Constant
    } else if name.chars().next().is_some_and(char::is_uppercase) {
        SymbolKind::Class
    } else {
        SymbolKind::Function
    }
}
