//! Static per-language tables: keywords, builtins, rules and tag defaults.

use super::{BlockRule, LanguageDef, Rule, TagDefault};

// ============================================================================
// Shared patterns
// ============================================================================

/// Double or single quoted, escape aware.
const QUOTED: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;

/// Quoted plus backtick template strings.
const QUOTED_BACKTICK: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#;

/// Double quoted only; single quotes are char literals.
const QUOTED_CHAR: &str = r#""(?:[^"\\]|\\.)*"|'(?:\\.[^']*|[^'\\])'"#;

const C_BLOCK_COMMENT: BlockRule = BlockRule {
    pattern: r"(?s)/\*.*?\*/",
    tag: "comment",
    shields: true,
};

const fn rule(pattern: &'static str, tag: &'static str) -> Rule {
    Rule {
        pattern,
        tag,
        group: 0,
    }
}

const fn capture(pattern: &'static str, tag: &'static str, group: usize) -> Rule {
    Rule {
        pattern,
        tag,
        group,
    }
}

// ============================================================================
// Python
// ============================================================================

pub static PYTHON: LanguageDef = LanguageDef {
    keywords: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ],
    builtins: &[
        "abs", "all", "any", "ascii", "bin", "bool", "breakpoint", "bytearray", "bytes",
        "callable", "chr", "classmethod", "compile", "complex", "delattr", "dict", "dir",
        "divmod", "enumerate", "eval", "exec", "filter", "float", "format", "frozenset",
        "getattr", "globals", "hasattr", "hash", "help", "hex", "id", "input", "int",
        "isinstance", "issubclass", "iter", "len", "list", "locals", "map", "max",
        "memoryview", "min", "next", "object", "oct", "open", "ord", "pow", "print",
        "property", "range", "repr", "reversed", "round", "set", "setattr", "slice", "sorted",
        "staticmethod", "str", "sum", "super", "tuple", "type", "vars", "zip", "__import__",
        "Exception", "BaseException", "ValueError", "TypeError", "KeyError", "IndexError",
        "AttributeError", "RuntimeError", "StopIteration", "OSError", "IOError",
        "FileNotFoundError", "NotImplementedError", "ImportError", "ZeroDivisionError",
        "NotImplemented", "Ellipsis", "__name__", "__file__", "__doc__",
    ],
    types: &[],
    comment: Some("#"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[
        capture(r"^\s*(@[\w.]+)", "decorator", 1),
        capture(r"\bdef\s+([A-Za-z_]\w*)", "function", 1),
        capture(r"\bclass\s+([A-Za-z_]\w*)", "class", 1),
        rule(r"\b(?:self|cls)\b", "self"),
    ],
    blocks: &[BlockRule {
        pattern: r#"(?s)""".*?"""|'''.*?'''"#,
        tag: "docstring",
        shields: true,
    }],
    tags: &[
        ("f_string", TagDefault::Inherit("string")),
        ("bytes", TagDefault::Inherit("string")),
        ("exception", TagDefault::Inherit("class")),
        ("magic_method", TagDefault::Inherit("function")),
    ],
    line_keywords: &[
        ("if_statement", &["if"]),
        ("elif_clause", &["elif"]),
        ("else_clause", &["else"]),
        ("for_statement", &["for", "in"]),
        ("while_statement", &["while"]),
        ("try_statement", &["try"]),
        ("except_clause", &["except"]),
        ("finally_clause", &["finally"]),
        ("with_statement", &["with"]),
        ("boolean_operator", &["and", "or"]),
        ("not_operator", &["not"]),
    ],
    annotation_slots: &[
        ("typed_parameter", "type"),
        ("typed_default_parameter", "type"),
        ("function_definition", "return_type"),
        ("assignment", "type"),
    ],
};

// ============================================================================
// Rust
// ============================================================================

pub static RUST: LanguageDef = LanguageDef {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "yield", "macro_rules",
    ],
    builtins: &["Some", "None", "Ok", "Err"],
    types: &[
        "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "str", "u8",
        "u16", "u32", "u64", "u128", "usize", "String", "Vec", "Option", "Result", "Box", "Rc",
        "Arc",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: &[
        capture(r"\b([a-z_][A-Za-z0-9_]*!)", "macro", 1),
        rule(r"'[A-Za-z_]\w*", "lifetime"),
        rule(r"#!?\[[^\]]*\]", "attribute"),
        capture(r"\bfn\s+([A-Za-z_]\w*)", "function", 1),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[
        ("macro", TagDefault::Inherit("function")),
        ("lifetime", TagDefault::Inherit("decorator")),
        ("attribute", TagDefault::Inherit("decorator")),
        ("trait", TagDefault::Inherit("interface")),
        ("enum", TagDefault::Inherit("type")),
        ("struct", TagDefault::Inherit("type")),
    ],
    line_keywords: &[
        ("if_expression", &["if"]),
        ("else_clause", &["else"]),
        ("for_expression", &["for", "in"]),
        ("while_expression", &["while"]),
        ("loop_expression", &["loop"]),
        ("match_expression", &["match"]),
    ],
    annotation_slots: &[
        ("parameter", "type"),
        ("let_declaration", "type"),
        ("function_item", "return_type"),
    ],
};

// ============================================================================
// JavaScript / TypeScript
// ============================================================================

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "of", "return", "set",
    "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield",
];

const JS_BUILTINS: &[&str] = &[
    "console", "window", "document", "globalThis", "require", "module", "exports", "process",
    "setTimeout", "setInterval", "clearTimeout", "clearInterval", "parseInt", "parseFloat",
    "isNaN", "isFinite", "Math", "JSON", "Object", "Array", "String", "Number", "Boolean",
    "Symbol", "Promise", "Map", "Set", "WeakMap", "WeakSet", "Date", "RegExp", "Error",
    "TypeError", "RangeError", "Reflect", "Proxy", "NaN", "Infinity",
];

pub static JAVASCRIPT: LanguageDef = LanguageDef {
    keywords: JS_KEYWORDS,
    builtins: JS_BUILTINS,
    types: &[],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_BACKTICK),
    numbers: true,
    rules: &[
        capture(r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)", "function", 1),
        capture(r"\bclass\s+([A-Za-z_$][\w$]*)", "class", 1),
        rule(r"\b(?:true|false)\b", "boolean"),
        rule(r"\b(?:null|undefined)\b", "null"),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[
        ("regex", TagDefault::Inherit("string")),
        ("key", TagDefault::Inherit("property")),
    ],
    line_keywords: &[
        ("if_statement", &["if"]),
        ("else_clause", &["else"]),
        ("for_statement", &["for"]),
        ("for_in_statement", &["for"]),
        ("while_statement", &["while"]),
        ("do_statement", &["do"]),
        ("try_statement", &["try"]),
        ("catch_clause", &["catch"]),
        ("finally_clause", &["finally"]),
        ("switch_statement", &["switch"]),
    ],
    annotation_slots: &[],
};

pub static TYPESCRIPT: LanguageDef = LanguageDef {
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
        "function", "if", "import", "in", "instanceof", "let", "new", "of", "return", "static",
        "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with",
        "yield", "enum", "implements", "interface", "package", "private", "protected", "public",
        "abstract", "as", "type", "namespace", "declare", "readonly", "keyof", "infer", "is",
    ],
    builtins: JS_BUILTINS,
    types: &[
        "string", "number", "boolean", "any", "void", "never", "unknown", "object", "symbol",
        "bigint", "Array", "Record", "Partial", "Required", "Readonly", "Pick", "Omit",
        "Promise",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_BACKTICK),
    numbers: true,
    rules: &[
        capture(r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)", "function", 1),
        capture(r"\b(?:class|interface|enum|type)\s+([A-Za-z_$][\w$]*)", "class", 1),
        capture(r":\s*([A-Za-z_$][\w$.]*(?:<[^>]*>)?(?:\[\])?)", "type_annotation", 1),
        rule(r"@[A-Za-z_]\w*", "decorator"),
        rule(r"\b(?:true|false)\b", "boolean"),
        rule(r"\b(?:null|undefined)\b", "null"),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[],
    line_keywords: &[],
    annotation_slots: &[],
};

// ============================================================================
// JSON
// ============================================================================

pub static JSON: LanguageDef = LanguageDef {
    keywords: &[],
    builtins: &[],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: Some(r#""(?:[^"\\]|\\.)*""#),
    numbers: true,
    rules: &[
        capture(r#"("(?:[^"\\]|\\.)*")\s*:"#, "key", 1),
        rule(r"\b(?:true|false)\b", "boolean"),
        rule(r"\bnull\b", "null"),
    ],
    blocks: &[],
    tags: &[("key", TagDefault::Fixed("#9CDCFE"))],
    line_keywords: &[],
    annotation_slots: &[],
};

// ============================================================================
// C family
// ============================================================================

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

const C_RULES: &[Rule] = &[
    rule(r"^\s*#\s*[A-Za-z_]+", "preprocessor"),
    capture(r"^\s*#\s*include\s*(<[^>]*>)", "string", 1),
    rule(r"\b(?:NULL|EOF|stdin|stdout|stderr)\b", "constant"),
];

pub static C: LanguageDef = LanguageDef {
    keywords: C_KEYWORDS,
    builtins: &[
        "printf", "scanf", "malloc", "free", "calloc", "realloc", "strlen", "strcmp", "strcpy",
        "memcpy", "memset", "fopen", "fclose", "fprintf", "puts", "exit",
    ],
    types: &["size_t", "FILE", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint32_t"],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: C_RULES,
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("preprocessor", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static CPP: LanguageDef = LanguageDef {
    keywords: &[
        "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
        "class", "concept", "const", "consteval", "constexpr", "const_cast", "continue",
        "co_await", "co_return", "co_yield", "decltype", "default", "delete", "do", "double",
        "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
        "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new",
        "noexcept", "not", "nullptr", "operator", "or", "private", "protected", "public",
        "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
        "static", "static_assert", "static_cast", "struct", "switch", "template", "this",
        "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
        "unsigned", "using", "virtual", "void", "volatile", "while", "override", "final",
    ],
    builtins: &["cout", "cin", "cerr", "endl", "std", "printf", "malloc", "free"],
    types: &[
        "string", "vector", "map", "set", "unordered_map", "unordered_set", "array", "list",
        "deque", "queue", "stack", "pair", "tuple", "optional", "variant", "shared_ptr",
        "unique_ptr", "weak_ptr", "size_t",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: C_RULES,
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("preprocessor", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static OBJC: LanguageDef = LanguageDef {
    keywords: &[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "int", "long", "return", "short",
        "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
        "void", "while", "@interface", "@implementation", "@end", "@property", "@synthesize",
        "@protocol", "@class", "@selector", "self", "super", "nil", "YES", "NO", "id",
    ],
    builtins: &["NSLog", "NSString", "NSArray", "NSDictionary", "NSObject", "alloc", "init"],
    types: &["BOOL", "NSInteger", "NSUInteger", "CGFloat"],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(r#"@?"(?:[^"\\]|\\.)*"|'(?:\\.[^']*|[^'\\])'"#),
    numbers: true,
    rules: &[
        rule(r"^\s*#\s*[A-Za-z_]+", "preprocessor"),
        rule(r"@[A-Za-z_]\w*", "decorator"),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("preprocessor", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

// ============================================================================
// JVM and friends
// ============================================================================

pub static JAVA: LanguageDef = LanguageDef {
    keywords: &[
        "abstract", "assert", "break", "case", "catch", "class", "const", "continue",
        "default", "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if",
        "implements", "import", "instanceof", "interface", "native", "new", "package",
        "private", "protected", "public", "return", "static", "strictfp", "super", "switch",
        "synchronized", "this", "throw", "throws", "transient", "try", "void", "volatile",
        "while", "var", "yield", "record", "sealed", "permits", "true", "false", "null",
    ],
    builtins: &["System", "Math", "Objects", "Arrays", "Collections"],
    types: &[
        "boolean", "byte", "char", "double", "float", "int", "long", "short", "String",
        "Integer", "Long", "Double", "Float", "Boolean", "Character", "Object", "List",
        "ArrayList", "Map", "HashMap", "Set", "HashSet", "Optional",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: &[rule(r"@[A-Za-z_]\w*", "annotation")],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("annotation", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static KOTLIN: LanguageDef = LanguageDef {
    keywords: &[
        "abstract", "annotation", "as", "break", "by", "catch", "class", "companion", "const",
        "constructor", "continue", "data", "do", "else", "enum", "false", "final", "finally",
        "for", "fun", "if", "import", "in", "init", "inline", "inner", "interface", "internal",
        "is", "lateinit", "null", "object", "open", "operator", "out", "override", "package",
        "private", "protected", "public", "reified", "return", "sealed", "super", "suspend",
        "this", "throw", "true", "try", "typealias", "val", "var", "vararg", "when", "where",
        "while",
    ],
    builtins: &[
        "println", "print", "readLine", "listOf", "mapOf", "setOf", "arrayOf", "mutableListOf",
        "mutableMapOf", "mutableSetOf", "require", "check", "error", "lazy",
    ],
    types: &[
        "Int", "Long", "Short", "Byte", "Float", "Double", "Char", "Boolean", "String", "Any",
        "Unit", "Nothing", "Array", "List", "Map", "Set", "Pair", "Triple",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: &[rule(r"@[A-Za-z_]\w*", "annotation")],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("annotation", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static SCALA: LanguageDef = LanguageDef {
    keywords: &[
        "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
        "finally", "for", "forSome", "if", "implicit", "import", "lazy", "match", "new", "null",
        "object", "override", "package", "private", "protected", "return", "sealed", "super",
        "this", "throw", "trait", "try", "true", "type", "val", "var", "while", "with",
        "yield", "given", "using", "enum", "then",
    ],
    builtins: &["println", "print", "require", "assert"],
    types: &[
        "Int", "Long", "Double", "Float", "Boolean", "Char", "String", "Unit", "Any", "AnyRef",
        "Nothing", "Option", "Some", "None", "List", "Seq", "Map", "Set", "Vector",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED_CHAR),
    numbers: true,
    rules: &[rule(r"@[A-Za-z_]\w*", "annotation")],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("annotation", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static DART: LanguageDef = LanguageDef {
    keywords: &[
        "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class",
        "const", "continue", "default", "do", "dynamic", "else", "enum", "export", "extends",
        "extension", "factory", "false", "final", "finally", "for", "get", "if", "implements",
        "import", "in", "is", "late", "library", "mixin", "new", "null", "on", "part",
        "required", "rethrow", "return", "set", "static", "super", "switch", "this", "throw",
        "true", "try", "typedef", "var", "void", "while", "with", "yield",
    ],
    builtins: &["print", "debugPrint"],
    types: &[
        "int", "double", "num", "String", "bool", "List", "Map", "Set", "Future", "Stream",
        "Iterable", "Object", "Never", "Null", "Function",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[rule(r"@[A-Za-z_]\w*", "annotation")],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("annotation", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static SWIFT: LanguageDef = LanguageDef {
    keywords: &[
        "associatedtype", "break", "case", "catch", "class", "continue", "default", "defer",
        "deinit", "do", "else", "enum", "extension", "fallthrough", "false", "fileprivate",
        "final", "for", "func", "guard", "if", "import", "in", "init", "inout", "internal",
        "is", "lazy", "let", "mutating", "nil", "open", "operator", "override", "private",
        "protocol", "public", "repeat", "required", "rethrows", "return", "self", "Self",
        "some", "static", "struct", "subscript", "super", "switch", "throw", "throws", "true",
        "try", "typealias", "var", "weak", "where", "while", "async", "await", "actor",
    ],
    builtins: &["print", "debugPrint", "dump", "fatalError", "precondition", "assert"],
    types: &[
        "Int", "Int8", "Int16", "Int32", "Int64", "UInt", "UInt8", "Float", "Double", "Bool",
        "String", "Character", "Array", "Dictionary", "Set", "Optional", "Any", "AnyObject",
        "Void", "Never", "Result", "Error",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(r#""(?:[^"\\]|\\.)*""#),
    numbers: true,
    rules: &[rule(r"@[A-Za-z_]\w*", "annotation")],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("annotation", TagDefault::Inherit("decorator"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static GO: LanguageDef = LanguageDef {
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else",
        "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
        "package", "range", "return", "select", "struct", "switch", "type", "var", "true",
        "false", "nil", "iota",
    ],
    builtins: &[
        "append", "cap", "close", "copy", "delete", "len", "make", "new", "panic", "print",
        "println", "recover",
    ],
    types: &[
        "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int",
        "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16",
        "uint32", "uint64", "uintptr", "any",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(r#""(?:[^"\\]|\\.)*"|'(?:\\.[^']*|[^'\\])'|`[^`]*`"#),
    numbers: true,
    rules: &[capture(
        r"\bfunc\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)",
        "function",
        1,
    )],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[],
    line_keywords: &[],
    annotation_slots: &[],
};

// ============================================================================
// Scripting
// ============================================================================

pub static RUBY: LanguageDef = LanguageDef {
    keywords: &[
        "alias", "and", "begin", "break", "case", "class", "def", "defined?", "do", "else",
        "elsif", "end", "ensure", "false", "for", "if", "in", "module", "next", "nil", "not",
        "or", "redo", "rescue", "retry", "return", "self", "super", "then", "true", "undef",
        "unless", "until", "when", "while", "yield", "raise",
    ],
    builtins: &[
        "puts", "print", "p", "gets", "require", "require_relative", "include", "extend",
        "attr_reader", "attr_writer", "attr_accessor", "lambda", "proc",
    ],
    types: &[],
    comment: Some("#"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[
        rule(r"@@[A-Za-z_]\w*", "class_var"),
        capture(r"(?:^|[^@\w])(@[A-Za-z_]\w*)", "instance_var", 1),
        rule(r"\$[A-Za-z_]\w*", "global_var"),
        capture(r"(?:^|[^:\w])(:[A-Za-z_]\w*[?!]?)", "symbol", 1),
        rule(r"#\{[^}]*\}", "interpolation"),
    ],
    blocks: &[BlockRule {
        pattern: r"(?ms)^=begin\b.*?^=end\b",
        tag: "comment",
        shields: true,
    }],
    tags: &[
        ("instance_var", TagDefault::Inherit("variable")),
        ("class_var", TagDefault::Inherit("class")),
        ("global_var", TagDefault::Fixed("#D16969")),
        ("symbol", TagDefault::Inherit("constant")),
        ("interpolation", TagDefault::Fixed("#D7BA7D")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static PHP: LanguageDef = LanguageDef {
    keywords: &[
        "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
        "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif",
        "empty", "extends", "final", "finally", "fn", "for", "foreach", "function", "global",
        "if", "implements", "include", "include_once", "instanceof", "insteadof", "interface",
        "isset", "list", "match", "namespace", "new", "or", "print", "private", "protected",
        "public", "readonly", "require", "require_once", "return", "static", "switch", "throw",
        "trait", "try", "unset", "use", "var", "while", "xor", "yield", "true", "false", "null",
    ],
    builtins: &[
        "count", "strlen", "strpos", "substr", "explode", "implode", "array_push",
        "array_pop", "array_map", "array_filter", "in_array", "var_dump", "print_r", "json_encode",
        "json_decode",
    ],
    types: &[
        "int", "float", "string", "bool", "object", "iterable", "void", "mixed", "never",
    ],
    comment: Some("//"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[
        rule(r"\$[A-Za-z_]\w*", "variable"),
        rule(r"<\?php|<\?=|\?>", "php_tag"),
        rule(r"#.*$", "comment"),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[("php_tag", TagDefault::Fixed("#FF8C00"))],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static LUA: LanguageDef = LanguageDef {
    keywords: &[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto",
        "if", "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until",
        "while",
    ],
    builtins: &[
        "print", "type", "tostring", "tonumber", "pairs", "ipairs", "next", "select", "unpack",
        "require", "pcall", "xpcall", "error", "assert", "setmetatable", "getmetatable",
        "rawget", "rawset", "string", "table", "math", "coroutine", "_G", "_VERSION",
    ],
    types: &[],
    comment: Some("--"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[],
    blocks: &[
        BlockRule {
            pattern: r"(?s)--\[\[.*?\]\]",
            tag: "comment",
            shields: true,
        },
        BlockRule {
            pattern: r"(?s)\[\[.*?\]\]",
            tag: "string",
            shields: true,
        },
    ],
    tags: &[],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static BASH: LanguageDef = LanguageDef {
    keywords: &[
        "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until", "do",
        "done", "in", "function", "select", "return", "exit", "break", "continue", "shift",
        "export", "readonly", "declare", "local", "unset", "source", "alias", "eval", "exec",
        "trap", "set",
    ],
    builtins: &[
        "echo", "printf", "read", "cd", "pwd", "ls", "cp", "mv", "rm", "mkdir", "cat", "grep",
        "sed", "awk", "find", "sort", "test", "true", "false",
    ],
    types: &[],
    comment: Some("#"),
    case_insensitive: false,
    strings: Some(QUOTED_BACKTICK),
    numbers: true,
    rules: &[rule(r"\$\{[^}]*\}|\$[A-Za-z_]\w*|\$[0-9@#?*$!]", "variable")],
    blocks: &[],
    tags: &[],
    line_keywords: &[],
    annotation_slots: &[],
};

// ============================================================================
// Data and markup
// ============================================================================

pub static SQL: LanguageDef = LanguageDef {
    keywords: &[
        "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE",
        "CREATE", "TABLE", "ALTER", "DROP", "TRUNCATE", "INDEX", "VIEW", "DATABASE", "SCHEMA",
        "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "ON", "CROSS", "NATURAL", "GROUP",
        "BY", "HAVING", "ORDER", "LIMIT", "OFFSET", "DISTINCT", "UNION", "ALL", "EXCEPT",
        "INTERSECT", "AND", "OR", "NOT", "IN", "BETWEEN", "LIKE", "IS", "NULL", "EXISTS",
        "ANY", "SOME", "AS", "CASE", "WHEN", "THEN", "ELSE", "END", "PRIMARY", "KEY",
        "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "BEGIN", "COMMIT", "ROLLBACK",
        "SAVEPOINT", "TRUE", "FALSE",
    ],
    builtins: &[
        "COUNT", "SUM", "AVG", "MIN", "MAX", "COALESCE", "NULLIF", "CAST", "count", "sum",
        "avg", "min", "max", "coalesce",
    ],
    types: &[
        "INT", "INTEGER", "BIGINT", "SMALLINT", "TINYINT", "FLOAT", "DOUBLE", "DECIMAL",
        "NUMERIC", "CHAR", "VARCHAR", "TEXT", "BLOB", "DATE", "TIME", "DATETIME", "TIMESTAMP",
        "BOOLEAN", "BOOL", "int", "integer", "varchar", "text", "boolean",
    ],
    comment: Some("--"),
    case_insensitive: true,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static CSS: LanguageDef = LanguageDef {
    keywords: &["important", "inherit", "initial", "unset", "auto", "none"],
    builtins: &[
        "rgb", "rgba", "hsl", "hsla", "calc", "var", "url", "min", "max", "clamp",
        "linear-gradient", "radial-gradient",
    ],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[
        capture(r"^\s*([^{}:;/]+?)\s*\{", "selector", 1),
        capture(r"^\s*([A-Za-z-]+)\s*:[^{]*;?\s*$", "property", 1),
        rule(r"#[0-9a-fA-F]{3,8}\b", "color"),
        capture(r"\d(px|em|rem|vh|vw|vmin|vmax|ms|s|deg|%)", "unit", 1),
        rule(r"@[A-Za-z-]+", "media"),
    ],
    blocks: &[C_BLOCK_COMMENT],
    tags: &[
        ("selector", TagDefault::Fixed("#D7BA7D")),
        ("unit", TagDefault::Inherit("number")),
        ("color", TagDefault::Inherit("string")),
        ("media", TagDefault::Inherit("decorator")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static HTML: LanguageDef = LanguageDef {
    keywords: &[],
    builtins: &[],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: false,
    rules: &[
        capture(r"</?([A-Za-z][\w:-]*)", "tag", 1),
        capture(r"\s([A-Za-z_:][\w:.-]*)\s*=", "attribute", 1),
        rule(r"&#?\w+;", "entity"),
        rule(r"(?i)<!DOCTYPE[^>]*>", "doctype"),
    ],
    blocks: &[BlockRule {
        pattern: r"(?s)<!--.*?-->",
        tag: "comment",
        shields: true,
    }],
    tags: &[
        ("tag", TagDefault::Fixed("#569CD6")),
        ("attribute", TagDefault::Fixed("#9CDCFE")),
        ("entity", TagDefault::Inherit("operator")),
        ("doctype", TagDefault::Inherit("decorator")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static XML: LanguageDef = LanguageDef {
    keywords: &[],
    builtins: &[],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: false,
    rules: &[
        capture(r"</?([A-Za-z_][\w:.-]*)", "tag", 1),
        capture(r"\s([A-Za-z_:][\w:.-]*)\s*=", "attribute", 1),
        rule(r"<\?xml[^>]*\?>|<!DOCTYPE[^>]*>", "doctype"),
        rule(r"&#?\w+;", "entity"),
    ],
    blocks: &[
        BlockRule {
            pattern: r"(?s)<!--.*?-->",
            tag: "comment",
            shields: true,
        },
        BlockRule {
            pattern: r"(?s)<!\[CDATA\[.*?\]\]>",
            tag: "cdata",
            shields: true,
        },
    ],
    tags: &[
        ("tag", TagDefault::Fixed("#569CD6")),
        ("attribute", TagDefault::Fixed("#9CDCFE")),
        ("cdata", TagDefault::Fixed("#FF8C00")),
        ("doctype", TagDefault::Inherit("decorator")),
        ("entity", TagDefault::Inherit("operator")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static YAML: LanguageDef = LanguageDef {
    keywords: &["true", "false", "null", "yes", "no", "on", "off", "True", "False", "Null"],
    builtins: &[],
    types: &[],
    comment: Some("#"),
    case_insensitive: false,
    strings: Some(QUOTED),
    numbers: true,
    rules: &[
        capture(r"^\s*(?:-\s+)?([\w.-]+)\s*:(?:\s|$)", "key", 1),
        rule(r"&[\w-]+", "anchor"),
        capture(r"(?:^|\s)(\*[\w-]+)", "alias", 1),
        rule(r"^(?:---|\.\.\.)\s*$", "document_marker"),
        rule(r"^%[A-Za-z]+", "directive"),
    ],
    blocks: &[],
    tags: &[
        ("key", TagDefault::Fixed("#9CDCFE")),
        ("anchor", TagDefault::Inherit("decorator")),
        ("alias", TagDefault::Inherit("decorator")),
        ("directive", TagDefault::Fixed("#FF8C00")),
        ("document_marker", TagDefault::Inherit("keyword")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static MARKDOWN: LanguageDef = LanguageDef {
    keywords: &[],
    builtins: &[],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: None,
    numbers: false,
    rules: &[
        rule(r"^#{1,6}\s+.*$", "heading"),
        rule(r"\*\*[^*]+\*\*|__[^_]+__", "bold"),
        capture(r"(?:^|[^*])(\*[^*\s][^*]*\*)(?:[^*]|$)", "italic", 1),
        rule(r"`[^`]+`", "inline_code"),
        rule(r"!\[[^\]]*\]\([^)]+\)", "image"),
        capture(r"(?:^|[^!])(\[[^\]]+\]\([^)]+\))", "link", 1),
        rule(r"^>\s+.*$", "blockquote"),
        rule(r"^\s*(?:[-*+]|\d+\.)\s+", "list"),
        rule(r"^[-*_]{3,}\s*$", "horizontal_rule"),
        rule(r"~~[^~]+~~", "strikethrough"),
        rule(r"^\|.*\|$", "table"),
    ],
    blocks: &[BlockRule {
        pattern: r"(?s)```.*?```|~~~.*?~~~",
        tag: "code_block",
        shields: true,
    }],
    tags: &[
        ("heading", TagDefault::Fixed("#569CD6")),
        ("bold", TagDefault::Fixed("#DCDCAA")),
        ("italic", TagDefault::Fixed("#DCDCAA")),
        ("code_block", TagDefault::Fixed("#CE9178")),
        ("inline_code", TagDefault::Fixed("#CE9178")),
        ("link", TagDefault::Fixed("#4EC9B0")),
        ("image", TagDefault::Fixed("#4EC9B0")),
        ("blockquote", TagDefault::Fixed("#6A9955")),
        ("list", TagDefault::Fixed("#B5CEA8")),
        ("horizontal_rule", TagDefault::Fixed("#D4D4D4")),
        ("table", TagDefault::Fixed("#9CDCFE")),
        ("strikethrough", TagDefault::Fixed("#C586C0")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};

pub static LOG: LanguageDef = LanguageDef {
    keywords: &[],
    builtins: &[],
    types: &[],
    comment: None,
    case_insensitive: false,
    strings: None,
    numbers: false,
    rules: &[
        rule(
            r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?",
            "timestamp",
        ),
        rule(r"\d{2}/\d{2}/\d{4}\s+\d{2}:\d{2}:\d{2}(?:\.\d+)?", "timestamp"),
        rule(r"\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d+)?", "timestamp"),
        rule(r"\b(?:DEBUG|debug|Debug)\b", "log_level_debug"),
        rule(
            r"\b(?:INFO|info|Info|INFORMATION|information|Information)\b",
            "log_level_info",
        ),
        rule(r"\b(?:WARNING|warning|Warning|WARN|warn|Warn)\b", "log_level_warning"),
        rule(r"\b(?:ERROR|error|Error|ERR|err|Err)\b", "log_level_error"),
        rule(r"\b(?:CRITICAL|critical|Critical|FATAL|fatal|Fatal)\b", "log_level_critical"),
        rule(r"\b(?:\d{1,3}\.){3}\d{1,3}\b", "ip_address"),
        rule(r"https?://\S+|www\.\S+", "url"),
        rule(r"(?i)\b(?:exception|traceback|stacktrace)\b", "exception"),
        rule(r#"^\s+File\s+"[^"]*",\s+line\s+\d+"#, "stack_trace"),
        rule(r"(?i)\bline\s+\d+\b", "line_number"),
        rule(r"(?:/[\w.-]+){2,}", "file_path"),
        rule(r"\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", "numeric_value"),
    ],
    blocks: &[],
    tags: &[
        ("timestamp", TagDefault::Fixed("#6A9955")),
        ("log_level_debug", TagDefault::Fixed("#569CD6")),
        ("log_level_info", TagDefault::Fixed("#4EC9B0")),
        ("log_level_warning", TagDefault::Fixed("#DCDCAA")),
        ("log_level_error", TagDefault::Fixed("#CE9178")),
        ("log_level_critical", TagDefault::Fixed("#C586C0")),
        ("file_path", TagDefault::Fixed("#B5CEA8")),
        ("line_number", TagDefault::Fixed("#B5CEA8")),
        ("ip_address", TagDefault::Fixed("#4FC1FF")),
        ("url", TagDefault::Fixed("#4EC9B0")),
        ("exception", TagDefault::Fixed("#CE9178")),
        ("stack_trace", TagDefault::Fixed("#D4D4D4")),
        ("numeric_value", TagDefault::Fixed("#B5CEA8")),
    ],
    line_keywords: &[],
    annotation_slots: &[],
};
