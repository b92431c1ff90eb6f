//! Identifier rules for substituted names.
//!
//! Kept dependency-free: the rules only need ASCII classification and a
//! handful of fixed word lists.

/// Strict and reserved keywords across the 2018, 2021 and 2024 editions.
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/// Type names the module template refers to unqualified. A struct with one of
/// these names would shadow it inside the generated namespace.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64", "String",
];

/// Crate names that resolve to the sysroot instead of the generated crate.
const RESERVED_CRATE_NAMES: &[&str] = &["std", "core", "alloc", "proc_macro", "test"];

pub fn is_rust_keyword(s: &str) -> bool {
    RUST_KEYWORDS.contains(&s)
}

pub fn is_reserved_type_name(s: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&s)
}

pub fn is_reserved_crate_name(s: &str) -> bool {
    RESERVED_CRATE_NAMES.contains(&s)
}

/// Convert a PascalCase / camelCase name to snake_case.
///
/// Acronym runs stay together: `HTTPServer` becomes `http_server`.
/// Existing underscores are kept and never doubled.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}
