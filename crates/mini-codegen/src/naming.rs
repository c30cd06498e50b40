//! Identifier case conversion for generated names.

use crate::error::CodegenError;

/// Strict and reserved keywords of the 2021 edition, plus `gen` (2024).
/// Generated module and crate names must avoid all of them.
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl",
    "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract",
    "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
    "try", "gen",
];

/// Whether `ident` is a Rust keyword. `Self` is caught through its lowercase form.
pub fn is_rust_keyword(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident.to_lowercase().as_str())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Split on separators and camel-case boundaries.
///
/// `HTTPServer` splits as `HTTP`, `Server`; `sendEmail2Fast` as `send`, `Email2`, `Fast`.
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `send-email` -> `SendEmail`.
///
/// Separator runs are dropped and the character after them is uppercased,
/// as is the first character. Everything else is kept as written.
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;

    for c in input.chars() {
        if is_separator(c) {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// `send-email` -> `sendEmail`.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `SendEmail` -> `send-email`.
pub fn to_kebab_case(input: &str) -> String {
    join_lower(input, "-")
}

/// `SendEmail` -> `send_email`.
pub fn to_snake_case(input: &str) -> String {
    join_lower(input, "_")
}

fn join_lower(input: &str, separator: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Check that `name` yields a usable Rust type name and return it in PascalCase.
pub fn validate_name(name: &str) -> Result<String, CodegenError> {
    let pascal = to_pascal_case(name.trim());

    let Some(first) = pascal.chars().next() else {
        return Err(CodegenError::invalid_name(name, "name is empty"));
    };
    if !first.is_ascii_alphabetic() {
        return Err(CodegenError::invalid_name(name, "name must start with a letter"));
    }
    if let Some(bad) = pascal.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(CodegenError::invalid_name(name, format!("unsupported character '{}'", bad)));
    }

    let module = to_snake_case(name);
    if is_rust_keyword(&module) {
        return Err(CodegenError::invalid_name(
            name,
            format!("'{}' is a Rust keyword and cannot name a module or crate", module),
        ));
    }

    Ok(pascal)
}
