use crate::SchemaError;

/// Words that can never name a field: strict, reserved, and edition keywords.
const KEYWORDS: &[&str] = &[
    // strict
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn",
    // reserved
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "virtual", "yield", "try", "gen",
];

/// Returns true if `name` is a Rust keyword and can't be used as a plain field name.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Returns true if `name` is usable as a field identifier.
///
/// Follows the Unicode identifier rules rustc uses: the first character is
/// `XID_Start` or `_`, the rest `XID_Continue`. A lone `_` and keywords are
/// rejected. Raw identifiers (`r#type`) are not field names either: the `#`
/// fails the character check.
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(unicode_ident::is_xid_start(first) || first == '_') {
        return false;
    }
    if !chars.all(unicode_ident::is_xid_continue) {
        return false;
    }
    name != "_" && !is_keyword(name)
}

/// Checks one declaration's name against the identifier rules and the names
/// already accumulated in the current block.
///
/// Never mutates anything: callers append only after this returns `Ok`.
pub fn validate_declaration<'a>(
    name: &str,
    mut existing: impl Iterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    if !is_valid_field_name(name) {
        return Err(SchemaError::InvalidFieldName {
            name: name.to_owned(),
        });
    }
    if existing.any(|known| known == name) {
        return Err(SchemaError::DuplicateField {
            name: name.to_owned(),
        });
    }
    Ok(())
}
