//! Identifier rules for the Scala target.
//!
//! Every place that prints a source name as a Scala identifier goes through
//! [`escape_identifier`], so a reserved word is quoted the same way whether
//! it names a declaration, a member, or a parameter.

use std::borrow::Cow;
use unicode_xid::UnicodeXID;

/// Whether `name` is a Scala reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "abstract"
            | "case"
            | "catch"
            | "class"
            | "def"
            | "do"
            | "else"
            | "extends"
            | "false"
            | "final"
            | "finally"
            | "for"
            | "forSome"
            | "if"
            | "implicit"
            | "import"
            | "lazy"
            | "macro"
            | "match"
            | "new"
            | "null"
            | "object"
            | "override"
            | "package"
            | "private"
            | "protected"
            | "return"
            | "sealed"
            | "super"
            | "then"
            | "this"
            | "throw"
            | "trait"
            | "try"
            | "true"
            | "type"
            | "val"
            | "var"
            | "while"
            | "with"
            | "yield"
    )
}

/// Whether `name` can be written as a plain (unquoted) identifier.
///
/// `$` is accepted in every position since both languages allow it.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c == '$' || c.is_xid_start() => {}
        _ => return false,
    }
    chars.all(|c| c == '$' || c.is_xid_continue())
}

/// Quote `name` with backticks when it is reserved or not a plain
/// identifier (numeric keys, dotted or dashed property names).
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_reserved_word(name) || !is_identifier(name) {
        Cow::Owned(format!("`{}`", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Render one package clause segment. Names containing `-`, failing
/// `[A-Za-z_][A-Za-z0-9_]*`, or reserved are backtick-quoted.
pub fn package_clause_name(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };
    if name.contains('-') || !plain || is_reserved_word(name) {
        Cow::Owned(format!("`{}`", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip one pair of matching surrounding quotes (`"foo"`, `'foo'`).
pub fn unquote(name: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}
