//! Modifier flags and the small keyword enums referenced by nodes.

use serde::{Deserialize, Deserializer};

bitflags::bitflags! {
    /// Modifier flags for declarations and members, matching TypeScript's ModifierFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 12;

        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

/// A modifier keyword as it appears in the serialised tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Export,
    Declare,
    Public,
    Private,
    Protected,
    Static,
    Readonly,
    Accessor,
    Abstract,
    Async,
    Default,
    Const,
    Override,
    #[serde(other)]
    Other,
}

impl From<Modifier> for ModifierFlags {
    fn from(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Export => ModifierFlags::EXPORT,
            Modifier::Declare => ModifierFlags::AMBIENT,
            Modifier::Public => ModifierFlags::PUBLIC,
            Modifier::Private => ModifierFlags::PRIVATE,
            Modifier::Protected => ModifierFlags::PROTECTED,
            Modifier::Static => ModifierFlags::STATIC,
            Modifier::Readonly => ModifierFlags::READONLY,
            Modifier::Accessor => ModifierFlags::ACCESSOR,
            Modifier::Abstract => ModifierFlags::ABSTRACT,
            Modifier::Async => ModifierFlags::ASYNC,
            Modifier::Default => ModifierFlags::DEFAULT,
            Modifier::Const => ModifierFlags::CONST,
            Modifier::Override => ModifierFlags::OVERRIDE,
            Modifier::Other => ModifierFlags::NONE,
        }
    }
}

impl ModifierFlags {
    /// Fold a modifier list into flags.
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        modifiers
            .into_iter()
            .fold(ModifierFlags::NONE, |flags, m| flags | ModifierFlags::from(m))
    }
}

/// Deserialise a `["export", "declare"]` style list into [`ModifierFlags`].
pub fn deserialize_modifiers<'de, D>(deserializer: D) -> Result<ModifierFlags, D::Error>
where
    D: Deserializer<'de>,
{
    let modifiers = Vec::<Modifier>::deserialize(deserializer)?;
    Ok(ModifierFlags::from_modifiers(modifiers))
}

/// Keyword types (`string`, `void`, `this`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    String,
    Number,
    Boolean,
    Void,
    Any,
    Object,
    Never,
    This,
    Null,
    Undefined,
    Unknown,
    Symbol,
    Bigint,
    #[serde(other)]
    Other,
}

/// The kind of a literal type's literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
    #[serde(other)]
    Other,
}

/// The operator of a type operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeOperatorKind {
    Keyof,
    Readonly,
    Unique,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_list_folds_into_flags() {
        let flags = ModifierFlags::from_modifiers([Modifier::Export, Modifier::Abstract]);
        assert!(flags.contains(ModifierFlags::EXPORT));
        assert!(flags.contains(ModifierFlags::ABSTRACT));
        assert!(!flags.contains(ModifierFlags::READONLY));
    }

    #[test]
    fn test_unknown_modifier_is_ignored() {
        let modifiers: Vec<Modifier> = serde_json::from_str(r#"["declare", "in"]"#).unwrap();
        assert_eq!(modifiers, vec![Modifier::Declare, Modifier::Other]);
        assert_eq!(ModifierFlags::from_modifiers(modifiers), ModifierFlags::AMBIENT);
    }

    #[test]
    fn test_keyword_names() {
        let keywords: Vec<Keyword> =
            serde_json::from_str(r#"["string", "bigint", "this", "intrinsic"]"#).unwrap();
        assert_eq!(
            keywords,
            vec![Keyword::String, Keyword::Bigint, Keyword::This, Keyword::Other]
        );
    }
}
