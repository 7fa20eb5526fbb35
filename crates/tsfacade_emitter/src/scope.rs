//! Lexical scopes of a declaration document.

use tsfacade_core::{capitalize, escape_identifier, unquote};

/// Dotted path of raw namespace names, used only for binding targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespacePath(String);

impl NamespacePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path extended by one module name.
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{}", self.0, segment))
        }
    }

    /// The JS name of `name` declared in this namespace.
    pub fn qualify(&self, name: &str) -> String {
        self.join(name).0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The document itself, rendered into the package clause.
    TopLevel,
    /// A `declare module` / `namespace` body.
    Module,
}

/// One lexical scope: the document or a module body.
#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Package name at top level, raw (unquoted) module name otherwise.
    pub name: String,
    pub path: NamespacePath,
}

impl Scope {
    pub fn top_level(package_name: &str) -> Self {
        Self {
            kind: ScopeKind::TopLevel,
            name: package_name.to_string(),
            path: NamespacePath::root(),
        }
    }

    /// The scope opened by a module named `raw_name` inside this one.
    pub fn module(&self, raw_name: &str) -> Self {
        let name = unquote(raw_name).to_string();
        let path = self.path.join(&name);
        Self {
            kind: ScopeKind::Module,
            name,
            path,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.kind == ScopeKind::TopLevel
    }

    /// The binding annotation of a class-like declaration named `name`:
    /// bare `@JSGlobal` at top level, the dotted path inside a module.
    pub fn global_annotation(&self, name: &str) -> String {
        if self.path.is_root() {
            "@JSGlobal".to_string()
        } else {
            format!("@JSGlobal(\"{}\")", self.path.qualify(name))
        }
    }

    /// The name of this scope's synthetic object.
    pub fn object_name(&self) -> String {
        let last = self.name.rsplit('.').next().unwrap_or(&self.name);
        escape_identifier(&capitalize(last)).into_owned()
    }

    /// The binding annotation of this scope's synthetic object.
    pub fn object_annotation(&self) -> String {
        match self.kind {
            ScopeKind::TopLevel => "@JSGlobalScope".to_string(),
            ScopeKind::Module => format!("@JSGlobal(\"{}\")", self.path.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_path() {
        let root = NamespacePath::root();
        assert!(root.is_root());
        assert_eq!(root.qualify("Foo"), "Foo");
        let nested = root.join("a").join("b");
        assert_eq!(nested.as_str(), "a.b");
        assert_eq!(nested.qualify("Foo"), "a.b.Foo");
    }

    #[test]
    fn test_module_scope() {
        let top = Scope::top_level("my-lib");
        assert_eq!(top.global_annotation("Foo"), "@JSGlobal");
        assert_eq!(top.object_name(), "`My-lib`");
        assert_eq!(top.object_annotation(), "@JSGlobalScope");

        let module = top.module("\"events\"").module("inner");
        assert_eq!(module.path.as_str(), "events.inner");
        assert_eq!(module.global_annotation("Emitter"), "@JSGlobal(\"events.inner.Emitter\")");
        assert_eq!(module.object_name(), "Inner");
        assert_eq!(module.object_annotation(), "@JSGlobal(\"events.inner\")");
    }

    #[test]
    fn test_dotted_module_name() {
        let module = Scope::top_level("pkg").module("a.b");
        assert_eq!(module.path.as_str(), "a.b");
        assert_eq!(module.object_name(), "B");
    }
}
