//! Per-scope export buckets and the synthetic scope object.
//!
//! Type aliases, functions and (at top level) loose variables have no host
//! declaration in the facade. They are collected while a scope is emitted
//! and rendered afterwards as members of one object per scope.

use crate::members::render_function;
use crate::scope::{Scope, ScopeKind};
use crate::types::{render_type_parameters, translate, translate_or, ANY};
use tracing::{debug, trace};
use tsfacade_ast::*;
use tsfacade_core::{escape_identifier, OrderedSet};
use tsfacade_printer::CodeWriter;

/// The classified declarations of one scope.
/// Every sequence keeps source order.
#[derive(Debug, Default)]
pub struct ScopeExports<'a> {
    /// Classified for the scope's trace only. Interfaces are written at
    /// their own declaration site and never enter the object.
    pub interfaces: Vec<&'a InterfaceDeclaration>,
    pub type_aliases: Vec<&'a TypeAliasDeclaration>,
    pub functions: Vec<&'a FunctionDeclaration>,
    pub export_assignments: Vec<&'a ExportAssignment>,
    pub variables: Vec<&'a VariableDeclaration>,
}

impl<'a> ScopeExports<'a> {
    /// Classify one statement of a scope of the given kind.
    pub fn record(&mut self, statement: &'a Statement, kind: ScopeKind) {
        match statement {
            Statement::InterfaceDeclaration(i) => {
                if kind == ScopeKind::Module || i.modifiers.contains(ModifierFlags::EXPORT) {
                    self.interfaces.push(i);
                }
            }
            Statement::TypeAliasDeclaration(t) => self.type_aliases.push(t),
            Statement::FunctionDeclaration(f) => {
                if f.name.is_some() {
                    self.functions.push(f);
                }
            }
            Statement::ExportAssignment(e) => self.export_assignments.push(e),
            Statement::VariableStatement(v) if kind == ScopeKind::TopLevel => {
                self.variables.extend(
                    v.declarations
                        .iter()
                        .filter(|d| d.object_literal_members().is_none()),
                );
            }
            _ => {}
        }
    }

    /// Whether the scope gets a synthetic object. An export assignment
    /// counts even when its target cannot be resolved.
    pub fn has_members(&self, kind: ScopeKind) -> bool {
        let base = !self.type_aliases.is_empty() || !self.export_assignments.is_empty();
        match kind {
            ScopeKind::TopLevel => base || !self.variables.is_empty(),
            ScopeKind::Module => base || !self.functions.is_empty(),
        }
    }

    /// The first function declared under `name`.
    fn function_named(&self, name: &str) -> Option<&'a FunctionDeclaration> {
        self.functions
            .iter()
            .copied()
            .find(|f| f.name.as_deref() == Some(name))
    }

    /// The members of the synthetic object, deduplicated by text.
    pub fn member_lines(&self, kind: ScopeKind) -> OrderedSet<String> {
        let mut lines = OrderedSet::new();

        for alias in &self.type_aliases {
            lines.insert(format!(
                "type {}{} = {}",
                escape_identifier(&alias.name),
                render_type_parameters(&alias.type_parameters),
                translate(&alias.type_node)
            ));
        }

        for assignment in &self.export_assignments {
            let target = assignment.expression.as_deref();
            match target.and_then(|name| self.function_named(name)).and_then(render_function) {
                Some(line) => {
                    lines.insert(line);
                }
                None => debug!(export = ?target, "unresolved export assignment omitted"),
            }
        }

        if kind == ScopeKind::Module {
            lines.extend(self.functions.iter().filter_map(|f| render_function(f)));
        }

        for variable in &self.variables {
            lines.insert(format!(
                "val {}: {} = js.native",
                escape_identifier(&variable.name),
                translate_or(variable.type_annotation.as_ref(), ANY)
            ));
        }

        lines
    }
}

/// Emit the synthetic object of `scope`, if it has any members. The body
/// may be empty when only unresolved export assignments were recorded.
pub fn emit_scope_object(writer: &mut CodeWriter, exports: &ScopeExports<'_>, scope: &Scope) {
    trace!(
        scope = %scope.name,
        interfaces = exports.interfaces.len(),
        export_assignments = exports.export_assignments.len(),
        type_aliases = exports.type_aliases.len(),
        functions = exports.functions.len(),
        "scope exports collected"
    );
    if !exports.has_members(scope.kind) {
        return;
    }
    let lines = exports.member_lines(scope.kind);

    writer.blank_line();
    writer.at_root(|w| {
        w.write_line("@js.native");
        w.write_line(&scope.object_annotation());
        w.block(&format!("object {} extends js.Object", scope.object_name()), |w| {
            for line in lines.iter() {
                w.write_line(line);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(name: &str, ty: TypeNode) -> Statement {
        Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            name: name.to_string(),
            type_node: ty,
            ..Default::default()
        })
    }

    fn function(name: &str) -> Statement {
        Statement::FunctionDeclaration(FunctionDeclaration {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    fn export_equals(name: &str) -> Statement {
        Statement::ExportAssignment(ExportAssignment {
            expression: Some(name.to_string()),
            is_export_equals: true,
        })
    }

    fn collect(statements: &[Statement], kind: ScopeKind) -> ScopeExports<'_> {
        let mut exports = ScopeExports::default();
        for statement in statements {
            exports.record(statement, kind);
        }
        exports
    }

    #[test]
    fn test_member_order() {
        let statements = vec![
            export_equals("run"),
            alias("B", TypeNode::keyword(Keyword::Number)),
            function("run"),
            Statement::VariableStatement(VariableStatement {
                declarations: vec![VariableDeclaration {
                    name: "version".to_string(),
                    type_annotation: Some(TypeNode::keyword(Keyword::String)),
                }],
                ..Default::default()
            }),
            alias("A", TypeNode::keyword(Keyword::String)),
        ];
        let exports = collect(&statements, ScopeKind::TopLevel);
        assert_eq!(
            exports.member_lines(ScopeKind::TopLevel).into_vec(),
            vec![
                "type B = Double",
                "type A = String",
                "def run(): Unit = js.native",
                "val version: String = js.native",
            ]
        );
    }

    #[test]
    fn test_unresolved_export_assignment_is_omitted() {
        let statements = vec![export_equals("missing"), function("other")];
        let exports = collect(&statements, ScopeKind::TopLevel);
        assert!(exports.member_lines(ScopeKind::TopLevel).is_empty());
    }

    #[test]
    fn test_module_functions_dedupe_with_forwards() {
        let statements = vec![function("run"), export_equals("run")];
        let exports = collect(&statements, ScopeKind::Module);
        assert_eq!(
            exports.member_lines(ScopeKind::Module).into_vec(),
            vec!["def run(): Unit = js.native"]
        );
    }

    #[test]
    fn test_unresolved_export_assignment_still_counts() {
        let statements = vec![export_equals("missing")];
        let exports = collect(&statements, ScopeKind::TopLevel);
        assert!(exports.has_members(ScopeKind::TopLevel));
        assert!(exports.member_lines(ScopeKind::TopLevel).is_empty());
    }

    #[test]
    fn test_member_trigger_by_scope_kind() {
        let statements = vec![
            function("run"),
            Statement::InterfaceDeclaration(InterfaceDeclaration {
                name: "A".to_string(),
                modifiers: ModifierFlags::EXPORT,
                ..Default::default()
            }),
        ];
        assert!(!collect(&statements, ScopeKind::TopLevel).has_members(ScopeKind::TopLevel));
        assert!(collect(&statements, ScopeKind::Module).has_members(ScopeKind::Module));
    }

    #[test]
    fn test_interface_classification() {
        let exported = Statement::InterfaceDeclaration(InterfaceDeclaration {
            name: "A".to_string(),
            modifiers: ModifierFlags::EXPORT,
            ..Default::default()
        });
        let local = Statement::InterfaceDeclaration(InterfaceDeclaration {
            name: "B".to_string(),
            ..Default::default()
        });
        let statements = vec![exported, local];
        assert_eq!(collect(&statements, ScopeKind::TopLevel).interfaces.len(), 1);
        assert_eq!(collect(&statements, ScopeKind::Module).interfaces.len(), 2);
    }

    #[test]
    fn test_object_literal_variables_are_not_loose() {
        let statements = vec![Statement::VariableStatement(VariableStatement {
            declarations: vec![
                VariableDeclaration {
                    name: "config".to_string(),
                    type_annotation: Some(TypeNode::type_literal(vec![])),
                },
                VariableDeclaration {
                    name: "anything".to_string(),
                    type_annotation: None,
                },
            ],
            ..Default::default()
        })];
        let exports = collect(&statements, ScopeKind::TopLevel);
        assert_eq!(
            exports.member_lines(ScopeKind::TopLevel).into_vec(),
            vec!["val anything: js.Any = js.native"]
        );
        assert!(collect(&statements, ScopeKind::Module).variables.is_empty());
    }
}
