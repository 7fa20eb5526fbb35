//! Declaration emitting.
//!
//! Every block is written at root indentation and preceded by a blank line:
//! Scala packages nest by name, not by braces, so module bodies are
//! siblings of the enclosing package rather than indented children.

use crate::exports::{emit_scope_object, ScopeExports};
use crate::members::{render_member, MemberOwner, RenderedMember};
use crate::scope::Scope;
use crate::types::{render_type_parameters, translate_or, ANY};
use indexmap::IndexMap;
use tracing::{debug, trace};
use tsfacade_ast::*;
use tsfacade_core::collections::FxHashSet;
use tsfacade_core::{escape_identifier, package_clause_name, unquote};
use tsfacade_printer::CodeWriter;

const ANONYMOUS_CLASS: &str = "AnonymousClass";

/// Emit every statement of a scope, then the scope's synthetic object.
pub fn emit_scope(writer: &mut CodeWriter, statements: &[Statement], scope: &Scope) {
    let mut exports = ScopeExports::default();
    let interfaces = group_interfaces(statements);
    let mut emitted_interfaces = FxHashSet::default();

    for statement in statements {
        exports.record(statement, scope.kind);
        match statement {
            Statement::ModuleDeclaration(module) => emit_module(writer, module, scope),
            Statement::ClassDeclaration(class) => emit_class(writer, class, scope),
            Statement::InterfaceDeclaration(interface) => {
                if emitted_interfaces.insert(interface.name.as_str()) {
                    if let Some(declarations) = interfaces.get(interface.name.as_str()) {
                        emit_interface(writer, declarations);
                    }
                }
            }
            Statement::EnumDeclaration(declaration) => emit_enum(writer, declaration, scope),
            Statement::VariableStatement(variables) => {
                for declaration in &variables.declarations {
                    if let Some(members) = declaration.object_literal_members() {
                        emit_object_variable(writer, &declaration.name, members, scope);
                    }
                }
            }
            // Collected into the scope object.
            Statement::TypeAliasDeclaration(_)
            | Statement::FunctionDeclaration(_)
            | Statement::ExportAssignment(_) => {}
            Statement::ImportDeclaration | Statement::ExportDeclaration => {
                trace!("import/export declaration skipped");
            }
            Statement::Unknown => debug!("unsupported statement skipped"),
        }
    }

    emit_scope_object(writer, &exports, scope);
}

/// Same-named interfaces of one scope, in order of first appearance.
fn group_interfaces(statements: &[Statement]) -> IndexMap<&str, Vec<&InterfaceDeclaration>> {
    let mut groups: IndexMap<&str, Vec<&InterfaceDeclaration>> = IndexMap::new();
    for statement in statements {
        if let Statement::InterfaceDeclaration(interface) = statement {
            groups
                .entry(interface.name.as_str())
                .or_default()
                .push(interface);
        }
    }
    groups
}

fn emit_module(writer: &mut CodeWriter, module: &ModuleDeclaration, parent: &Scope) {
    let Some(body) = &module.body else {
        debug!(module = %module.name, "shorthand module declaration skipped");
        return;
    };
    let scope = parent.module(&module.name);
    trace!(module = %scope.path.as_str(), "emit module");

    let package = scope
        .name
        .split('.')
        .map(package_clause_name)
        .collect::<Vec<_>>()
        .join(".");

    writer.blank_line();
    writer.at_root(|w| {
        w.block(&format!("package {}", package), |w| {
            emit_scope(w, body, &scope);
            w.blank_line();
        });
    });
}

fn emit_class(writer: &mut CodeWriter, class: &ClassDeclaration, scope: &Scope) {
    let raw_name = class.name.as_deref().unwrap_or(ANONYMOUS_CLASS);
    let name = escape_identifier(raw_name);
    let owner = MemberOwner::for_class(class);
    trace!(class = raw_name, "emit class");

    let header = format!(
        "{}class {}{} extends js.Object",
        if owner == MemberOwner::AbstractClass { "abstract " } else { "" },
        name,
        render_type_parameters(&class.type_parameters)
    );

    writer.blank_line();
    writer.at_root(|w| {
        w.write_line("@js.native");
        w.write_line(&scope.global_annotation(raw_name));
        w.block(&header, |w| {
            for member in &class.members {
                if let Some(rendered) = render_member(member, owner) {
                    for line in rendered.lines() {
                        w.write_line(line);
                    }
                }
            }
        });
    });
}

/// Emit the merged body of every declaration of one interface. Method
/// signatures already written are skipped; other members never are.
fn emit_interface(writer: &mut CodeWriter, declarations: &[&InterfaceDeclaration]) {
    let Some(first) = declarations.first() else {
        return;
    };
    trace!(interface = %first.name, declarations = declarations.len(), "emit interface");

    let header = format!(
        "trait {}{} extends js.Object",
        escape_identifier(&first.name),
        render_type_parameters(&first.type_parameters)
    );

    writer.blank_line();
    writer.at_root(|w| {
        w.write_line("@js.native");
        w.block(&header, |w| {
            let mut signatures = FxHashSet::default();
            let members = declarations.iter().flat_map(|d| d.members.iter());
            for member in members {
                match render_member(member, MemberOwner::Interface) {
                    Some(RenderedMember::Method(signature)) => {
                        if signatures.insert(signature.clone()) {
                            w.write_line(&signature);
                        }
                    }
                    Some(rendered) => {
                        for line in rendered.lines() {
                            w.write_line(line);
                        }
                    }
                    None => {}
                }
            }
        });
    });
}

fn emit_enum(writer: &mut CodeWriter, declaration: &EnumDeclaration, scope: &Scope) {
    let name = escape_identifier(&declaration.name);
    trace!(enumeration = %declaration.name, "emit enum");

    writer.blank_line();
    writer.at_root(|w| {
        w.write_line("@js.native");
        w.block(&format!("sealed trait {} extends js.Object", name), |_| {});
        w.blank_line();
        w.write_line("@js.native");
        w.write_line(&format!(
            "@JSGlobal(\"{}\")",
            scope.path.qualify(&declaration.name)
        ));
        w.block(&format!("object {} extends js.Object", name), |w| {
            for member in &declaration.members {
                w.write_line(&format!(
                    "var {}: {} = js.native",
                    escape_identifier(unquote(&member.name)),
                    name
                ));
            }
            w.write_line("@JSBracketAccess");
            w.write_line(&format!("def apply(value: {}): String = js.native", name));
        });
    });
}

/// A variable annotated with an inline object type becomes a native object.
fn emit_object_variable(writer: &mut CodeWriter, name: &str, members: &[Member], scope: &Scope) {
    trace!(variable = name, "emit object variable");
    writer.blank_line();
    writer.at_root(|w| {
        w.write_line("@js.native");
        w.write_line(&scope.global_annotation(name));
        w.block(&format!("object {} extends js.Object", escape_identifier(name)), |w| {
            for member in members {
                if let Member::Property(property) = member {
                    w.write_line(&format!(
                        "var {}: {} = js.native",
                        escape_identifier(unquote(&property.name)),
                        translate_or(property.type_annotation.as_ref(), ANY)
                    ));
                }
            }
        });
    });
}
