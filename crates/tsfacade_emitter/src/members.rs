//! Class and interface member rendering.

use crate::types::{render_type_parameters, translate, translate_or, ANY, UNIT};
use tracing::debug;
use tsfacade_ast::*;
use tsfacade_core::{escape_identifier, unquote};

/// What kind of declaration a member belongs to. Decides which lines carry
/// the `= js.native` stub and what a missing return type defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOwner {
    ConcreteClass,
    AbstractClass,
    Interface,
}

impl MemberOwner {
    pub fn for_class(class: &ClassDeclaration) -> Self {
        if class.modifiers.contains(ModifierFlags::ABSTRACT) {
            MemberOwner::AbstractClass
        } else {
            MemberOwner::ConcreteClass
        }
    }

    fn native_properties(self) -> bool {
        self != MemberOwner::AbstractClass
    }

    fn native_methods(self) -> bool {
        self == MemberOwner::ConcreteClass
    }

    fn default_return_type(self) -> &'static str {
        match self {
            MemberOwner::Interface => ANY,
            MemberOwner::ConcreteClass | MemberOwner::AbstractClass => UNIT,
        }
    }
}

/// The output of one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedMember {
    Property(String),
    /// A method signature; interface bodies dedupe these by text.
    Method(String),
    /// Annotated `apply`/`update` accessors of an index signature.
    IndexAccessors(Vec<String>),
}

impl RenderedMember {
    pub fn lines(&self) -> &[String] {
        match self {
            RenderedMember::Property(line) | RenderedMember::Method(line) => std::slice::from_ref(line),
            RenderedMember::IndexAccessors(lines) => lines,
        }
    }
}

/// Render one member, or `None` for members without a facade counterpart
/// (constructors, call signatures, accessors).
pub fn render_member(member: &Member, owner: MemberOwner) -> Option<RenderedMember> {
    match member {
        Member::Property(p) => Some(RenderedMember::Property(render_property(p, owner))),
        Member::Method(m) => Some(RenderedMember::Method(render_method(m, owner))),
        Member::IndexSignature(s) => Some(RenderedMember::IndexAccessors(render_index_signature(
            s, owner,
        ))),
        Member::Other => {
            debug!("member without facade counterpart skipped");
            None
        }
    }
}

pub fn render_property(property: &PropertyMember, owner: MemberOwner) -> String {
    let mut line = format!(
        "var {}: {}",
        member_name(&property.name),
        translate_or(property.type_annotation.as_ref(), ANY)
    );
    if owner.native_properties() {
        line.push_str(" = js.native");
    }
    line
}

pub fn render_method(method: &MethodMember, owner: MemberOwner) -> String {
    let mut line = format!(
        "def {}{}({}): {}",
        member_name(&method.name),
        render_type_parameters(&method.type_parameters),
        render_parameters(&method.parameters),
        translate_or(method.return_type.as_ref(), owner.default_return_type())
    );
    if owner.native_methods() {
        line.push_str(" = js.native");
    }
    line
}

pub fn render_index_signature(signature: &IndexSignature, owner: MemberOwner) -> Vec<String> {
    let (key_name, key_type) = match signature.parameters.first() {
        Some(key) => (
            escape_identifier(&key.name).into_owned(),
            translate_or(key.type_annotation.as_ref(), ANY),
        ),
        None => ("key".to_string(), ANY.to_string()),
    };
    let value_type = translate_or(signature.type_annotation.as_ref(), ANY);
    let stub = if owner.native_methods() { " = js.native" } else { "" };

    let mut lines = vec![
        "@JSBracketAccess".to_string(),
        format!("def apply({}: {}): {}{}", key_name, key_type, value_type, stub),
    ];
    if !signature.modifiers.contains(ModifierFlags::READONLY) {
        lines.push("@JSBracketAccess".to_string());
        lines.push(format!(
            "def update({}: {}, v: {}): Unit{}",
            key_name, key_type, value_type, stub
        ));
    }
    lines
}

/// Render a parameter list without the enclosing parentheses.
pub fn render_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_parameter(parameter: &Parameter) -> String {
    let name = escape_identifier(&parameter.name);
    if parameter.rest {
        let element = match parameter.type_annotation.as_ref().map(TypeNode::unparenthesized) {
            Some(TypeNode::ArrayType(array)) => translate(&array.element_type),
            Some(TypeNode::TypeReference(r))
                if matches!(r.type_name.as_str(), "Array" | "ReadonlyArray")
                    && r.type_arguments.len() == 1 =>
            {
                translate(&r.type_arguments[0])
            }
            Some(other) => translate(other),
            None => ANY.to_string(),
        };
        return format!("{}: {}*", name, element);
    }
    let ty = translate_or(parameter.type_annotation.as_ref(), ANY);
    if parameter.optional {
        format!("{}: {} = ???", name, ty)
    } else {
        format!("{}: {}", name, ty)
    }
}

/// Render a function declaration as a native method of a scope object.
pub fn render_function(function: &FunctionDeclaration) -> Option<String> {
    let name = function.name.as_deref()?;
    Some(format!(
        "def {}{}({}): {} = js.native",
        escape_identifier(name),
        render_type_parameters(&function.type_parameters),
        render_parameters(&function.parameters),
        translate_or(function.return_type.as_ref(), UNIT)
    ))
}

/// Property and method names may be written as string literals.
fn member_name(name: &str) -> String {
    escape_identifier(unquote(name)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> TypeNode {
        TypeNode::keyword(Keyword::String)
    }

    fn number() -> TypeNode {
        TypeNode::keyword(Keyword::Number)
    }

    #[test]
    fn test_property_stub_depends_on_owner() {
        let prop = PropertyMember {
            name: "size".to_string(),
            type_annotation: Some(number()),
            ..Default::default()
        };
        assert_eq!(
            render_property(&prop, MemberOwner::ConcreteClass),
            "var size: Double = js.native"
        );
        assert_eq!(
            render_property(&prop, MemberOwner::Interface),
            "var size: Double = js.native"
        );
        assert_eq!(render_property(&prop, MemberOwner::AbstractClass), "var size: Double");
    }

    #[test]
    fn test_untyped_property_and_quoted_name() {
        let prop = PropertyMember {
            name: "\"data-id\"".to_string(),
            ..Default::default()
        };
        assert_eq!(
            render_property(&prop, MemberOwner::Interface),
            "var `data-id`: js.Any = js.native"
        );
    }

    #[test]
    fn test_method_defaults() {
        let method = MethodMember {
            name: "type".to_string(),
            ..Default::default()
        };
        assert_eq!(
            render_method(&method, MemberOwner::ConcreteClass),
            "def `type`(): Unit = js.native"
        );
        assert_eq!(render_method(&method, MemberOwner::AbstractClass), "def `type`(): Unit");
        assert_eq!(render_method(&method, MemberOwner::Interface), "def `type`(): js.Any");
    }

    #[test]
    fn test_method_with_type_parameters() {
        let mut bound = TypeParameter::new("T");
        bound.constraint = Some(TypeNode::reference("Node", vec![]));
        let method = MethodMember {
            name: "find".to_string(),
            type_parameters: vec![bound],
            parameters: vec![Parameter::new("selector", string())],
            return_type: Some(TypeNode::reference("T", vec![])),
            ..Default::default()
        };
        assert_eq!(
            render_method(&method, MemberOwner::ConcreteClass),
            "def find[T <: Node](selector: String): T = js.native"
        );
    }

    #[test]
    fn test_rest_and_optional_parameters() {
        let mut rest = Parameter::new("items", TypeNode::array(number()));
        rest.rest = true;
        let mut generic_rest =
            Parameter::new("args", TypeNode::reference("ReadonlyArray", vec![string()]));
        generic_rest.rest = true;
        let mut optional = Parameter::new("val", TypeNode::keyword(Keyword::Boolean));
        optional.optional = true;

        assert_eq!(render_parameters(&[rest]), "items: Double*");
        assert_eq!(render_parameters(&[generic_rest]), "args: String*");
        assert_eq!(render_parameters(&[optional]), "`val`: Boolean = ???");
    }

    #[test]
    fn test_index_signature() {
        let signature = IndexSignature {
            parameters: vec![Parameter::new("key", string())],
            type_annotation: Some(number()),
            modifiers: ModifierFlags::NONE,
        };
        assert_eq!(
            render_index_signature(&signature, MemberOwner::ConcreteClass),
            vec![
                "@JSBracketAccess",
                "def apply(key: String): Double = js.native",
                "@JSBracketAccess",
                "def update(key: String, v: Double): Unit = js.native",
            ]
        );
    }

    #[test]
    fn test_readonly_index_signature_in_interface() {
        let signature = IndexSignature {
            parameters: vec![Parameter::new("index", number())],
            type_annotation: Some(string()),
            modifiers: ModifierFlags::READONLY,
        };
        assert_eq!(
            render_index_signature(&signature, MemberOwner::Interface),
            vec!["@JSBracketAccess", "def apply(index: Double): String"]
        );
    }

    #[test]
    fn test_other_members_render_nothing() {
        assert_eq!(render_member(&Member::Other, MemberOwner::ConcreteClass), None);
    }

    #[test]
    fn test_render_function() {
        let function = FunctionDeclaration {
            name: Some("debounce".to_string()),
            parameters: vec![Parameter::new("wait", number())],
            ..Default::default()
        };
        assert_eq!(
            render_function(&function).as_deref(),
            Some("def debounce(wait: Double): Unit = js.native")
        );
        assert_eq!(render_function(&FunctionDeclaration::default()), None);
    }
}
