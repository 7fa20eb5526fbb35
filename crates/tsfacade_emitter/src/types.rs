//! Type expression translation.
//!
//! [`translate`] maps one TypeScript type node onto the Scala.js type that
//! stands in for it. Shapes without a faithful counterpart erase to
//! `js.Any`; the translation never fails.

use tracing::debug;
use tsfacade_ast::*;
use tsfacade_core::{escape_identifier, OrderedSet};

pub const ANY: &str = "js.Any";
pub const UNIT: &str = "Unit";
pub const STRING: &str = "String";
const NULL: &str = "Null";

/// Global names whose Scala.js counterpart differs from the TypeScript name.
static REMAPPED_NAMES: &[(&str, &str)] = &[
    ("null", "Null"),
    ("undefined", "Unit"),
    ("Float32Array", "js.typedarray.Float32Array"),
    ("Float64Array", "js.typedarray.Float64Array"),
    ("Uint8Array", "js.typedarray.Uint8Array"),
    ("Uint16Array", "js.typedarray.Uint16Array"),
    ("Uint32Array", "js.typedarray.Uint32Array"),
    ("Int8Array", "js.typedarray.Int8Array"),
    ("Int16Array", "js.typedarray.Int16Array"),
    ("Int32Array", "js.typedarray.Int32Array"),
    ("Uint8ClampedArray", "js.typedarray.Uint8ClampedArray"),
    ("ArrayBuffer", "js.typedarray.ArrayBuffer"),
    ("ArrayBufferView", "js.typedarray.ArrayBufferView"),
    ("DataView", "js.typedarray.DataView"),
    ("PromiseLike", "js.Thenable"),
];

/// Look up the Scala.js name of a global TypeScript type.
pub fn remapped_name(name: &str) -> Option<&'static str> {
    REMAPPED_NAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

/// Translate a type node.
pub fn translate(node: &TypeNode) -> String {
    match node {
        TypeNode::KeywordType(k) => translate_keyword(k.keyword).to_string(),
        TypeNode::TypeReference(r) => translate_reference(r),
        TypeNode::LiteralType(l) => translate_literal(l).to_string(),
        TypeNode::ArrayType(a) => format!("js.Array[{}]", translate(&a.element_type)),
        TypeNode::UnionType(u) => translate_union(&u.types),
        TypeNode::IntersectionType(i) => translate_intersection(&i.types),
        TypeNode::FunctionType(f) => translate_function(f),
        TypeNode::TypeOperator(op) => match op.operator {
            TypeOperatorKind::Keyof => STRING.to_string(),
            other => {
                debug!(operator = ?other, "type operator erased to js.Any");
                ANY.to_string()
            }
        },
        TypeNode::ParenthesizedType(p) => translate(&p.type_node),
        TypeNode::TypeLiteral(_) => ANY.to_string(),
        TypeNode::Other => {
            debug!("unsupported type shape erased to js.Any");
            ANY.to_string()
        }
    }
}

/// Translate an optional annotation, defaulting to `fallback`.
pub fn translate_or(node: Option<&TypeNode>, fallback: &str) -> String {
    node.map_or_else(|| fallback.to_string(), translate)
}

fn translate_keyword(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::String => STRING,
        Keyword::Number => "Double",
        Keyword::Boolean => "Boolean",
        Keyword::Void | Keyword::Undefined => UNIT,
        Keyword::Any => ANY,
        Keyword::Object => "js.Object",
        Keyword::Never => "Nothing",
        Keyword::This => "this.type",
        Keyword::Null => NULL,
        Keyword::Unknown | Keyword::Symbol | Keyword::Bigint | Keyword::Other => ANY,
    }
}

fn translate_reference(node: &TypeReferenceNode) -> String {
    let arguments: Vec<String> = node.type_arguments.iter().map(translate).collect();
    match node.type_name.as_str() {
        "Array" => match arguments.first() {
            Some(element) => format!("js.Array[{}]", element),
            None => format!("js.Array[{}]", ANY),
        },
        "ReadonlyArray" => match arguments.first() {
            Some(element) => format!("js.Array[_ <: {}]", element),
            None => format!("js.Array[{}]", ANY),
        },
        name => {
            let base = match remapped_name(name) {
                Some(mapped) => mapped.to_string(),
                None => name
                    .split('.')
                    .map(escape_identifier)
                    .collect::<Vec<_>>()
                    .join("."),
            };
            if arguments.is_empty() {
                base
            } else {
                format!("{}[{}]", base, arguments.join(", "))
            }
        }
    }
}

fn translate_literal(node: &LiteralTypeNode) -> &'static str {
    match node.literal {
        LiteralKind::String => STRING,
        LiteralKind::Boolean => "Boolean",
        LiteralKind::Number => numeric_literal_type(&node.text),
        LiteralKind::Other => ANY,
    }
}

fn numeric_literal_type(text: &str) -> &'static str {
    if text.contains('.') {
        "Double"
    } else {
        "Int"
    }
}

fn translate_union(types: &[TypeNode]) -> String {
    if types.is_empty() {
        return ANY.to_string();
    }
    let literals: Vec<Option<&LiteralTypeNode>> = types.iter().map(TypeNode::as_literal).collect();

    let string_literals = literals
        .iter()
        .filter(|l| matches!(l, Some(l) if l.literal == LiteralKind::String))
        .count();
    if string_literals == types.len() {
        return STRING.to_string();
    }

    if literals
        .iter()
        .all(|l| matches!(l, Some(l) if l.literal == LiteralKind::Number))
    {
        let fractional = literals
            .iter()
            .flatten()
            .filter(|l| l.text.contains('.'))
            .count();
        if fractional == 0 {
            return "Int".to_string();
        }
        if fractional == types.len() {
            return "Double".to_string();
        }
    }

    let members: OrderedSet<String> = types.iter().map(translate).collect();
    if members.contains(&NULL.to_string()) && members.contains(&UNIT.to_string()) {
        let mut rest: OrderedSet<String> = members
            .into_iter()
            .filter(|m| m != NULL && m != UNIT)
            .collect();
        rest.insert(ANY.to_string());
        return rest.join(" | ");
    }

    // String literals mixed with other members collapse into one leading
    // `String`.
    if string_literals > 0 {
        let mut collapsed = OrderedSet::new();
        collapsed.insert(STRING.to_string());
        collapsed.extend(
            types
                .iter()
                .filter(|t| !t.is_string_literal())
                .map(translate),
        );
        return collapsed.join(" | ");
    }
    members.join(" | ")
}

fn translate_intersection(types: &[TypeNode]) -> String {
    if types.is_empty() {
        return ANY.to_string();
    }
    let members: OrderedSet<String> = types.iter().map(translate).collect();
    members.join(" with ")
}

fn translate_function(node: &FunctionTypeNode) -> String {
    let result = translate_or(node.return_type.as_deref(), UNIT);
    let parameters: Vec<String> = node
        .parameters
        .iter()
        .map(|p| translate_or(p.type_annotation.as_ref(), ANY))
        .collect();
    match parameters.as_slice() {
        [] => format!("js.Function0[{}]", result),
        [a] => format!("js.Function1[{}, {}]", a, result),
        [a, b] => format!("js.Function2[{}, {}, {}]", a, b, result),
        _ => "js.Function".to_string(),
    }
}

/// Render a type parameter list: `[T, U <: Bound]`, or nothing when empty.
pub fn render_type_parameters(type_parameters: &[TypeParameter]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = type_parameters
        .iter()
        .map(|tp| {
            let name = escape_identifier(&tp.name);
            match &tp.constraint {
                Some(bound) => format!("{} <: {}", name, translate(bound)),
                None => name.into_owned(),
            }
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}
