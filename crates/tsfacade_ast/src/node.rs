//! Declaration tree node definitions.
//!
//! Node and field names follow TypeScript's AST (`ClassDeclaration`,
//! `typeArguments`, ...) so that a front end can serialise the compiler's
//! own nodes with little reshaping. Every enum is internally tagged by a
//! `"kind"` field.

use crate::types::*;
use serde::Deserialize;

// ============================================================================
// Source File
// ============================================================================

/// One parsed declaration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self {
            file_name: file_name.into(),
            statements,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A top-level or namespace-level statement.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    ModuleDeclaration(ModuleDeclaration),
    ClassDeclaration(ClassDeclaration),
    InterfaceDeclaration(InterfaceDeclaration),
    EnumDeclaration(EnumDeclaration),
    TypeAliasDeclaration(TypeAliasDeclaration),
    VariableStatement(VariableStatement),
    FunctionDeclaration(FunctionDeclaration),
    ExportAssignment(ExportAssignment),
    ImportDeclaration,
    ExportDeclaration,
    #[serde(other)]
    Unknown,
}

/// `declare module foo { ... }` / `namespace foo { ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDeclaration {
    pub name: String,
    /// `None` for shorthand ambient modules (`declare module "foo";`).
    #[serde(default)]
    pub body: Option<Vec<Statement>>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    /// Absent for `export default class { ... }`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDeclaration {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnumMember {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDeclaration {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(rename = "type")]
    pub type_node: TypeNode,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

/// `declare var a: A, b: B;`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableStatement {
    #[serde(default)]
    pub declarations: Vec<VariableDeclaration>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_annotation: Option<TypeNode>,
}

impl VariableDeclaration {
    /// The members of an inline object-type annotation, if that is what
    /// the variable is annotated with.
    pub fn object_literal_members(&self) -> Option<&[Member]> {
        match &self.type_annotation {
            Some(TypeNode::TypeLiteral(literal)) => Some(&literal.members),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "type")]
    pub return_type: Option<TypeNode>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

/// `export = foo;` or `export default foo;`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAssignment {
    /// The exported identifier; `None` when the expression is not a bare
    /// identifier.
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub is_export_equals: bool,
}

// ============================================================================
// Members, parameters, type parameters
// ============================================================================

/// A class member, interface member, or object-type literal member.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum Member {
    #[serde(rename = "PropertyDeclaration", alias = "PropertySignature")]
    Property(PropertyMember),
    #[serde(rename = "MethodDeclaration", alias = "MethodSignature")]
    Method(MethodMember),
    IndexSignature(IndexSignature),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMember {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_annotation: Option<TypeNode>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodMember {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "type")]
    pub return_type: Option<TypeNode>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

/// `[key: string]: T`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSignature {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "type")]
    pub type_annotation: Option<TypeNode>,
    #[serde(default, deserialize_with = "deserialize_modifiers")]
    pub modifiers: ModifierFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_annotation: Option<TypeNode>,
    /// `name?: T`
    #[serde(default)]
    pub optional: bool,
    /// `...name: T[]`
    #[serde(default)]
    pub rest: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: TypeNode) -> Self {
        Self {
            name: name.into(),
            type_annotation: Some(type_annotation),
            optional: false,
            rest: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub constraint: Option<TypeNode>,
    #[serde(default)]
    pub default: Option<TypeNode>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }
}

// ============================================================================
// Type nodes
// ============================================================================

/// A type expression.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeNode {
    KeywordType(KeywordTypeNode),
    TypeReference(TypeReferenceNode),
    LiteralType(LiteralTypeNode),
    ArrayType(ArrayTypeNode),
    UnionType(UnionTypeNode),
    IntersectionType(IntersectionTypeNode),
    FunctionType(FunctionTypeNode),
    TypeOperator(TypeOperatorNode),
    ParenthesizedType(ParenthesizedTypeNode),
    TypeLiteral(TypeLiteralNode),
    /// Tuples, conditional, mapped, indexed-access and every other shape.
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordTypeNode {
    pub keyword: Keyword,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReferenceNode {
    /// Possibly qualified (`ns.Foo`).
    pub type_name: String,
    #[serde(default)]
    pub type_arguments: Vec<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiteralTypeNode {
    pub literal: LiteralKind,
    /// The literal's source text (`"a"`, `1.5`, `true`).
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeNode {
    pub element_type: Box<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnionTypeNode {
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntersectionTypeNode {
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeNode {
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "type")]
    pub return_type: Option<Box<TypeNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeOperatorNode {
    pub operator: TypeOperatorKind,
    #[serde(rename = "type")]
    pub type_node: Box<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParenthesizedTypeNode {
    #[serde(rename = "type")]
    pub type_node: Box<TypeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeLiteralNode {
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeNode {
    pub fn keyword(keyword: Keyword) -> Self {
        TypeNode::KeywordType(KeywordTypeNode { keyword })
    }

    pub fn reference(name: impl Into<String>, type_arguments: Vec<TypeNode>) -> Self {
        TypeNode::TypeReference(TypeReferenceNode {
            type_name: name.into(),
            type_arguments,
        })
    }

    pub fn literal(literal: LiteralKind, text: impl Into<String>) -> Self {
        TypeNode::LiteralType(LiteralTypeNode {
            literal,
            text: text.into(),
        })
    }

    pub fn string_literal(value: &str) -> Self {
        Self::literal(LiteralKind::String, format!("\"{}\"", value))
    }

    pub fn number_literal(text: &str) -> Self {
        Self::literal(LiteralKind::Number, text)
    }

    pub fn array(element_type: TypeNode) -> Self {
        TypeNode::ArrayType(ArrayTypeNode {
            element_type: Box::new(element_type),
        })
    }

    pub fn union(types: Vec<TypeNode>) -> Self {
        TypeNode::UnionType(UnionTypeNode { types })
    }

    pub fn intersection(types: Vec<TypeNode>) -> Self {
        TypeNode::IntersectionType(IntersectionTypeNode { types })
    }

    pub fn function(parameters: Vec<Parameter>, return_type: TypeNode) -> Self {
        TypeNode::FunctionType(FunctionTypeNode {
            type_parameters: Vec::new(),
            parameters,
            return_type: Some(Box::new(return_type)),
        })
    }

    pub fn operator(operator: TypeOperatorKind, type_node: TypeNode) -> Self {
        TypeNode::TypeOperator(TypeOperatorNode {
            operator,
            type_node: Box::new(type_node),
        })
    }

    pub fn parenthesized(type_node: TypeNode) -> Self {
        TypeNode::ParenthesizedType(ParenthesizedTypeNode {
            type_node: Box::new(type_node),
        })
    }

    pub fn type_literal(members: Vec<Member>) -> Self {
        TypeNode::TypeLiteral(TypeLiteralNode { members })
    }

    /// Strip any number of enclosing parentheses.
    pub fn unparenthesized(&self) -> &TypeNode {
        let mut node = self;
        while let TypeNode::ParenthesizedType(inner) = node {
            node = &inner.type_node;
        }
        node
    }

    /// The literal node behind optional parentheses.
    pub fn as_literal(&self) -> Option<&LiteralTypeNode> {
        match self.unparenthesized() {
            TypeNode::LiteralType(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(self.as_literal(), Some(l) if l.literal == LiteralKind::String)
    }
}

impl Member {
    pub fn property(name: impl Into<String>, type_annotation: TypeNode) -> Self {
        Member::Property(PropertyMember {
            name: name.into(),
            type_annotation: Some(type_annotation),
            ..Default::default()
        })
    }

    pub fn method(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: Option<TypeNode>,
    ) -> Self {
        Member::Method(MethodMember {
            name: name.into(),
            parameters,
            return_type,
            ..Default::default()
        })
    }
}
