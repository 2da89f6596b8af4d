//! Types for the result of the standard introspection query.
//!
//! [Reference](https://spec.graphql.org/October2021/#sec-Introspection)

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// The `data` of a response to the standard introspection query.
///
/// Names are borrowed from the deserialized source, and [`BuildClientSchema`] copies them into an
/// [`ASTContext`](crate::ast::ASTContext) when it converts the introspection into a schema.
///
/// [`BuildClientSchema`]: super::BuildClientSchema
#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionQuery<'a> {
    #[cfg_attr(feature = "json", serde(rename = "__schema", borrow))]
    pub schema: IntrospectionSchema<'a>,
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct IntrospectionSchema<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub query_type: Option<IntrospectionNamedTypeRef<'a>>,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub mutation_type: Option<IntrospectionNamedTypeRef<'a>>,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub types: Vec<IntrospectionType<'a>>,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub directives: Vec<IntrospectionDirective<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionNamedTypeRef<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
}

/// A named type of any kind, discriminated by its `kind` field.
#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "json",
    serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum IntrospectionType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    Scalar(IntrospectionScalarType<'a>),
    #[cfg_attr(feature = "json", serde(borrow))]
    Object(IntrospectionObjectType<'a>),
    #[cfg_attr(feature = "json", serde(borrow))]
    Interface(IntrospectionInterfaceType<'a>),
    #[cfg_attr(feature = "json", serde(borrow))]
    Union(IntrospectionUnionType<'a>),
    #[cfg_attr(feature = "json", serde(borrow))]
    Enum(IntrospectionEnumType<'a>),
    #[cfg_attr(feature = "json", serde(borrow))]
    InputObject(IntrospectionInputObjectType<'a>),
}

impl<'a> IntrospectionType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            IntrospectionType::Scalar(x) => x.name,
            IntrospectionType::Object(x) => x.name,
            IntrospectionType::Interface(x) => x.name,
            IntrospectionType::Union(x) => x.name,
            IntrospectionType::Enum(x) => x.name,
            IntrospectionType::InputObject(x) => x.name,
        }
    }
}

/// A possibly wrapped reference to a named type, as it's returned for fields and arguments.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum IntrospectionTypeRef<'a> {
    List {
        #[cfg_attr(feature = "json", serde(rename = "ofType", borrow))]
        of_type: Box<IntrospectionTypeRef<'a>>,
    },
    NonNull {
        #[cfg_attr(feature = "json", serde(rename = "ofType", borrow))]
        of_type: Box<IntrospectionTypeRef<'a>>,
    },
    #[cfg_attr(
        feature = "json",
        serde(
            alias = "OBJECT",
            alias = "INTERFACE",
            alias = "UNION",
            alias = "ENUM",
            alias = "INPUT_OBJECT"
        )
    )]
    Scalar {
        #[cfg_attr(feature = "json", serde(borrow))]
        name: &'a str,
    },
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionScalarType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionObjectType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub fields: Vec<IntrospectionField<'a>>,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub interfaces: Vec<IntrospectionNamedTypeRef<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct IntrospectionInterfaceType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub fields: Vec<IntrospectionField<'a>>,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub interfaces: Vec<IntrospectionNamedTypeRef<'a>>,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub possible_types: Vec<IntrospectionNamedTypeRef<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct IntrospectionUnionType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub possible_types: Vec<IntrospectionNamedTypeRef<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct IntrospectionEnumType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub enum_values: Vec<IntrospectionEnumValue<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct IntrospectionInputObjectType<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(borrow))]
    pub input_fields: Vec<IntrospectionInputValue<'a>>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionField<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub args: Vec<IntrospectionInputValue<'a>>,
    #[cfg_attr(feature = "json", serde(rename = "type", borrow))]
    pub of_type: IntrospectionTypeRef<'a>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionInputValue<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(rename = "type", borrow))]
    pub of_type: IntrospectionTypeRef<'a>,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionEnumValue<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
}

#[derive(Debug)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct IntrospectionDirective<'a> {
    #[cfg_attr(feature = "json", serde(borrow))]
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(default, borrow))]
    pub args: Vec<IntrospectionInputValue<'a>>,
}
