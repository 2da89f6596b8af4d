use crate::ast::{ASTContext, OperationKind};
use bumpalo::collections::Vec;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::{HashMap, HashSet};
use std::fmt;

/// Names of the scalar types that every schema knows about.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars)
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// The capability that validation needs from a schema: looking up named types, directives, and
/// the root type of each kind of operation.
///
/// Fields of object and interface types are enumerated via the [`SchemaFields`] trait on the
/// returned types. [Schema] is the crate's own implementation, but validation only ever depends on
/// this trait.
pub trait SchemaLookup<'a> {
    /// Retrieves a type by name.
    fn get_type(&self, name: &str) -> Option<SchemaType<'a>>;

    /// Retrieves a directive definition by name.
    fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>>;

    /// Returns the object type that the selection set of a given operation kind starts on.
    fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>>;
}

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and is then used against
/// AST documents for validation. In this library the schema is never executable and
/// serves only for metadata and type information. It is hence a "Client Schema".
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a str>,
    pub(crate) mutation_type: Option<&'a str>,
    pub(crate) types: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub(crate) directives:
        HashMap<&'a str, &'a SchemaDirective<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> Schema<'a> {
    /// Creates a schema that only knows the built-in scalars and the `@include` and `@skip`
    /// directives.
    pub fn new(ctx: &'a ASTContext) -> Self {
        let mut schema = Schema {
            query_type: None,
            mutation_type: None,
            types: HashMap::new_in(&ctx.arena),
            directives: HashMap::new_in(&ctx.arena),
        };
        for name in BUILTIN_SCALARS {
            schema.add_type(SchemaType::Scalar(ctx.alloc(SchemaScalar::new(name))));
        }
        for name in ["include", "skip"] {
            let mut directive = SchemaDirective::new(ctx, name);
            directive.add_argument(SchemaInputField::new(
                "if",
                TypeRef::NonNullType(ctx.alloc(TypeRef::Type("Boolean"))),
            ));
            schema.add_directive(ctx.alloc(directive));
        }
        schema
    }

    /// Adds a named type, replacing any previous type of the same name.
    pub fn add_type(&mut self, schema_type: SchemaType<'a>) {
        self.types.insert(schema_type.name(), schema_type);
    }

    /// Adds a directive definition, replacing any previous directive of the same name.
    pub fn add_directive(&mut self, directive: &'a SchemaDirective<'a>) {
        self.directives.insert(directive.name, directive);
    }

    /// Sets the name of the object type that operations of the given kind start on.
    pub fn set_root_type(&mut self, operation_kind: OperationKind, name: &'a str) {
        match operation_kind {
            OperationKind::Query => self.query_type = Some(name),
            OperationKind::Mutation => self.mutation_type = Some(name),
        }
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.get_root_type(OperationKind::Query)
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.get_root_type(OperationKind::Mutation)
    }

    /// Returns an iterator over all known types.
    pub fn types(&self) -> impl Iterator<Item = SchemaType<'a>> + '_ {
        self.types.values().copied()
    }
}

impl<'a> SchemaLookup<'a> for Schema<'a> {
    #[inline]
    fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.types.get(name).copied()
    }

    #[inline]
    fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives.get(name).copied()
    }

    fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        let name = match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
        }?;
        self.get_type(name).and_then(|schema_type| schema_type.object())
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>);

    /// Get a map of all fields keyed by name
    fn get_fields(
        &self,
    ) -> &HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

    /// Get a known field by name
    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.get_fields().get(name).copied()
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Add the name of a [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, interface: &'a str);

    /// Get the names of all implemented [SchemaInterface]s
    fn get_interfaces(&self) -> &[&'a str];

    /// Checks whether this type implements an interface of the given name
    #[inline]
    fn implements_interface(&self, name: &str) -> bool {
        self.get_interfaces().iter().any(|&interface| interface == name)
    }
}

/// Generic trait for any abstract schema type that may be resolved to one of several objects
pub trait SchemaPossibleTypes<'a>: Sized {
    /// Add the name of a [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, object: &'a str);

    /// Get the names of all possible [SchemaObject] types
    fn get_possible_types(&self) -> &[&'a str];

    /// Checks whether an object of the given name is a possible type
    #[inline]
    fn is_possible_type(&self, name: &str) -> bool {
        self.get_possible_types()
            .iter()
            .any(|&possible_type| possible_type == name)
    }
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaObject {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(
        &self,
    ) -> &HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface. A field that returns an interface as its return type may return
/// any object that implements this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub(crate) possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInterface {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_fields(
        &self,
    ) -> &HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaInterface<'a> {
    fn add_possible_type(&mut self, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &[&'a str] {
        &self.possible_types
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub output_type: TypeRef<'a>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, output_type: TypeRef<'a>) -> Self {
        SchemaField {
            name,
            arguments: HashMap::new_in(&ctx.arena),
            output_type,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when its defined as
/// an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaUnion {
            name,
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaUnion<'a> {
    fn add_possible_type(&mut self, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &[&'a str] {
        &self.possible_types
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar { name }
    }
}

/// An Enum type definition, a leaf type that's restricted to a set of named values.
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub values: HashSet<&'a str, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaEnum {
            name,
            values: HashSet::new_in(&ctx.arena),
        }
    }

    pub fn add_value(&mut self, value: &'a str) {
        self.values.insert(value);
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub fields: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInputObject {
            name,
            fields: HashMap::new_in(&ctx.arena),
        }
    }

    pub fn add_field(&mut self, field: SchemaInputField<'a>) {
        self.fields.insert(field.name, field);
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.fields.get(name)
    }
}

/// An argument or input object field definition.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: TypeRef<'a>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: TypeRef<'a>) -> Self {
        SchemaInputField { name, input_type }
    }
}

/// A Directive definition, which lists the arguments a directive accepts.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDirective<'a> {
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> SchemaDirective<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaDirective {
            name,
            arguments: HashMap::new_in(&ctx.arena),
        }
    }

    pub fn add_argument(&mut self, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the type as an [`InputType`] if it may be used for arguments and variables.
    pub fn input_type(&self) -> Option<InputType<'a>> {
        match self {
            SchemaType::Scalar(x) => Some(InputType::Scalar(x)),
            SchemaType::Enum(x) => Some(InputType::Enum(x)),
            SchemaType::InputObject(x) => Some(InputType::InputObject(x)),
            _ => None,
        }
    }

    /// Returns the type as an [`OutputType`] if fields may return it.
    pub fn output_type(&self) -> Option<OutputType<'a>> {
        match self {
            SchemaType::Object(x) => Some(OutputType::Object(x)),
            SchemaType::Union(x) => Some(OutputType::Union(x)),
            SchemaType::Interface(x) => Some(OutputType::Interface(x)),
            SchemaType::Scalar(x) => Some(OutputType::Scalar(x)),
            SchemaType::Enum(x) => Some(OutputType::Enum(x)),
            _ => None,
        }
    }

    /// Checks whether selection sets may be placed on this type.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            SchemaType::Object(_) | SchemaType::Interface(_) | SchemaType::Union(_)
        )
    }

    /// Looks up a field on an object or interface type. Other types don't have fields.
    pub fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        match self {
            SchemaType::Object(x) => x.get_field(name),
            SchemaType::Interface(x) => x.get_field(name),
            _ => None,
        }
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl<'a> From<OutputType<'a>> for SchemaType<'a> {
    #[inline]
    fn from(type_ref: OutputType<'a>) -> Self {
        match type_ref {
            OutputType::Object(x) => SchemaType::Object(x),
            OutputType::Union(x) => SchemaType::Union(x),
            OutputType::Interface(x) => SchemaType::Interface(x),
            OutputType::Scalar(x) => SchemaType::Scalar(x),
            OutputType::Enum(x) => SchemaType::Enum(x),
        }
    }
}

impl<'a> From<InputType<'a>> for SchemaType<'a> {
    #[inline]
    fn from(type_ref: InputType<'a>) -> Self {
        match type_ref {
            InputType::InputObject(x) => SchemaType::InputObject(x),
            InputType::Scalar(x) => SchemaType::Scalar(x),
            InputType::Enum(x) => SchemaType::Enum(x),
        }
    }
}

/// An output type enum that represents all possible GraphQL definition types that a field may
/// return.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OutputType<'a> {
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> OutputType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            OutputType::Object(x) => x.name,
            OutputType::Union(x) => x.name,
            OutputType::Interface(x) => x.name,
            OutputType::Scalar(x) => x.name,
            OutputType::Enum(x) => x.name,
        }
    }
}

/// An input type enum that represents all possible GraphQL definition types that an argument or
/// input object field may accept.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> InputType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            InputType::InputObject(o) => o.name,
            InputType::Scalar(s) => s.name,
            InputType::Enum(e) => e.name,
        }
    }
}

/// A reference to a named type that may be wrapped in lists and non-null modifiers.
///
/// Types are referenced by name only, which keeps recursive type graphs free of cycles.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeRef<'a> {
    Type(&'a str),
    ListType(&'a TypeRef<'a>),
    NonNullType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Returns the name of the innermost named type.
    pub fn named_type(&self) -> &'a str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) | TypeRef::NonNullType(of_type) => of_type.named_type(),
        }
    }

    /// Resolves the innermost named type against a schema.
    #[inline]
    pub fn of_type(&self, schema: &dyn SchemaLookup<'a>) -> Option<SchemaType<'a>> {
        schema.get_type(self.named_type())
    }

    /// Returns the type of a list's items if this type, ignoring a non-null modifier, is a list.
    pub fn list_item(&self) -> Option<&'a TypeRef<'a>> {
        match self {
            TypeRef::Type(_) => None,
            TypeRef::ListType(of_type) => Some(of_type),
            TypeRef::NonNullType(of_type) => of_type.list_item(),
        }
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullType(_))
    }
}

impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Type(name) => f.write_str(name),
            TypeRef::ListType(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNullType(of_type) => write!(f, "{}!", of_type),
        }
    }
}
