pub use super::ast_conversion::*;
use crate::error::{Error, ErrorKind, Result};
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};
use std::fmt;
use std::ops::Range;

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of lexing, parsing, traversing, and validating an AST it's performant and
/// convenient to allocate memory in one chunk for the AST's operations. This context represents
/// the lifetime of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a query and the operations you perform on
/// it take up. Once you're done with the query this entire allocated memory is dropped all at
/// once, so it's inadvisable to reuse the AST Context across multiple incoming GraphQL requests.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A source text and the name it's displayed under.
///
/// All offsets in tokens, locations, and errors are byte offsets into a single Source's `body`.
/// Sources that aren't given a name are called `"GraphQL"`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub fn new<S: Into<String>>(body: S) -> Self {
        Self::with_name(body, "GraphQL")
    }

    pub fn with_name<B: Into<String>, N: Into<String>>(body: B, name: N) -> Self {
        Source {
            body: body.into(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Source {
    #[inline]
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    #[inline]
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

/// The span of an AST node inside its [Source].
///
/// `end` is exclusive. The `source` reference is omitted when a document is parsed with
/// `ParseOptions::no_source`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Location<'a> {
    pub start: usize,
    pub end: usize,
    pub source: Option<&'a Source>,
}

impl<'a> Location<'a> {
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the slice of the source text this location spans, if the source was retained.
    #[inline]
    pub fn source_text(&self) -> Option<&'a str> {
        self.source.and_then(|source| source.body().get(self.start..self.end))
    }
}

/// AST Node of a name that has been checked to be a valid GraphQL identifier.
///
/// Every place in the grammar that requires a name, e.g. a field's name or alias, uses this node
/// rather than a raw `&str` so that its location is kept.
/// [Reference](https://spec.graphql.org/October2021/#Name)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ValidName<'a> {
    pub value: &'a str,
    pub location: Option<Location<'a>>,
}

impl<'a> ValidName<'a> {
    /// Creates a name that isn't associated with any source text.
    #[inline]
    pub fn new(value: &'a str) -> Self {
        ValidName {
            value,
            location: None,
        }
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue<'a> {
    pub value: bool,
    pub location: Option<Location<'a>>,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: ValidName<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`". Since there's no
/// separate null literal in this AST, `null` is parsed as an enum value as well.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
    pub location: Option<Location<'a>>,
}

/// AST Node of an integer value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: i64,
    pub location: Option<Location<'a>>,
}

/// AST Node of a floating point value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE
/// 754](https://en.wikipedia.org/wiki/IEEE_754).
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: f64,
    pub location: Option<Location<'a>>,
}

/// AST Node of a string value.
///
/// Escape sequences are decoded when lexing, so this `value` doesn't contain any.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub location: Option<Location<'a>>,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            location: None,
        }
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue<'a>),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(InputObjectValue<'a>),
}

impl<'a> Value<'a> {
    #[inline]
    pub fn location(&self) -> Option<Location<'a>> {
        match self {
            Value::Variable(value) => value.location,
            Value::String(value) => value.location,
            Value::Float(value) => value.location,
            Value::Int(value) => value.location,
            Value::Boolean(value) => value.location,
            Value::Enum(value) => value.location,
            Value::List(value) => value.location,
            Value::Object(value) => value.location,
        }
    }
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub values: bumpalo::collections::Vec<'a, Value<'a>>,
    pub location: Option<Location<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// AST Node for a field of an Input Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectField<'a> {
    pub name: ValidName<'a>,
    pub value: Value<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for an Input Object value, which is a list of Input Object fields.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// The parser guarantees that no two fields of one object share a name.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectValue<'a> {
    pub fields: bumpalo::collections::Vec<'a, InputObjectField<'a>>,
    pub location: Option<Location<'a>>,
}

impl<'a> InputObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the value of the field with the given name.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.fields
            .iter()
            .find(|field| field.name.value == name)
            .map(|field| &field.value)
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// Arguments in GraphQL are unordered lists of inputs to a field's or directive's arguments.
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: ValidName<'a>,
    pub value: Value<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all arguments' names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for argument in self.children.iter() {
            map.insert(argument.name.value, &argument.value);
        }
        map
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip` and `@include`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: ValidName<'a>,
    pub arguments: Arguments<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for lists of GraphQL Directives.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: bumpalo::collections::Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// A parsed Selection Set always contains at least one selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    pub location: Option<Location<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<ValidName<'a>>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: ValidName<'a>,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    /// See: [Arguments]
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type. Leaf fields don't have one.
    /// See: [SelectionSet]
    pub selection_set: Option<SelectionSet<'a>>,
    pub location: Option<Location<'a>>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name).value
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// `arguments` and `directives` will be created as empty lists.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name: ValidName::new(name),
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: None,
            location: None,
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: ValidName<'a>,
    pub directives: Directives<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API. On inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&self) -> Option<&Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&self) -> Option<&FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            Selection::Field(_) | Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&self) -> Option<&InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            Selection::Field(_) | Selection::FragmentSpread(_) => None,
        }
    }

    #[inline]
    pub fn location(&self) -> Option<Location<'a>> {
        match self {
            Selection::Field(field) => field.location,
            Selection::FragmentSpread(spread) => spread.location,
            Selection::InlineFragment(fragment) => fragment.location,
        }
    }
}

/// AST Node for a type name.
///
/// Used for type conditions and as the leaf of a [Type] reference.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub location: Option<Location<'a>>,
}

/// AST Node of a list wrapper around a [Type].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ListType<'a> {
    pub of_type: &'a Type<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node of a non-null wrapper around a [Type].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NonNullType<'a> {
    pub of_type: &'a Type<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] must describe their type when they're defined, including whether they
/// expect lists, non-null values, or a type reference, which is a recursive type definition.
/// Wrapped types are allocated on the AST Context's arena.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named input type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list
    /// of the
    /// contained type in place.
    ListType(ListType<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null`
    /// instead
    /// of the contained type.
    NonNullType(NonNullType<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ListType {
            of_type: ctx.alloc(self),
            location: None,
        })
    }

    /// Wraps this type in a non-null wrapper.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(NonNullType {
            of_type: ctx.alloc(self),
            location: None,
        })
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn named_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(named) => named,
            Type::ListType(ListType { of_type, .. }) => of_type.named_type(),
            Type::NonNullType(NonNullType { of_type, .. }) => of_type.named_type(),
        }
    }

    #[inline]
    pub fn location(&self) -> Option<Location<'a>> {
        match self {
            Type::NamedType(named) => named.location,
            Type::ListType(list) => list.location,
            Type::NonNullType(non_null) => non_null.location,
        }
    }
}

impl<'a> fmt::Display for Type<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::NamedType(named) => f.write_str(named.name),
            Type::ListType(list) => write!(f, "[{}]", list.of_type),
            Type::NonNullType(non_null) => write!(f, "{}!", non_null.of_type),
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition defines a [Variable] identifier that can be used in place of any other
/// non-static [Value] throughout the operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A constant value that's used when the variable isn't passed.
    pub default_value: Option<Value<'a>>,
    pub location: Option<Location<'a>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// This extends a Selection Set by being applied using a [`FragmentSpread`] selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition. This is never `on`.
    pub name: ValidName<'a>,
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API.
    pub type_condition: NamedType<'a>,
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    // An optional name, as given to the operation definition.
    //
    // A [Document] may contain multiple
    // Operation Definitions from which a single one can be selected during execution. When a
    // Document contains only a single operation, it doesn't have to have a name.
    pub name: Option<ValidName<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    ///
    /// When an Operation Definition defines no variables this may be an empty list, as can be
    /// checked using `VariableDefinitions::is_empty`.
    pub variable_definitions: VariableDefinitions<'a>,
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location<'a>>,
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions of
/// fragments or operations.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
    pub location: Option<Location<'a>>,
}

impl<'a, 'b> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns a `Map` keyed by all fragment names mapped to their fragment definitions.
    /// This is useful for manually traversing the document and resolving [`FragmentSpread`] nodes
    /// to
    /// their definitions.
    pub fn fragments(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for definition in self.definitions.iter() {
            if let Definition::Fragment(fragment) = definition {
                map.insert(fragment.name.value, fragment);
            }
        }
        map
    }

    /// Finds an operation definition by name or the single operation contained in the document
    /// when `None` is passed.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation(&'a self, by_name: Option<&'b str>) -> Result<&'a OperationDefinition<'a>> {
        if let Some(by_name) = by_name {
            self.definitions
                .iter()
                .filter_map(Definition::operation)
                .find(|operation| operation.name.map(|name| name.value) == Some(by_name))
                .ok_or_else(|| {
                    Error::new(
                        format!("Operation with name {by_name} does not exist"),
                        Some(ErrorKind::GraphQL),
                    )
                })
        } else {
            let mut operations = self.definitions.iter().filter_map(Definition::operation);
            match (operations.next(), operations.next()) {
                (None, _) => Err(Error::new(
                    "Document does not contain any operations",
                    Some(ErrorKind::GraphQL),
                )),
                (Some(operation), None) => Ok(operation),
                (Some(_), Some(_)) => Err(Error::new(
                    "Document contains more than one operation, missing operation name",
                    Some(ErrorKind::GraphQL),
                )),
            }
        }
    }
}

/// AST Node for a Definition inside a query language document, which may either be an Operation
/// Definition or a Fragment Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an
    /// `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a
    /// `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        }
    }

    #[inline]
    pub fn location(&self) -> Option<Location<'a>> {
        match self {
            Definition::Operation(operation) => operation.location,
            Definition::Fragment(fragment) => fragment.location,
        }
    }
}

/// Trait implemented by all ast nodes that can have directives attached.
pub trait WithDirectives<'arena> {
    fn directives(&self) -> &Directives<'arena>;
}

macro_rules! with_directives {
    ($($for_type:ident),+) => {
        $(
            impl<'arena> WithDirectives<'arena> for $for_type<'arena> {
                #[inline]
                fn directives(&self) -> &Directives<'arena> {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Field,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    FragmentDefinition
);

impl<'arena> WithDirectives<'arena> for Selection<'arena> {
    /// Helper method to get all Directives for a given selection directly.
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

impl<'arena> WithDirectives<'arena> for Definition<'arena> {
    #[inline]
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Definition::Operation(operation) => &operation.directives,
            Definition::Fragment(fragment) => &fragment.directives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ASTContext, Document, Location, Source};
    use crate::ast::ParseNode;

    fn operation_name<'a>(ast: &'a Document<'a>, by_name: Option<&str>) -> Option<&'a str> {
        ast.operation(by_name)
            .unwrap()
            .name
            .map(|name| name.value)
    }

    #[test]
    fn operation_no_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"fragment Foo on Query { hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message(),
            "Operation with name queryName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message(),
            "Document does not contain any operations"
        );
    }

    #[test]
    fn operation_one_operation() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"query queryName { hello }"#).unwrap();
        assert_eq!(operation_name(&ast, Some("queryName")), Some("queryName"));
        assert_eq!(operation_name(&ast, None), Some("queryName"));
    }

    #[test]
    fn operation_one_operation_anonymous() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"{ hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message(),
            "Operation with name queryName does not exist"
        );
        assert_eq!(operation_name(&ast, None), None);
    }

    #[test]
    fn operation_two_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            r#"query queryName { hello } query otherName { world }"#,
        )
        .unwrap();
        assert_eq!(operation_name(&ast, Some("otherName")), Some("otherName"));
        assert_eq!(
            ast.operation(Some("badName")).unwrap_err().message(),
            "Operation with name badName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message(),
            "Document contains more than one operation, missing operation name"
        );
    }

    #[test]
    fn fragments_by_name() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "{ ...A } fragment A on Query { a } fragment B on Query { b }",
        )
        .unwrap();
        let fragments = ast.fragments(&ctx);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments["B"].type_condition.name, "Query");
    }

    #[test]
    fn location_source_text() {
        let source = Source::with_name("{ hello }", "request.graphql");
        let location = Location {
            start: 2,
            end: 7,
            source: Some(&source),
        };
        assert_eq!(location.source_text(), Some("hello"));
        assert_eq!(location.span(), 2..7);
        assert_eq!(source.name(), "request.graphql");
        assert_eq!(Source::from("{ a }").name(), "GraphQL");
    }
}
