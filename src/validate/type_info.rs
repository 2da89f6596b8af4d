use crate::ast::*;
use crate::schema::*;

static STRING_TYPE: TypeRef<'static> = TypeRef::Type("String");

/// Name of the meta field that may be selected on any composite type.
pub const TYPENAME_FIELD: &str = "__typename";

/// Names of the introspection meta fields that may be selected on the query root type.
pub const INTROSPECTION_FIELDS: [&str; 2] = ["__schema", "__type"];

/// Tracks the schema types and definitions that correspond to the AST Node that's currently being
/// visited.
///
/// `TypeInfo` is entered and left around every node in the same depth-first order as a
/// [Visitor](crate::visit::Visitor) traverses a document. Every node that pushes onto one of its
/// stacks also pops from it when it's left, so the stacks are empty again once a document has been
/// traversed. Entries are `None` when the corresponding type isn't known to the schema, which
/// propagates to all child nodes.
#[derive(Debug, Default, Clone)]
pub struct TypeInfo<'a> {
    type_stack: Vec<Option<TypeRef<'a>>>,
    parent_type_stack: Vec<Option<SchemaType<'a>>>,
    input_type_stack: Vec<Option<TypeRef<'a>>>,
    field_def_stack: Vec<Option<&'a SchemaField<'a>>>,
    in_directive: bool,
    directive: Option<&'a SchemaDirective<'a>>,
    argument: Option<&'a SchemaInputField<'a>>,
}

impl<'a> TypeInfo<'a> {
    pub fn new() -> Self {
        TypeInfo::default()
    }

    /// The output type of the current field, or the type that the current operation or fragment
    /// applies to.
    #[inline]
    pub fn get_type(&self) -> Option<TypeRef<'a>> {
        self.type_stack.last().copied().flatten()
    }

    /// The composite type whose fields the current selection set selects.
    #[inline]
    pub fn get_parent_type(&self) -> Option<SchemaType<'a>> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The type that's expected of the current input value.
    #[inline]
    pub fn get_input_type(&self) -> Option<TypeRef<'a>> {
        self.input_type_stack.last().copied().flatten()
    }

    /// The type that's expected of the input value enclosing the current one.
    #[inline]
    pub fn get_parent_input_type(&self) -> Option<TypeRef<'a>> {
        self.input_type_stack.iter().rev().nth(1).copied().flatten()
    }

    #[inline]
    pub fn get_field_def(&self) -> Option<&'a SchemaField<'a>> {
        self.field_def_stack.last().copied().flatten()
    }

    #[inline]
    pub fn get_directive(&self) -> Option<&'a SchemaDirective<'a>> {
        self.directive
    }

    #[inline]
    pub fn get_argument(&self) -> Option<&'a SchemaInputField<'a>> {
        self.argument
    }

    /// Updates the tracked types before a node's children are visited.
    pub fn enter(&mut self, schema: &dyn SchemaLookup<'a>, node: ASTNode<'a>) {
        match node {
            ASTNode::SelectionSet(_) => {
                let parent_type = self
                    .get_type()
                    .and_then(|type_ref| type_ref.of_type(schema))
                    .filter(SchemaType::is_composite);
                self.parent_type_stack.push(parent_type);
            }
            ASTNode::Field(field) => {
                let (field_def, field_type) = match self.get_parent_type() {
                    Some(parent_type) => field_definition(parent_type, field.name.value),
                    None => (None, None),
                };
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            }
            ASTNode::Directive(directive) => {
                self.in_directive = true;
                self.directive = schema.get_directive(directive.name.value);
            }
            ASTNode::OperationDefinition(operation) => {
                let root_type = schema.get_root_type(operation.operation);
                self.type_stack
                    .push(root_type.map(|root_type| TypeRef::Type(root_type.name)));
            }
            ASTNode::InlineFragment(fragment) => {
                let type_ref = match fragment.type_condition {
                    Some(type_condition) => output_type(schema, type_condition.name),
                    None => self
                        .get_type()
                        .map(|type_ref| TypeRef::Type(type_ref.named_type())),
                };
                self.type_stack.push(type_ref);
            }
            ASTNode::FragmentDefinition(fragment) => {
                self.type_stack
                    .push(output_type(schema, fragment.type_condition.name));
            }
            ASTNode::VariableDefinition(var_def) => {
                // Only the named type is tracked, which list items of default values fall back to
                let input_type = schema
                    .get_type(var_def.of_type.named_type().name)
                    .and_then(|schema_type| schema_type.input_type())
                    .map(|input_type| TypeRef::Type(input_type.name()));
                self.input_type_stack.push(input_type);
            }
            ASTNode::Argument(argument) => {
                // Arguments of unknown directives stay untyped
                let definition = if self.in_directive {
                    self.directive
                        .and_then(|directive| directive.get_argument(argument.name.value))
                } else {
                    self.get_field_def()
                        .and_then(|field| field.get_argument(argument.name.value))
                };
                self.argument = definition;
                self.input_type_stack
                    .push(definition.map(|definition| definition.input_type));
            }
            ASTNode::Value(Value::List(_)) => {
                let item_type = self.get_input_type().map(|input_type| {
                    match input_type.list_item() {
                        Some(item_type) => *item_type,
                        None => nullable(input_type),
                    }
                });
                self.input_type_stack.push(item_type);
            }
            ASTNode::ObjectField(object_field) => {
                let field_type = self
                    .get_input_type()
                    .and_then(|input_type| input_type.of_type(schema))
                    .and_then(|schema_type| schema_type.input_object())
                    .and_then(|input_object| input_object.get_field(object_field.name.value))
                    .map(|field| field.input_type);
                self.input_type_stack.push(field_type);
            }
            ASTNode::Document(_)
            | ASTNode::FragmentSpread(_)
            | ASTNode::Value(_) => {}
        }
    }

    /// Restores the tracked types after a node and its children were visited.
    pub fn leave(&mut self, node: ASTNode<'a>) {
        match node {
            ASTNode::SelectionSet(_) => {
                self.parent_type_stack.pop();
            }
            ASTNode::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            }
            ASTNode::Directive(_) => {
                self.in_directive = false;
                self.directive = None;
            }
            ASTNode::OperationDefinition(_)
            | ASTNode::InlineFragment(_)
            | ASTNode::FragmentDefinition(_) => {
                self.type_stack.pop();
            }
            ASTNode::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            }
            ASTNode::VariableDefinition(_)
            | ASTNode::Value(Value::List(_))
            | ASTNode::ObjectField(_) => {
                self.input_type_stack.pop();
            }
            ASTNode::Document(_)
            | ASTNode::FragmentSpread(_)
            | ASTNode::Value(_) => {}
        }
    }
}

/// Checks whether a field name refers to a meta field that's implicitly defined on a parent type.
pub fn is_meta_field(
    schema: &dyn SchemaLookup<'_>,
    parent_type: SchemaType<'_>,
    name: &str,
) -> bool {
    if name == TYPENAME_FIELD {
        parent_type.is_composite()
    } else if INTROSPECTION_FIELDS.contains(&name) {
        schema
            .get_root_type(OperationKind::Query)
            .map_or(false, |query_type| query_type.name == parent_type.name())
    } else {
        false
    }
}

fn field_definition<'a>(
    parent_type: SchemaType<'a>,
    name: &str,
) -> (Option<&'a SchemaField<'a>>, Option<TypeRef<'a>>) {
    if name == TYPENAME_FIELD {
        return (None, Some(TypeRef::NonNullType(&STRING_TYPE)));
    }
    match parent_type.get_field(name) {
        Some(field) => (Some(field), Some(field.output_type)),
        None => (None, None),
    }
}

fn output_type<'a>(schema: &dyn SchemaLookup<'a>, name: &str) -> Option<TypeRef<'a>> {
    schema
        .get_type(name)
        .and_then(|schema_type| schema_type.output_type())
        .map(|output_type| TypeRef::Type(output_type.name()))
}

#[inline]
fn nullable(type_ref: TypeRef<'_>) -> TypeRef<'_> {
    match type_ref {
        TypeRef::NonNullType(of_type) => *of_type,
        type_ref => type_ref,
    }
}
