use super::ast::*;
use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait. Visitors use it as the discriminant
/// of an [`ASTNode`] when a callback handles any kind of node.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::InputObjectField]
    ObjectField,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::EnumValue]
    Enum,
    /// See: [crate::ast::ListValue]
    List,
    /// See: [crate::ast::InputObjectValue]
    Object,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Document => f.write_str("Document"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::Type => f.write_str("Type"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Variable => f.write_str("Variable"),
            ASTKind::String => f.write_str("String"),
            ASTKind::Float => f.write_str("Float"),
            ASTKind::Int => f.write_str("Integer"),
            ASTKind::Boolean => f.write_str("Boolean"),
            ASTKind::Enum => f.write_str("Enum"),
            ASTKind::List => f.write_str("List"),
            ASTKind::Object => f.write_str("Object"),
        }
    }
}

/// A borrowed reference to any visitable AST node.
///
/// This is passed to the catch-all callbacks of a [Visitor](crate::visit::Visitor) and to
/// [`TypeInfo`](crate::validate::TypeInfo), so they can handle every node in one place.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ASTNode<'a> {
    Document(&'a Document<'a>),
    OperationDefinition(&'a OperationDefinition<'a>),
    FragmentDefinition(&'a FragmentDefinition<'a>),
    VariableDefinition(&'a VariableDefinition<'a>),
    SelectionSet(&'a SelectionSet<'a>),
    Field(&'a Field<'a>),
    FragmentSpread(&'a FragmentSpread<'a>),
    InlineFragment(&'a InlineFragment<'a>),
    Directive(&'a Directive<'a>),
    Argument(&'a Argument<'a>),
    ObjectField(&'a InputObjectField<'a>),
    Value(&'a Value<'a>),
}

impl<'a> ASTNode<'a> {
    /// Returns the kind of the referenced node. Values report the kind of their variant.
    pub fn kind(&self) -> ASTKind {
        match self {
            ASTNode::Document(_) => ASTKind::Document,
            ASTNode::OperationDefinition(_) => ASTKind::OperationDefinition,
            ASTNode::FragmentDefinition(_) => ASTKind::FragmentDefinition,
            ASTNode::VariableDefinition(_) => ASTKind::VariableDefinition,
            ASTNode::SelectionSet(_) => ASTKind::SelectionSet,
            ASTNode::Field(_) => ASTKind::Field,
            ASTNode::FragmentSpread(_) => ASTKind::FragmentSpread,
            ASTNode::InlineFragment(_) => ASTKind::InlineFragment,
            ASTNode::Directive(_) => ASTKind::Directive,
            ASTNode::Argument(_) => ASTKind::Argument,
            ASTNode::ObjectField(_) => ASTKind::ObjectField,
            ASTNode::Value(value) => match value {
                Value::Variable(_) => ASTKind::Variable,
                Value::String(_) => ASTKind::String,
                Value::Float(_) => ASTKind::Float,
                Value::Int(_) => ASTKind::Int,
                Value::Boolean(_) => ASTKind::Boolean,
                Value::Enum(_) => ASTKind::Enum,
                Value::List(_) => ASTKind::List,
                Value::Object(_) => ASTKind::Object,
            },
        }
    }

    pub fn location(&self) -> Option<Location<'a>> {
        match self {
            ASTNode::Document(node) => node.location,
            ASTNode::OperationDefinition(node) => node.location,
            ASTNode::FragmentDefinition(node) => node.location,
            ASTNode::VariableDefinition(node) => node.location,
            ASTNode::SelectionSet(node) => node.location,
            ASTNode::Field(node) => node.location,
            ASTNode::FragmentSpread(node) => node.location,
            ASTNode::InlineFragment(node) => node.location,
            ASTNode::Directive(node) => node.location,
            ASTNode::Argument(node) => node.location,
            ASTNode::ObjectField(node) => node.location,
            ASTNode::Value(node) => node.location(),
        }
    }
}
