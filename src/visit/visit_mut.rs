use super::{PathSegment, VisitInfo};
use crate::ast::*;
use crate::error::{Error, Result};

pub(crate) mod private {
    use super::{Result, VisitInfo, VisitorMut};

    /// The outcome of editing a single node, which the parent node applies to its children.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub enum Edited {
        Kept,
        Removed,
        Stopped,
    }

    pub trait EditNodeWithInfo<'a>: Sized {
        fn edit_with_info<V: VisitorMut<'a>>(
            &mut self,
            visitor: &mut V,
            info: &mut VisitInfo,
        ) -> Result<Edited>;
    }
}

use private::{EditNodeWithInfo, Edited};

/// An action that is returned from [`VisitorMut`] callbacks to alter the flow of traversal and to
/// edit the AST while it's traversed.
#[derive(Debug, PartialEq, Clone)]
pub enum VisitAction<T> {
    /// Keep the node and continue traversal as usual.
    Continue,
    /// Abort the traversal. All edits that were made so far are kept.
    Stop,
    /// Skip over the node's children. Only valid when returned from `enter_` callbacks, as there's
    /// nothing left to skip after a node's children were visited.
    Skip,
    /// Replace the node with a new node. When returned from an `enter_` callback the replacement's
    /// children are visited instead of the original node's children.
    Replace(T),
    /// Remove the node from its parent. When returned from an `enter_` callback neither its
    /// children nor its `leave_` callback are visited.
    Remove,
}

/// Trait for a visitor that may edit an AST in place while it's traversed in depth-first order.
///
/// Unlike a [Visitor](super::Visitor), whose callbacks only inspect the AST, callbacks of this
/// visitor return a [`VisitAction`], which may replace or remove the visited node. Child lists
/// are walked by index and removed nodes shift their later siblings into their place, so every
/// remaining sibling is still visited exactly once.
///
/// Nodes that are required by their parent, e.g. an [Argument]'s value or an operation's
/// selection set, can't be removed, and attempting to do so fails the traversal with an error.
pub trait VisitorMut<'a>: Sized {
    fn enter_document(
        &mut self,
        _document: &Document<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Document<'a>> {
        VisitAction::Continue
    }
    fn leave_document(
        &mut self,
        _document: &Document<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Document<'a>> {
        VisitAction::Continue
    }

    fn enter_operation(
        &mut self,
        _operation: &OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<OperationDefinition<'a>> {
        VisitAction::Continue
    }
    fn leave_operation(
        &mut self,
        _operation: &OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<OperationDefinition<'a>> {
        VisitAction::Continue
    }

    fn enter_fragment(
        &mut self,
        _fragment: &FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<FragmentDefinition<'a>> {
        VisitAction::Continue
    }
    fn leave_fragment(
        &mut self,
        _fragment: &FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<FragmentDefinition<'a>> {
        VisitAction::Continue
    }

    fn enter_variable_definition(
        &mut self,
        _var_def: &VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<VariableDefinition<'a>> {
        VisitAction::Continue
    }
    fn leave_variable_definition(
        &mut self,
        _var_def: &VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<VariableDefinition<'a>> {
        VisitAction::Continue
    }

    fn enter_selection_set(
        &mut self,
        _selection_set: &SelectionSet<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<SelectionSet<'a>> {
        VisitAction::Continue
    }
    fn leave_selection_set(
        &mut self,
        _selection_set: &SelectionSet<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<SelectionSet<'a>> {
        VisitAction::Continue
    }

    fn enter_fragment_spread(
        &mut self,
        _fragment_spread: &FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<FragmentSpread<'a>> {
        VisitAction::Continue
    }
    fn leave_fragment_spread(
        &mut self,
        _fragment_spread: &FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<FragmentSpread<'a>> {
        VisitAction::Continue
    }

    fn enter_inline_fragment(
        &mut self,
        _inline_fragment: &InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<InlineFragment<'a>> {
        VisitAction::Continue
    }
    fn leave_inline_fragment(
        &mut self,
        _inline_fragment: &InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<InlineFragment<'a>> {
        VisitAction::Continue
    }

    fn enter_field(&mut self, _field: &Field<'a>, _info: &VisitInfo) -> VisitAction<Field<'a>> {
        VisitAction::Continue
    }
    fn leave_field(&mut self, _field: &Field<'a>, _info: &VisitInfo) -> VisitAction<Field<'a>> {
        VisitAction::Continue
    }

    fn enter_directive(
        &mut self,
        _directive: &Directive<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Directive<'a>> {
        VisitAction::Continue
    }
    fn leave_directive(
        &mut self,
        _directive: &Directive<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Directive<'a>> {
        VisitAction::Continue
    }

    fn enter_argument(
        &mut self,
        _argument: &Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Argument<'a>> {
        VisitAction::Continue
    }
    fn leave_argument(
        &mut self,
        _argument: &Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<Argument<'a>> {
        VisitAction::Continue
    }

    fn enter_value(&mut self, _value: &Value<'a>, _info: &VisitInfo) -> VisitAction<Value<'a>> {
        VisitAction::Continue
    }
    fn leave_value(&mut self, _value: &Value<'a>, _info: &VisitInfo) -> VisitAction<Value<'a>> {
        VisitAction::Continue
    }

    fn enter_object_field(
        &mut self,
        _object_field: &InputObjectField<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<InputObjectField<'a>> {
        VisitAction::Continue
    }
    fn leave_object_field(
        &mut self,
        _object_field: &InputObjectField<'a>,
        _info: &VisitInfo,
    ) -> VisitAction<InputObjectField<'a>> {
        VisitAction::Continue
    }
}

/// Trait for editing AST Nodes of a GraphQL language document in place using a [`VisitorMut`].
pub trait VisitNodeMut<'a>: Sized + private::EditNodeWithInfo<'a> {
    /// Traverse and edit a GraphQL AST node tree in depth-first order with a given visitor.
    ///
    /// Returns the edited node, or `None` if the visitor removed the node itself. A traversal that
    /// was stopped returns the node with all edits that were made before stopping.
    fn edit<V: VisitorMut<'a>>(mut self, visitor: &mut V) -> Result<Option<Self>> {
        let mut info = VisitInfo::default();
        match self.edit_with_info(visitor, &mut info)? {
            Edited::Removed => Ok(None),
            Edited::Kept | Edited::Stopped => Ok(Some(self)),
        }
    }
}

impl<'a, T: private::EditNodeWithInfo<'a>> VisitNodeMut<'a> for T {}

/// Edits each node of a list by index. The index isn't advanced after a node was removed, since
/// the next sibling has then shifted into the removed node's place.
fn edit_list<'a, V: VisitorMut<'a>, N: EditNodeWithInfo<'a>>(
    nodes: &mut bumpalo::collections::Vec<'a, N>,
    segment: Option<PathSegment>,
    visitor: &mut V,
    info: &mut VisitInfo,
) -> Result<Edited> {
    if let Some(segment) = segment {
        info.path.push(segment);
    }
    let mut index = 0;
    let mut outcome = Edited::Kept;
    while index < nodes.len() {
        info.path.push(PathSegment::Index(index));
        let edited = nodes[index].edit_with_info(visitor, info);
        info.path.pop();
        match edited? {
            Edited::Kept => index += 1,
            Edited::Removed => {
                nodes.remove(index);
            }
            Edited::Stopped => {
                outcome = Edited::Stopped;
                break;
            }
        }
    }
    if segment.is_some() {
        info.path.pop();
    }
    Ok(outcome)
}

/// Edits a list of nodes that its parent requires to contain at least one node.
fn edit_non_empty_list<'a, V: VisitorMut<'a>, N: EditNodeWithInfo<'a>>(
    nodes: &mut bumpalo::collections::Vec<'a, N>,
    parent: ASTKind,
    visitor: &mut V,
    info: &mut VisitInfo,
) -> Result<Edited> {
    let edited = edit_list(nodes, None, visitor, info)?;
    if nodes.is_empty() {
        Err(Error::new(
            format!("Cannot remove every child node of {parent} node"),
            None,
        ))
    } else {
        Ok(edited)
    }
}

/// Edits a child node that its parent can't exist without.
fn edit_required<'a, V: VisitorMut<'a>, N: EditNodeWithInfo<'a>>(
    node: &mut N,
    parent: ASTKind,
    segment: PathSegment,
    visitor: &mut V,
    info: &mut VisitInfo,
) -> Result<Edited> {
    info.path.push(segment);
    let edited = node.edit_with_info(visitor, info);
    info.path.pop();
    match edited? {
        Edited::Removed => Err(Error::new(
            format!("Cannot remove required {segment} from {parent} node"),
            None,
        )),
        edited => Ok(edited),
    }
}

/// Edits a child node that may be detached from its parent.
fn edit_optional<'a, V: VisitorMut<'a>, N: EditNodeWithInfo<'a>>(
    node: &mut Option<N>,
    segment: PathSegment,
    visitor: &mut V,
    info: &mut VisitInfo,
) -> Result<Edited> {
    let Some(child) = node.as_mut() else {
        return Ok(Edited::Kept);
    };
    info.path.push(segment);
    let edited = child.edit_with_info(visitor, info);
    info.path.pop();
    match edited? {
        Edited::Removed => {
            *node = None;
            Ok(Edited::Kept)
        }
        edited => Ok(edited),
    }
}

/// Runs the shared enter/children/leave sequence of a node. `$children` is only evaluated when
/// the `enter_` callback neither skipped nor removed the node and must evaluate to a
/// `Result<Edited>`.
macro_rules! edit_node {
    ($node:expr, $visitor:ident, $info:ident, $enter:ident, $leave:ident, $children:block) => {{
        let mut skip = false;
        match $visitor.$enter($node, $info) {
            VisitAction::Continue => {}
            VisitAction::Skip => skip = true,
            VisitAction::Stop => return Ok(Edited::Stopped),
            VisitAction::Replace(replacement) => *$node = replacement,
            VisitAction::Remove => return Ok(Edited::Removed),
        }
        if !skip {
            let edited: Result<Edited> = $children;
            if edited? == Edited::Stopped {
                return Ok(Edited::Stopped);
            }
        }
        match $visitor.$leave($node, $info) {
            VisitAction::Continue => Ok(Edited::Kept),
            VisitAction::Stop => Ok(Edited::Stopped),
            VisitAction::Replace(replacement) => {
                *$node = replacement;
                Ok(Edited::Kept)
            }
            VisitAction::Remove => Ok(Edited::Removed),
            VisitAction::Skip => Err(Error::new(
                "Cannot skip a node's children from a leave callback after they were visited",
                None,
            )),
        }
    }};
}

/// Sequences edits of several children, stopping at the first child whose traversal was stopped.
macro_rules! edit_children {
    ($($edit:expr),+ $(,)?) => {{
        let mut outcome = Edited::Kept;
        $(
            if outcome != Edited::Stopped {
                outcome = $edit?;
            }
        )+
        Ok(outcome)
    }};
}

impl<'a> EditNodeWithInfo<'a> for Value<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_value, leave_value, {
            match self {
                Value::List(list) => {
                    edit_list(&mut list.values, Some(PathSegment::Values), visitor, info)
                }
                Value::Object(object) => {
                    edit_list(&mut object.fields, Some(PathSegment::Fields), visitor, info)
                }
                _ => Ok(Edited::Kept),
            }
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for InputObjectField<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_object_field, leave_object_field, {
            edit_required(
                &mut self.value,
                ASTKind::ObjectField,
                PathSegment::Value,
                visitor,
                info,
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for Argument<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_argument, leave_argument, {
            edit_required(
                &mut self.value,
                ASTKind::Argument,
                PathSegment::Value,
                visitor,
                info,
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for Directive<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_directive, leave_directive, {
            edit_list(
                &mut self.arguments.children,
                Some(PathSegment::Arguments),
                visitor,
                info,
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for VariableDefinition<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(
            self,
            visitor,
            info,
            enter_variable_definition,
            leave_variable_definition,
            {
                edit_optional(
                    &mut self.default_value,
                    PathSegment::DefaultValue,
                    visitor,
                    info,
                )
            }
        )
    }
}

impl<'a> EditNodeWithInfo<'a> for Field<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_field, leave_field, {
            edit_children!(
                edit_list(
                    &mut self.arguments.children,
                    Some(PathSegment::Arguments),
                    visitor,
                    info,
                ),
                edit_list(
                    &mut self.directives.children,
                    Some(PathSegment::Directives),
                    visitor,
                    info,
                ),
                edit_optional(
                    &mut self.selection_set,
                    PathSegment::SelectionSet,
                    visitor,
                    info,
                ),
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for FragmentSpread<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(
            self,
            visitor,
            info,
            enter_fragment_spread,
            leave_fragment_spread,
            {
                edit_list(
                    &mut self.directives.children,
                    Some(PathSegment::Directives),
                    visitor,
                    info,
                )
            }
        )
    }
}

impl<'a> EditNodeWithInfo<'a> for InlineFragment<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(
            self,
            visitor,
            info,
            enter_inline_fragment,
            leave_inline_fragment,
            {
                edit_children!(
                    edit_list(
                        &mut self.directives.children,
                        Some(PathSegment::Directives),
                        visitor,
                        info,
                    ),
                    edit_required(
                        &mut self.selection_set,
                        ASTKind::InlineFragment,
                        PathSegment::SelectionSet,
                        visitor,
                        info,
                    ),
                )
            }
        )
    }
}

impl<'a> EditNodeWithInfo<'a> for Selection<'a> {
    #[inline]
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        match self {
            Selection::Field(field) => field.edit_with_info(visitor, info),
            Selection::FragmentSpread(spread) => spread.edit_with_info(visitor, info),
            Selection::InlineFragment(fragment) => fragment.edit_with_info(visitor, info),
        }
    }
}

impl<'a> EditNodeWithInfo<'a> for SelectionSet<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(
            self,
            visitor,
            info,
            enter_selection_set,
            leave_selection_set,
            {
                edit_non_empty_list(&mut self.selections, ASTKind::SelectionSet, visitor, info)
            }
        )
    }
}

impl<'a> EditNodeWithInfo<'a> for FragmentDefinition<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_fragment, leave_fragment, {
            edit_children!(
                edit_list(
                    &mut self.directives.children,
                    Some(PathSegment::Directives),
                    visitor,
                    info,
                ),
                edit_required(
                    &mut self.selection_set,
                    ASTKind::FragmentDefinition,
                    PathSegment::SelectionSet,
                    visitor,
                    info,
                ),
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for OperationDefinition<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_operation, leave_operation, {
            edit_children!(
                edit_list(
                    &mut self.variable_definitions.children,
                    Some(PathSegment::VariableDefinitions),
                    visitor,
                    info,
                ),
                edit_list(
                    &mut self.directives.children,
                    Some(PathSegment::Directives),
                    visitor,
                    info,
                ),
                edit_required(
                    &mut self.selection_set,
                    ASTKind::OperationDefinition,
                    PathSegment::SelectionSet,
                    visitor,
                    info,
                ),
            )
        })
    }
}

impl<'a> EditNodeWithInfo<'a> for Definition<'a> {
    #[inline]
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        match self {
            Definition::Operation(operation) => operation.edit_with_info(visitor, info),
            Definition::Fragment(fragment) => fragment.edit_with_info(visitor, info),
        }
    }
}

impl<'a> EditNodeWithInfo<'a> for Document<'a> {
    fn edit_with_info<V: VisitorMut<'a>>(
        &mut self,
        visitor: &mut V,
        info: &mut VisitInfo,
    ) -> Result<Edited> {
        edit_node!(self, visitor, info, enter_document, leave_document, {
            edit_non_empty_list(&mut self.definitions, ASTKind::Document, visitor, info)
        })
    }
}
