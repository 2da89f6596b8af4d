use super::{path::Path, PathSegment};
use crate::ast::*;

pub(crate) mod private {
    use super::{VisitFlow, VisitInfo, Visitor};

    pub trait VisitNodeWithInfo<'a>: Sized {
        fn visit_with_info<'b, C, V: Visitor<'a, C>>(
            &'a self,
            ctx: &'b mut C,
            visitor: &'b mut V,
            info: &mut VisitInfo,
        ) -> VisitFlow;
    }
}

use private::VisitNodeWithInfo;

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// The default callbacks all return `VisitFlow::Next`, which continues the depth-first traversal.
/// The other signals may be used to skip over a node's children in an `enter_` callback or to
/// abort traversal entirely without visiting any more AST Nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Abort the traversal without performing any subsequent visits.
    Break,
    /// Skip over the current node's children. The node's `leave_` callback is still called.
    /// (Only applies to `enter_` callbacks and acts like `Next` elsewhere)
    Skip,
}

#[derive(Debug, Default)]
pub struct VisitInfo {
    pub path: Path,
}

/// Trait for a visitor that carries methods that are called as callback while AST nodes
/// implementing the visitor pattern are traversed.
///
/// While the AST is traversed in depth-first order, callbacks that are prefixed with `enter_` are
/// called from top-to-bottom while the traversal is recursing, while callbacks that are prefixed
/// with `leave_` are called from bottom-to-top while the traversal is returning.
///
/// Every per-kind callback defaults to calling the catch-all `enter_node` or `leave_node`
/// callback with an [`ASTNode`]. Overriding a per-kind callback hence takes precedence over the
/// catch-all callback for that kind of node, and at most one callback is called per node.
///
/// The visitor may also define a custom context structure that can be passed to the `visit`
/// method. By default the context is an empty unit `()`.
///
/// This pattern is applicable to any AST node that implements the [`VisitNode`] trait.
pub trait Visitor<'a, Context = ()>: Sized {
    /// Called when any node is visited whose per-kind `enter_` callback isn't overridden.
    fn enter_node(
        &mut self,
        _ctx: &mut Context,
        _node: ASTNode<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after any node was visited whose per-kind `leave_` callback isn't overridden.
    fn leave_node(
        &mut self,
        _ctx: &mut Context,
        _node: ASTNode<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [Document] is visited and before its child nodes are visited.
    fn enter_document(
        &mut self,
        ctx: &mut Context,
        document: &'a Document<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::Document(document), info)
    }
    /// Called after a [Document] and its child nodes were visited.
    fn leave_document(
        &mut self,
        ctx: &mut Context,
        document: &'a Document<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::Document(document), info)
    }

    /// Called when an [`OperationDefinition`] node is visited and before its child nodes are
    /// visited.
    fn enter_operation(
        &mut self,
        ctx: &mut Context,
        operation: &'a OperationDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::OperationDefinition(operation), info)
    }
    /// Called after an [`OperationDefinition`] and its child node were visited.
    fn leave_operation(
        &mut self,
        ctx: &mut Context,
        operation: &'a OperationDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::OperationDefinition(operation), info)
    }

    /// Called when a [`FragmentDefinition`] node is visited and before its child nodes are visited.
    fn enter_fragment(
        &mut self,
        ctx: &mut Context,
        fragment: &'a FragmentDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::FragmentDefinition(fragment), info)
    }
    /// Called after a [`FragmentDefinition`] node and its child nodes were visited.
    fn leave_fragment(
        &mut self,
        ctx: &mut Context,
        fragment: &'a FragmentDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::FragmentDefinition(fragment), info)
    }

    /// Called when a [`VariableDefinition`] node is visited and before its default value is
    /// visited.
    fn enter_variable_definition(
        &mut self,
        ctx: &mut Context,
        var_def: &'a VariableDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::VariableDefinition(var_def), info)
    }
    /// Called after a [`VariableDefinition`] node and its default value were visited.
    fn leave_variable_definition(
        &mut self,
        ctx: &mut Context,
        var_def: &'a VariableDefinition<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::VariableDefinition(var_def), info)
    }

    /// Called when a [`SelectionSet`] node is visited and before its child nodes are visited.
    fn enter_selection_set(
        &mut self,
        ctx: &mut Context,
        selection_set: &'a SelectionSet<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::SelectionSet(selection_set), info)
    }
    /// Called after a [`SelectionSet`] node and its child nodes were visited.
    fn leave_selection_set(
        &mut self,
        ctx: &mut Context,
        selection_set: &'a SelectionSet<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::SelectionSet(selection_set), info)
    }

    /// Called when a [`FragmentSpread`] node is visited and before its child nodes are visited.
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut Context,
        fragment_spread: &'a FragmentSpread<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::FragmentSpread(fragment_spread), info)
    }
    /// Called after a [`FragmentSpread`] node and its child nodes were visited.
    fn leave_fragment_spread(
        &mut self,
        ctx: &mut Context,
        fragment_spread: &'a FragmentSpread<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::FragmentSpread(fragment_spread), info)
    }

    /// Called when an [`InlineFragment`] node is visited and before its child nodes are visited.
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut Context,
        inline_fragment: &'a InlineFragment<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::InlineFragment(inline_fragment), info)
    }
    /// Called after an [`InlineFragment`] node and its child nodes were visited.
    fn leave_inline_fragment(
        &mut self,
        ctx: &mut Context,
        inline_fragment: &'a InlineFragment<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::InlineFragment(inline_fragment), info)
    }

    /// Called when a [Field] node is visited and before its child nodes are visited.
    fn enter_field(
        &mut self,
        ctx: &mut Context,
        field: &'a Field<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::Field(field), info)
    }
    /// Called after a [Field] node and its child nodes were visited.
    fn leave_field(
        &mut self,
        ctx: &mut Context,
        field: &'a Field<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::Field(field), info)
    }

    /// Called when a [Directive] node is visited and before its child nodes are visited.
    fn enter_directive(
        &mut self,
        ctx: &mut Context,
        directive: &'a Directive<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::Directive(directive), info)
    }
    /// Called after a [Directive] node and its child nodes were visited.
    fn leave_directive(
        &mut self,
        ctx: &mut Context,
        directive: &'a Directive<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::Directive(directive), info)
    }

    /// Called when an [Argument] node is visited and before its value is visited.
    fn enter_argument(
        &mut self,
        ctx: &mut Context,
        argument: &'a Argument<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::Argument(argument), info)
    }
    /// Called after an [Argument] node and its value were visited.
    fn leave_argument(
        &mut self,
        ctx: &mut Context,
        argument: &'a Argument<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::Argument(argument), info)
    }

    /// Called when a [Value] of any kind is visited and before list items or object fields are
    /// visited.
    fn enter_value(
        &mut self,
        ctx: &mut Context,
        value: &'a Value<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::Value(value), info)
    }
    /// Called after a [Value] and its list items or object fields were visited.
    fn leave_value(
        &mut self,
        ctx: &mut Context,
        value: &'a Value<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::Value(value), info)
    }

    /// Called when an [`InputObjectField`] is visited and before its value is visited.
    fn enter_object_field(
        &mut self,
        ctx: &mut Context,
        object_field: &'a InputObjectField<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.enter_node(ctx, ASTNode::ObjectField(object_field), info)
    }
    /// Called after an [`InputObjectField`] and its value were visited.
    fn leave_object_field(
        &mut self,
        ctx: &mut Context,
        object_field: &'a InputObjectField<'a>,
        info: &VisitInfo,
    ) -> VisitFlow {
        self.leave_node(ctx, ASTNode::ObjectField(object_field), info)
    }
}

/// Trait for visiting AST Nodes of a GraphQL language document in depth-first order using a
/// custom visitor.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method.
pub trait VisitNode<'a>: Sized + private::VisitNodeWithInfo<'a> {
    /// Visit a GraphQL AST node tree recursively in depth-first order with a given visitor.
    ///
    /// Returns `VisitFlow::Break` if the traversal was aborted and `VisitFlow::Next` otherwise.
    fn visit<'b, C, V: Visitor<'a, C>>(&'a self, ctx: &'b mut C, visitor: &'b mut V) -> VisitFlow {
        let mut info = VisitInfo::default();
        self.visit_with_info(ctx, visitor, &mut info)
    }
}

impl<'a, T: private::VisitNodeWithInfo<'a>> VisitNode<'a> for T {}

/// Visits a child node under a named slot of the path.
#[inline]
fn visit_child<'a, 'b, C, V: Visitor<'a, C>, N: VisitNodeWithInfo<'a>>(
    node: &'a N,
    segment: PathSegment,
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo,
) -> VisitFlow {
    info.path.push(segment);
    let flow = node.visit_with_info(ctx, visitor, info);
    info.path.pop();
    flow
}

/// Visits each node of a list under a named slot of the path, followed by the node's index.
#[inline]
fn visit_list<'a, 'b, C, V: Visitor<'a, C>, N: VisitNodeWithInfo<'a>>(
    nodes: &'a [N],
    segment: PathSegment,
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo,
) -> VisitFlow {
    info.path.push(segment);
    for (index, node) in nodes.iter().enumerate() {
        info.path.push(PathSegment::Index(index));
        let flow = node.visit_with_info(ctx, visitor, info);
        info.path.pop();
        if flow == VisitFlow::Break {
            return VisitFlow::Break;
        }
    }
    info.path.pop();
    VisitFlow::Next
}

/// Maps the result of a `leave_` callback, where only `Break` carries meaning.
#[inline]
fn after_leave(flow: VisitFlow) -> VisitFlow {
    match flow {
        VisitFlow::Break => VisitFlow::Break,
        VisitFlow::Next | VisitFlow::Skip => VisitFlow::Next,
    }
}

/// Runs the shared enter/children/leave sequence of a node. `$children` is only evaluated when
/// `$enter` returned `Next` and must evaluate to a [VisitFlow].
macro_rules! visit_node {
    (
        $visitor:ident,
        $ctx:ident,
        $info:ident,
        $node:expr,
        $enter:ident,
        $leave:ident,
        $children:block
    ) => {{
        match $visitor.$enter($ctx, $node, $info) {
            VisitFlow::Break => return VisitFlow::Break,
            VisitFlow::Skip => {}
            VisitFlow::Next => {
                let flow: VisitFlow = $children;
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                }
            }
        }
        after_leave($visitor.$leave($ctx, $node, $info))
    }};
}

impl<'a> VisitNodeWithInfo<'a> for Value<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_value, leave_value, {
            match self {
                Value::List(list) => {
                    visit_list(&list.values, PathSegment::Values, ctx, visitor, info)
                }
                Value::Object(object) => {
                    visit_list(&object.fields, PathSegment::Fields, ctx, visitor, info)
                }
                _ => VisitFlow::Next,
            }
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for InputObjectField<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_object_field, leave_object_field, {
            visit_child(&self.value, PathSegment::Value, ctx, visitor, info)
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for Argument<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_argument, leave_argument, {
            visit_child(&self.value, PathSegment::Value, ctx, visitor, info)
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for Directive<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_directive, leave_directive, {
            visit_list(
                &self.arguments.children,
                PathSegment::Arguments,
                ctx,
                visitor,
                info,
            )
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for VariableDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(
            visitor,
            ctx,
            info,
            self,
            enter_variable_definition,
            leave_variable_definition,
            {
                match &self.default_value {
                    Some(value) => {
                        visit_child(value, PathSegment::DefaultValue, ctx, visitor, info)
                    }
                    None => VisitFlow::Next,
                }
            }
        )
    }
}

impl<'a> VisitNodeWithInfo<'a> for Field<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_field, leave_field, {
            if visit_list(
                &self.arguments.children,
                PathSegment::Arguments,
                ctx,
                visitor,
                info,
            ) == VisitFlow::Break
                || visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                ) == VisitFlow::Break
            {
                VisitFlow::Break
            } else if let Some(selection_set) = &self.selection_set {
                visit_child(selection_set, PathSegment::SelectionSet, ctx, visitor, info)
            } else {
                VisitFlow::Next
            }
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for FragmentSpread<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(
            visitor,
            ctx,
            info,
            self,
            enter_fragment_spread,
            leave_fragment_spread,
            {
                visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                )
            }
        )
    }
}

impl<'a> VisitNodeWithInfo<'a> for InlineFragment<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(
            visitor,
            ctx,
            info,
            self,
            enter_inline_fragment,
            leave_inline_fragment,
            {
                if visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                ) == VisitFlow::Break
                {
                    VisitFlow::Break
                } else {
                    visit_child(
                        &self.selection_set,
                        PathSegment::SelectionSet,
                        ctx,
                        visitor,
                        info,
                    )
                }
            }
        )
    }
}

impl<'a> VisitNodeWithInfo<'a> for Selection<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        match self {
            Selection::Field(field) => field.visit_with_info(ctx, visitor, info),
            Selection::FragmentSpread(spread) => spread.visit_with_info(ctx, visitor, info),
            Selection::InlineFragment(fragment) => fragment.visit_with_info(ctx, visitor, info),
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for SelectionSet<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(
            visitor,
            ctx,
            info,
            self,
            enter_selection_set,
            leave_selection_set,
            {
                let mut flow = VisitFlow::Next;
                for (index, selection) in self.selections.iter().enumerate() {
                    info.path.push(PathSegment::Index(index));
                    flow = selection.visit_with_info(ctx, visitor, info);
                    info.path.pop();
                    if flow == VisitFlow::Break {
                        break;
                    }
                }
                flow
            }
        )
    }
}

impl<'a> VisitNodeWithInfo<'a> for FragmentDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_fragment, leave_fragment, {
            if visit_list(
                &self.directives.children,
                PathSegment::Directives,
                ctx,
                visitor,
                info,
            ) == VisitFlow::Break
            {
                VisitFlow::Break
            } else {
                visit_child(
                    &self.selection_set,
                    PathSegment::SelectionSet,
                    ctx,
                    visitor,
                    info,
                )
            }
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for OperationDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_operation, leave_operation, {
            if visit_list(
                &self.variable_definitions.children,
                PathSegment::VariableDefinitions,
                ctx,
                visitor,
                info,
            ) == VisitFlow::Break
                || visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                ) == VisitFlow::Break
            {
                VisitFlow::Break
            } else {
                visit_child(
                    &self.selection_set,
                    PathSegment::SelectionSet,
                    ctx,
                    visitor,
                    info,
                )
            }
        })
    }
}

impl<'a> VisitNodeWithInfo<'a> for Definition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        match self {
            Definition::Operation(operation) => operation.visit_with_info(ctx, visitor, info),
            Definition::Fragment(fragment) => fragment.visit_with_info(ctx, visitor, info),
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for Document<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo,
    ) -> VisitFlow {
        visit_node!(visitor, ctx, info, self, enter_document, leave_document, {
            let mut flow = VisitFlow::Next;
            for (index, definition) in self.definitions.iter().enumerate() {
                info.path.push(PathSegment::Index(index));
                flow = definition.visit_with_info(ctx, visitor, info);
                info.path.pop();
                if flow == VisitFlow::Break {
                    break;
                }
            }
            flow
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hashbrown::HashMap;

    #[derive(Debug, PartialEq, Default)]
    pub(crate) struct CountVisitor {
        pub(crate) in_document: usize,
        pub(crate) out_document: usize,
        pub(crate) in_operation: usize,
        pub(crate) out_operation: usize,
        pub(crate) in_fragment: usize,
        pub(crate) out_fragment: usize,
        pub(crate) in_variable_definition: usize,
        pub(crate) out_variable_definition: usize,
        pub(crate) in_selection_set: usize,
        pub(crate) out_selection_set: usize,
        pub(crate) in_fragment_spread: usize,
        pub(crate) out_fragment_spread: usize,
        pub(crate) in_inline_fragment: usize,
        pub(crate) out_inline_fragment: usize,
        pub(crate) in_field: usize,
        pub(crate) out_field: usize,
        pub(crate) in_directive: usize,
        pub(crate) out_directive: usize,
        pub(crate) in_argument: usize,
        pub(crate) out_argument: usize,
    }

    impl<'a> Visitor<'a, ()> for CountVisitor {
        fn enter_document(&mut self, _: &mut (), _: &'a Document<'a>, _: &VisitInfo) -> VisitFlow {
            self.in_document += 1;
            VisitFlow::Next
        }
        fn leave_document(&mut self, _: &mut (), _: &'a Document<'a>, _: &VisitInfo) -> VisitFlow {
            self.out_document += 1;
            VisitFlow::Next
        }

        fn enter_operation(
            &mut self,
            _: &mut (),
            _: &'a OperationDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_operation += 1;
            VisitFlow::Next
        }
        fn leave_operation(
            &mut self,
            _: &mut (),
            _: &'a OperationDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_operation += 1;
            VisitFlow::Next
        }

        fn enter_fragment(
            &mut self,
            _: &mut (),
            _: &'a FragmentDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_fragment += 1;
            VisitFlow::Next
        }
        fn leave_fragment(
            &mut self,
            _: &mut (),
            _: &'a FragmentDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_fragment += 1;
            VisitFlow::Next
        }

        fn enter_variable_definition(
            &mut self,
            _: &mut (),
            _: &'a VariableDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_variable_definition += 1;
            VisitFlow::Next
        }
        fn leave_variable_definition(
            &mut self,
            _: &mut (),
            _: &'a VariableDefinition<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_variable_definition += 1;
            VisitFlow::Next
        }

        fn enter_selection_set(
            &mut self,
            _: &mut (),
            _: &'a SelectionSet<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_selection_set += 1;
            VisitFlow::Next
        }
        fn leave_selection_set(
            &mut self,
            _: &mut (),
            _: &'a SelectionSet<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_selection_set += 1;
            VisitFlow::Next
        }

        fn enter_fragment_spread(
            &mut self,
            _: &mut (),
            _: &'a FragmentSpread<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_fragment_spread += 1;
            VisitFlow::Next
        }
        fn leave_fragment_spread(
            &mut self,
            _: &mut (),
            _: &'a FragmentSpread<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_fragment_spread += 1;
            VisitFlow::Next
        }

        fn enter_inline_fragment(
            &mut self,
            _: &mut (),
            _: &'a InlineFragment<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_inline_fragment += 1;
            VisitFlow::Next
        }
        fn leave_inline_fragment(
            &mut self,
            _: &mut (),
            _: &'a InlineFragment<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_inline_fragment += 1;
            VisitFlow::Next
        }

        fn enter_field(&mut self, _: &mut (), _: &'a Field<'a>, _: &VisitInfo) -> VisitFlow {
            self.in_field += 1;
            VisitFlow::Next
        }
        fn leave_field(&mut self, _: &mut (), _: &'a Field<'a>, _: &VisitInfo) -> VisitFlow {
            self.out_field += 1;
            VisitFlow::Next
        }

        fn enter_directive(
            &mut self,
            _: &mut (),
            _: &'a Directive<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.in_directive += 1;
            VisitFlow::Next
        }
        fn leave_directive(
            &mut self,
            _: &mut (),
            _: &'a Directive<'a>,
            _: &VisitInfo,
        ) -> VisitFlow {
            self.out_directive += 1;
            VisitFlow::Next
        }

        fn enter_argument(&mut self, _: &mut (), _: &'a Argument<'a>, _: &VisitInfo) -> VisitFlow {
            self.in_argument += 1;
            VisitFlow::Next
        }
        fn leave_argument(&mut self, _: &mut (), _: &'a Argument<'a>, _: &VisitInfo) -> VisitFlow {
            self.out_argument += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn counts() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            indoc::indoc! {"
                query Q($id: ID = 1) @live {
                    node(id: $id) {
                        ... on User { name @include(if: true) }
                        ...Rest
                    }
                }
                fragment Rest on Node { id }
            "},
        )
        .unwrap();

        let mut visitor = CountVisitor::default();
        assert_eq!(ast.visit(&mut (), &mut visitor), VisitFlow::Next);
        assert_eq!(
            visitor,
            CountVisitor {
                in_document: 1,
                out_document: 1,
                in_operation: 1,
                out_operation: 1,
                in_fragment: 1,
                out_fragment: 1,
                in_variable_definition: 1,
                out_variable_definition: 1,
                in_selection_set: 4,
                out_selection_set: 4,
                in_fragment_spread: 1,
                out_fragment_spread: 1,
                in_inline_fragment: 1,
                out_inline_fragment: 1,
                in_field: 3,
                out_field: 3,
                in_directive: 2,
                out_directive: 2,
                in_argument: 2,
                out_argument: 2,
            }
        )
    }

    /// Counts nodes per kind using only the catch-all callbacks, except for fields.
    #[derive(Default)]
    struct KindVisitor {
        entered: HashMap<ASTKind, usize>,
        left: usize,
        fields: usize,
    }

    impl<'a> Visitor<'a> for KindVisitor {
        fn enter_node(&mut self, _: &mut (), node: ASTNode<'a>, _: &VisitInfo) -> VisitFlow {
            *self.entered.entry(node.kind()).or_default() += 1;
            VisitFlow::Next
        }
        fn leave_node(&mut self, _: &mut (), _: ASTNode<'a>, _: &VisitInfo) -> VisitFlow {
            self.left += 1;
            VisitFlow::Next
        }
        fn enter_field(&mut self, _: &mut (), _: &'a Field<'a>, _: &VisitInfo) -> VisitFlow {
            self.fields += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn catch_all_callbacks() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a(x: [1, {y: \"z\"}], e: RED) { b } }").unwrap();
        let mut visitor = KindVisitor::default();
        ast.visit(&mut (), &mut visitor);

        // Field enters are handled by the per-kind callback alone
        assert_eq!(visitor.fields, 2);
        assert_eq!(visitor.entered.get(&ASTKind::Field), None);
        assert_eq!(visitor.entered[&ASTKind::Document], 1);
        assert_eq!(visitor.entered[&ASTKind::OperationDefinition], 1);
        assert_eq!(visitor.entered[&ASTKind::SelectionSet], 2);
        assert_eq!(visitor.entered[&ASTKind::Argument], 2);
        assert_eq!(visitor.entered[&ASTKind::List], 1);
        assert_eq!(visitor.entered[&ASTKind::Int], 1);
        assert_eq!(visitor.entered[&ASTKind::Object], 1);
        assert_eq!(visitor.entered[&ASTKind::ObjectField], 1);
        assert_eq!(visitor.entered[&ASTKind::String], 1);
        assert_eq!(visitor.entered[&ASTKind::Enum], 1);
        // Every node including fields is left through the catch-all callback
        let entered: usize = visitor.entered.values().sum();
        assert_eq!(visitor.left, entered + visitor.fields);
    }

    #[derive(Default)]
    struct SkipVisitor {
        fields: std::vec::Vec<String>,
        left: std::vec::Vec<String>,
        break_on: Option<&'static str>,
    }

    impl<'a> Visitor<'a> for SkipVisitor {
        fn enter_field(&mut self, _: &mut (), field: &'a Field<'a>, _: &VisitInfo) -> VisitFlow {
            self.fields.push(field.name.value.to_string());
            if Some(field.name.value) == self.break_on {
                VisitFlow::Break
            } else if field.name.value == "skipped" {
                VisitFlow::Skip
            } else {
                VisitFlow::Next
            }
        }
        fn leave_field(&mut self, _: &mut (), field: &'a Field<'a>, _: &VisitInfo) -> VisitFlow {
            self.left.push(field.name.value.to_string());
            VisitFlow::Next
        }
    }

    #[test]
    fn skip_and_break() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ skipped { inner } after { nested } last }").unwrap();

        let mut visitor = SkipVisitor::default();
        assert_eq!(ast.visit(&mut (), &mut visitor), VisitFlow::Next);
        assert_eq!(visitor.fields, ["skipped", "after", "nested", "last"]);
        assert_eq!(visitor.left, ["skipped", "nested", "after", "last"]);

        let mut visitor = SkipVisitor {
            break_on: Some("nested"),
            ..SkipVisitor::default()
        };
        assert_eq!(ast.visit(&mut (), &mut visitor), VisitFlow::Break);
        assert_eq!(visitor.fields, ["skipped", "after", "nested"]);
        assert_eq!(visitor.left, ["skipped"]);
    }

    struct InfoVisitor {}

    impl<'a> Visitor<'a> for InfoVisitor {
        fn enter_fragment_spread(
            &mut self,
            _ctx: &mut (),
            _fragment_spread: &'a FragmentSpread<'a>,
            info: &VisitInfo,
        ) -> VisitFlow {
            // We run this visitor on the kitchen sink query which contains
            // exactly one fragment spread at the following location
            assert_eq!(
                info.path.to_string(),
                "0.selectionSet.0.selectionSet.1.selectionSet.0.selectionSet.1.selectionSet.1"
            );
            VisitFlow::Next
        }

        fn enter_object_field(
            &mut self,
            _ctx: &mut (),
            object_field: &'a InputObjectField<'a>,
            info: &VisitInfo,
        ) -> VisitFlow {
            if object_field.name.value == "list" {
                assert_eq!(
                    info.path.to_string(),
                    "3.selectionSet.0.arguments.2.value.fields.2.value.fields.0"
                );
            }
            VisitFlow::Next
        }
    }

    #[test]
    fn visit_info_path() {
        let ctx = ASTContext::new();
        let query = include_str!("../../fixture/kitchen_sink.graphql");
        let ast = Document::parse(&ctx, query).unwrap();

        let mut visitor = InfoVisitor {};
        ast.visit(&mut (), &mut visitor);
    }
}
