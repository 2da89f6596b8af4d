use super::context::ValidationContext;
use super::rules::*;
use crate::ast::{ASTNode, Argument, Directive, Document, Field, FragmentDefinition, FragmentSpread};
use crate::ast::{InlineFragment, InputObjectField, OperationDefinition, SelectionSet, Value};
use crate::ast::VariableDefinition;
use crate::error::{validation_result, DocumentValidationError, Result};
use crate::schema::SchemaLookup;
use crate::visit::{VisitFlow, VisitInfo, VisitNode, Visitor};
use log::{debug, trace};
use std::borrow::Borrow;

/// Trait for a `ValidationRule` that checks a given GraphQL document against its rules using a
/// visitor.
///
/// A rule always implements a visitor and accepts the [`ValidationContext`] structure as
/// its passed context. While a rule is run the context's [`TypeInfo`](super::TypeInfo) always
/// describes the node that's being visited, even for nodes the rule has no callbacks for.
///
/// Rules implement the `Default` trait, which allows them to be instantiated easily. Every run
/// creates a new instance of the rule, so a rule's state never carries over between documents.
pub trait ValidationRule<'a>: Visitor<'a, ValidationContext<'a>> + Default {
    /// Run this `ValidationRule` against the given document and return the errors it reported
    /// in document order.
    fn collect_errors(
        schema: &'a dyn SchemaLookup<'a>,
        document: &'a Document<'a>,
    ) -> Vec<DocumentValidationError> {
        let mut ctx = ValidationContext::new(schema);
        let mut visitor = WithTypeInfo {
            rule: Self::default(),
        };
        document.visit(&mut ctx, &mut visitor);
        ctx.into_errors()
    }

    /// Run this `ValidationRule` against the given document and return a result which errors if
    /// the rule fails on the document.
    #[inline]
    fn validate(schema: &'a dyn SchemaLookup<'a>, document: &'a Document<'a>) -> Result<()> {
        validation_result(Self::collect_errors(schema, document))
    }
}

/// Wraps a rule's visitor and updates the context's `TypeInfo` around each of the rule's
/// callbacks.
///
/// When a rule's `enter_` callback reports an error, the node's children are skipped for this
/// rule. The node's `leave_` callback is still called, which keeps the `TypeInfo` balanced.
struct WithTypeInfo<R> {
    rule: R,
}

macro_rules! with_type_info {
    ($($node:ident: $variant:ident, $enter:ident, $leave:ident;)*) => {
        impl<'a, R> Visitor<'a, ValidationContext<'a>> for WithTypeInfo<R>
        where
            R: Visitor<'a, ValidationContext<'a>>,
        {
            $(
                fn $enter(
                    &mut self,
                    ctx: &mut ValidationContext<'a>,
                    node: &'a $node<'a>,
                    info: &VisitInfo,
                ) -> VisitFlow {
                    let schema = ctx.schema;
                    ctx.type_info.enter(schema, ASTNode::$variant(node));
                    let errors = ctx.errors.len();
                    match self.rule.$enter(ctx, node, info) {
                        VisitFlow::Next if ctx.errors.len() > errors => VisitFlow::Skip,
                        flow => flow,
                    }
                }

                fn $leave(
                    &mut self,
                    ctx: &mut ValidationContext<'a>,
                    node: &'a $node<'a>,
                    info: &VisitInfo,
                ) -> VisitFlow {
                    let flow = self.rule.$leave(ctx, node, info);
                    ctx.type_info.leave(ASTNode::$variant(node));
                    flow
                }
            )*
        }
    };
}

with_type_info! {
    Document: Document, enter_document, leave_document;
    OperationDefinition: OperationDefinition, enter_operation, leave_operation;
    FragmentDefinition: FragmentDefinition, enter_fragment, leave_fragment;
    VariableDefinition: VariableDefinition, enter_variable_definition, leave_variable_definition;
    SelectionSet: SelectionSet, enter_selection_set, leave_selection_set;
    FragmentSpread: FragmentSpread, enter_fragment_spread, leave_fragment_spread;
    InlineFragment: InlineFragment, enter_inline_fragment, leave_inline_fragment;
    Field: Field, enter_field, leave_field;
    Directive: Directive, enter_directive, leave_directive;
    Argument: Argument, enter_argument, leave_argument;
    Value: Value, enter_value, leave_value;
    InputObjectField: ObjectField, enter_object_field, leave_object_field;
}

/// A function that runs a single [`ValidationRule`] on a document and returns its errors.
///
/// Any rule's `collect_errors` method may be used as a `RuleRunner`, e.g.
/// `UniqueOperationNames::collect_errors`.
pub type RuleRunner<'a> =
    fn(&'a dyn SchemaLookup<'a>, &'a Document<'a>) -> Vec<DocumentValidationError>;

/// Returns runners for all of this crate's validation rules in the order that they report errors.
///
/// See: [`RuleRunner`]
pub fn default_rules<'a>() -> [RuleRunner<'a>; 9] {
    [
        UniqueOperationNames::collect_errors,
        LoneAnonymousOperation::collect_errors,
        UniqueFragmentNames::collect_errors,
        UniqueVariableNames::collect_errors,
        VariablesAreInputTypes::collect_errors,
        UniqueArgumentNames::collect_errors,
        KnownFragmentNames::collect_errors,
        NoUnusedFragments::collect_errors,
        FieldsOnCorrectType::collect_errors,
    ]
}

/// Runs each rule on the document in order and aggregates their errors.
///
/// Every rule is run to completion before the next one is started. The result is `Ok` if no rule
/// reported an error. A single error is returned as is with an
/// [`ErrorKind::Validation`](crate::error::ErrorKind::Validation) kind, while multiple errors are
/// combined into one [`ErrorKind::MultipleErrors`](crate::error::ErrorKind::MultipleErrors)
/// error that lists them by rule and then in document order.
pub fn validate_document<'a>(
    schema: &'a dyn SchemaLookup<'a>,
    document: &'a Document<'a>,
    rules: &[RuleRunner<'a>],
) -> Result<()> {
    debug!(
        "validating document with {} definitions against {} rules",
        document.definitions.len(),
        rules.len()
    );
    let mut errors = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        let rule_errors = rule(schema, document);
        trace!("rule #{} reported {} errors", index, rule_errors.len());
        errors.extend(rule_errors);
    }
    if !errors.is_empty() {
        debug!("document failed validation with {} errors", errors.len());
    }
    validation_result(errors)
}

/// Trait to run validation rules on a given GraphQL Document node.
pub trait ValidateNode<'a>
where
    Self: Borrow<Document<'a>>,
{
    /// Run all of the [`default_rules`] on the document node and return a result which errors if
    /// any rule fails on the current document.
    ///
    /// `document.validate(schema)`
    #[inline]
    fn validate(&'a self, schema: &'a dyn SchemaLookup<'a>) -> Result<()> {
        validate_document(schema, self.borrow(), &default_rules())
    }

    /// Run a given list of rules on the document node.
    #[inline]
    fn validate_with(
        &'a self,
        schema: &'a dyn SchemaLookup<'a>,
        rules: &[RuleRunner<'a>],
    ) -> Result<()> {
        validate_document(schema, self.borrow(), rules)
    }
}

impl<'a> ValidateNode<'a> for Document<'a> {}
