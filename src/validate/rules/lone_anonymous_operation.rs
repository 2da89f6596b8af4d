use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validate a document to only contain one anonymous operation or multiple named operations.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operations: usize,
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {}

impl<'a> Visitor<'a, ValidationContext<'a>> for LoneAnonymousOperation {
    fn enter_document(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.operations = document
            .definitions
            .iter()
            .filter_map(Definition::operation)
            .count();
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if operation.name.is_none() && self.operations > 1 {
            ctx.add_error(DocumentValidationError::AnonymousOperationNotAlone);
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema::tests::todo_schema;

    #[test]
    fn lone_operation() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document =
            Document::parse(&ctx, "query { __typename } fragment F on Query { me { id } }")
                .unwrap();
        LoneAnonymousOperation::validate(schema, document).unwrap();
    }

    #[test]
    fn two_named() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document =
            Document::parse(&ctx, "query A { __typename } query B { __typename }").unwrap();
        LoneAnonymousOperation::validate(schema, document).unwrap();
    }

    #[test]
    fn two_anonymous() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(&ctx, "{ __typename } { __typename }").unwrap();
        assert_eq!(
            LoneAnonymousOperation::collect_errors(schema, document),
            [
                DocumentValidationError::AnonymousOperationNotAlone,
                DocumentValidationError::AnonymousOperationNotAlone,
            ]
        );
    }

    #[test]
    fn anonymous_and_named() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(&ctx, "query A { __typename } { __typename }").unwrap();
        let error = LoneAnonymousOperation::validate(schema, document).unwrap_err();
        assert_eq!(
            error.message(),
            "This anonymous operation must be the only defined operation"
        );
    }
}
