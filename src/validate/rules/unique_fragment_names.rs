use hashbrown::HashSet;

use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validates that no fragments the document defines have duplicate names.
/// Note: Operations and Fragments are allowed to share names.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness)
#[derive(Default)]
pub struct UniqueFragmentNames<'a> {
    used_fragment_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for UniqueFragmentNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueFragmentNames<'a> {
    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if !self.used_fragment_names.insert(fragment.name.value) {
            ctx.add_error(DocumentValidationError::DuplicateFragmentNames {
                name: fragment.name.value.to_string(),
            });
        }
        VisitFlow::Skip
    }

    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema::tests::todo_schema;

    #[test]
    fn unique_fragments() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query A { ...A ...B } fragment A on Query { me { id } } fragment B on Query { me { name } }",
        )
        .unwrap();
        UniqueFragmentNames::validate(schema, document).unwrap();
    }

    #[test]
    fn overlapping_fragments() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "{ ...A } fragment A on Query { me { id } } fragment A on Query { me { name } }",
        )
        .unwrap();
        let error = UniqueFragmentNames::validate(schema, document).unwrap_err();
        assert_eq!(
            error.message(),
            "There can be only one fragment named \"A\""
        );
    }
}
