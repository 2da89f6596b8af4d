use hashbrown::HashSet;

use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validates that no operation the document defines has duplicate variable names in its variable
/// definitions.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variable-Uniqueness)
#[derive(Default)]
pub struct UniqueVariableNames<'a> {
    used_variable_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for UniqueVariableNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueVariableNames<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.used_variable_names.clear();
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let name = var_def.variable.name.value;
        if !self.used_variable_names.insert(name) {
            ctx.add_error(DocumentValidationError::DuplicateVariableNames {
                name: name.to_string(),
            });
        }
        VisitFlow::Skip
    }

    fn enter_selection_set(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _selection_set: &'a SelectionSet,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a Directive,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _fragment: &'a FragmentDefinition,
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
    fn valid_variables() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query A($a: Int, $b: Int) { __typename } query B($a: Int) { __typename }",
        )
        .unwrap();
        UniqueVariableNames::validate(schema, document).unwrap();
    }

    #[test]
    fn overlapping_variables() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document =
            Document::parse(&ctx, "query ($a: Int, $b: ID, $a: Int, $b: ID) { __typename }")
                .unwrap();
        assert_eq!(
            UniqueVariableNames::collect_errors(schema, document),
            [
                DocumentValidationError::DuplicateVariableNames {
                    name: "a".to_string()
                },
                DocumentValidationError::DuplicateVariableNames {
                    name: "b".to_string()
                },
            ]
        );
    }
}
