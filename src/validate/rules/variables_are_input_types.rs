use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validates that all variables are defined with types that may be used as inputs, which are
/// scalars, enums and input objects.
///
/// Variables with types that the schema doesn't know are reported as well.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types)
#[derive(Default)]
pub struct VariablesAreInputTypes;

impl<'a> ValidationRule<'a> for VariablesAreInputTypes {}

impl<'a> Visitor<'a, ValidationContext<'a>> for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let named_type = var_def.of_type.named_type().name;
        let is_input_type = ctx
            .schema
            .get_type(named_type)
            .map_or(false, |schema_type| schema_type.input_type().is_some());
        if !is_input_type {
            ctx.add_error(DocumentValidationError::VariableIsNonInputType {
                variable: var_def.variable.name.value.to_string(),
                type_name: var_def.of_type.to_string(),
            });
        }
        VisitFlow::Skip
    }

    fn enter_selection_set(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _fragment: &'a FragmentDefinition<'a>,
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
    fn input_types() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query ($a: String, $b: [Priority!]!, $c: TodoInput, $d: ID!) { __typename }",
        )
        .unwrap();
        VariablesAreInputTypes::validate(schema, document).unwrap();
    }

    #[test]
    fn output_types() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query ($a: Todo!, $b: [Search], $c: Node, $d: Int) { __typename }",
        )
        .unwrap();
        let errors = VariablesAreInputTypes::collect_errors(schema, document);
        assert_eq!(
            errors,
            [
                DocumentValidationError::VariableIsNonInputType {
                    variable: "a".to_string(),
                    type_name: "Todo!".to_string(),
                },
                DocumentValidationError::VariableIsNonInputType {
                    variable: "b".to_string(),
                    type_name: "[Search]".to_string(),
                },
                DocumentValidationError::VariableIsNonInputType {
                    variable: "c".to_string(),
                    type_name: "Node".to_string(),
                },
            ]
        );
        assert_eq!(
            errors[0].to_string(),
            "Variable \"$a\" cannot be non-input type \"Todo!\""
        );
    }

    #[test]
    fn unknown_types() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(&ctx, "query ($a: Unknown) { __typename }").unwrap();
        VariablesAreInputTypes::validate(schema, document).unwrap_err();
    }
}
