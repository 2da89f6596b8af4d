use super::super::{is_meta_field, ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validates that every selected field is defined on the type it's selected on.
///
/// Fields on types that the schema doesn't know aren't checked. The meta field `__typename` may be
/// selected on any composite type and the introspection fields only on the query root type.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
#[derive(Default)]
pub struct FieldsOnCorrectType;

impl<'a> ValidationRule<'a> for FieldsOnCorrectType {}

impl<'a> Visitor<'a, ValidationContext<'a>> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(parent_type) = ctx.type_info.get_parent_type() {
            let name = field.name.value;
            if ctx.type_info.get_field_def().is_none()
                && !is_meta_field(ctx.schema, parent_type, name)
            {
                ctx.add_error(DocumentValidationError::UndefinedField {
                    field: name.to_string(),
                    type_name: parent_type.name().to_string(),
                });
            }
        }
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _var_def: &'a VariableDefinition,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_argument(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _argument: &'a Argument,
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
    fn known_fields() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            indoc::indoc! {r#"
                query {
                    __schema { anything }
                    todos { id text author { __typename name } }
                    node(id: 1) { id ... on Todo { done } }
                    search(text: "a") { __typename ... on Author { todos { id } } }
                }
                mutation { addTodo(input: { text: "a" }) { id } }
                fragment Unknown on Missing { anything }
            "#},
        )
        .unwrap();
        FieldsOnCorrectType::validate(schema, document).unwrap();
    }

    #[test]
    fn undefined_fields() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            indoc::indoc! {r#"
                {
                    todos { title author { missing { nested } } }
                    node(id: 1) { text }
                    search { id }
                    me { __type }
                }
            "#},
        )
        .unwrap();
        assert_eq!(
            FieldsOnCorrectType::collect_errors(schema, document),
            [
                DocumentValidationError::UndefinedField {
                    field: "title".to_string(),
                    type_name: "Todo".to_string(),
                },
                DocumentValidationError::UndefinedField {
                    field: "missing".to_string(),
                    type_name: "Author".to_string(),
                },
                DocumentValidationError::UndefinedField {
                    field: "text".to_string(),
                    type_name: "Node".to_string(),
                },
                DocumentValidationError::UndefinedField {
                    field: "id".to_string(),
                    type_name: "Search".to_string(),
                },
                DocumentValidationError::UndefinedField {
                    field: "__type".to_string(),
                    type_name: "Author".to_string(),
                },
            ]
        );
    }

    #[test]
    fn error_message() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(&ctx, "mutation { removeTodo }").unwrap();
        let error = FieldsOnCorrectType::validate(schema, document).unwrap_err();
        assert_eq!(
            error.message(),
            "Cannot query field \"removeTodo\" on type \"Mutation\""
        );
    }
}
