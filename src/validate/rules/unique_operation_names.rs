use hashbrown::HashMap;

use super::super::{ValidationContext, ValidationRule};
use crate::error::{DocumentValidationError, NameOccurrence};
use crate::{ast::*, visit::*};

/// Validates that no operation the document defines have duplicate names.
/// Note: Operations and Fragments are allowed to share names.
///
/// Every repeated name is reported along with the first operation of the same name.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
#[derive(Default)]
pub struct UniqueOperationNames<'a> {
    used_operation_names: HashMap<&'a str, ValidName<'a>>,
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(name) = operation.name {
            match self.used_operation_names.get(name.value) {
                Some(first) => ctx.add_error(DocumentValidationError::DuplicateOperationNames {
                    name1: occurrence(first),
                    name2: occurrence(&name),
                }),
                None => {
                    self.used_operation_names.insert(name.value, name);
                }
            }
        }
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

fn occurrence(name: &ValidName) -> NameOccurrence {
    NameOccurrence {
        name: name.value.to_string(),
        span: name.location.map(|location| location.span()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema::tests::todo_schema;

    #[test]
    fn valid_operation_names() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query Root { __typename } query Other { __typename } fragment Root on Query { me { id } }",
        )
        .unwrap();
        UniqueOperationNames::validate(schema, document).unwrap();
    }

    #[test]
    fn overlapping_operation_names() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let document = Document::parse(
            &ctx,
            "query Root { __typename } mutation Root { __typename } query Root { me { id } }",
        )
        .unwrap();
        let errors = UniqueOperationNames::collect_errors(schema, document);
        assert_eq!(
            errors,
            [
                DocumentValidationError::DuplicateOperationNames {
                    name1: NameOccurrence {
                        name: "Root".to_string(),
                        span: Some(6..10),
                    },
                    name2: NameOccurrence {
                        name: "Root".to_string(),
                        span: Some(35..39),
                    },
                },
                DocumentValidationError::DuplicateOperationNames {
                    name1: NameOccurrence {
                        name: "Root".to_string(),
                        span: Some(6..10),
                    },
                    name2: NameOccurrence {
                        name: "Root".to_string(),
                        span: Some(61..65),
                    },
                },
            ]
        );
    }

    #[test]
    fn names_without_locations() {
        let ctx = ASTContext::new();
        let schema = ctx.alloc(todo_schema(&ctx));
        let options = ParseOptions {
            no_location: true,
            no_source: false,
        };
        let document = Document::parse_with_options(
            &ctx,
            "query A { me { id } } query A { me { name } }",
            options,
        )
        .unwrap();
        let error = UniqueOperationNames::validate(schema, document).unwrap_err();
        assert_eq!(
            error.message(),
            "There can be only one operation named \"A\""
        );
        assert!(matches!(
            error.kind(),
            crate::error::ErrorKind::Validation(DocumentValidationError::DuplicateOperationNames {
                name1: NameOccurrence { span: None, .. },
                ..
            })
        ));
    }
}
