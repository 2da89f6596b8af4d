use hashbrown::HashSet;

use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validates that no field or directive is passed the same argument more than once.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
#[derive(Default)]
pub struct UniqueArgumentNames<'a> {
    used_argument_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for UniqueArgumentNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueArgumentNames<'a> {
    fn enter_field(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.used_argument_names.clear();
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.used_argument_names.clear();
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if !self.used_argument_names.insert(argument.name.value) {
            ctx.add_error(DocumentValidationError::DuplicateArgumentNames {
                name: argument.name.value.to_string(),
            });
        }
        VisitFlow::Skip
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _var_def: &'a VariableDefinition,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}
