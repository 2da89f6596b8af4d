use hashbrown::HashSet;

use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validate a document for all fragment names in spreads to be defined in the same document.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
#[derive(Default)]
pub struct KnownFragmentNames<'a> {
    fragment_names: HashSet<&'a str>,
}

impl<'a> ValidationRule<'a> for KnownFragmentNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownFragmentNames<'a> {
    fn enter_document(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.fragment_names = document
            .definitions
            .iter()
            .filter_map(Definition::fragment)
            .map(|fragment| fragment.name.value)
            .collect();
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if !self.fragment_names.contains(spread.name.value) {
            ctx.add_error(DocumentValidationError::UnknownFragment {
                name: spread.name.value.to_string(),
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

    fn enter_argument(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _argument: &'a Argument,
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
}
