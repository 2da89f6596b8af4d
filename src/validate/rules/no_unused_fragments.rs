use hashbrown::{HashMap, HashSet};

use super::super::{ValidationContext, ValidationRule};
use crate::error::DocumentValidationError;
use crate::{ast::*, visit::*};

/// Validate that a document uses all the fragments it defines at least once.
///
/// A fragment counts as used when an operation spreads it, either directly or through other
/// fragments that the operation uses.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used)
#[derive(Default)]
pub struct NoUnusedFragments<'a> {
    fragment_names: Vec<&'a str>,
    fragment_spreads: HashMap<&'a str, Vec<&'a str>>,
    operation_spreads: Vec<&'a str>,
    current_fragment: Option<&'a str>,
}

impl<'a> ValidationRule<'a> for NoUnusedFragments<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUnusedFragments<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.current_fragment = None;
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.fragment_names.push(fragment.name.value);
        self.current_fragment = Some(fragment.name.value);
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        match self.current_fragment {
            Some(fragment) => self
                .fragment_spreads
                .entry(fragment)
                .or_default()
                .push(spread.name.value),
            None => self.operation_spreads.push(spread.name.value),
        }
        VisitFlow::Skip
    }

    fn leave_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _document: &'a Document<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let mut used = HashSet::new();
        let mut pending = std::mem::take(&mut self.operation_spreads);
        while let Some(name) = pending.pop() {
            if used.insert(name) {
                if let Some(spreads) = self.fragment_spreads.get(name) {
                    pending.extend(spreads.iter().copied());
                }
            }
        }
        for name in self.fragment_names.iter() {
            if !used.contains(name) {
                ctx.add_error(DocumentValidationError::UnusedFragment {
                    name: name.to_string(),
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

    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a Directive,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}
