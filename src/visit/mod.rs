//! # Visiting and Editing GraphQL ASTs
//!
//! The `graphql_frontend::visit` module contains utilities to traverse and edit GraphQL ASTs.
//! Mainly, this module exposes two traits relevant to this task:
//!
//! - The [Visitor] trait can be used to implement a read-only visitor.
//! - The [`VisitorMut`] trait can be used to implement a visitor that replaces or removes nodes
//!   while it's traversing the AST.
//!
//! This works via the [`VisitNode`] trait and [`VisitNodeMut`] trait that most AST nodes implement
//! and where visiting and editing can start.
//!
//! Typically, a visitor is used in GraphQL to gain information about the AST and inspect it for
//! certain features. The validation rules in [crate::validate] are all implemented as visitors.
//!
//! In this example we'll define a visitor that counts all operations in a document:
//!
//! ```
//! use graphql_frontend::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountOperations {
//!    operations: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountOperations {
//!     fn enter_fragment(
//!         &mut self,
//!         _ctx: &mut (),
//!         _fragment: &'a FragmentDefinition<'a>,
//!         _info: &VisitInfo
//!     ) -> VisitFlow {
//!         // We can skip over fragment nodes and never traverse its children,
//!         // since we're only interested in counting operations
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_operation(
//!         &mut self,
//!         _ctx: &mut (),
//!         operation: &'a OperationDefinition<'a>,
//!         _info: &VisitInfo
//!     ) -> VisitFlow {
//!         self.operations += 1;
//!         VisitFlow::Next
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ a } fragment B on Query { b }").unwrap();
//! let mut visitor = CountOperations::default();
//! document.visit(&mut (), &mut visitor);
//! assert_eq!(visitor.operations, 1);
//! ```
//!
//! [More information on the Visitor trait](Visitor)
//!
//! An editing visitor is very similar but its callbacks return a [`VisitAction`] instead. A
//! visitor that strips all `__typename` fields from a document may look like such:
//!
//! ```
//! use graphql_frontend::{ast::*, visit::*};
//!
//! struct StripTypename {}
//!
//! impl<'a> VisitorMut<'a> for StripTypename {
//!     fn enter_field(&mut self, field: &Field<'a>, _info: &VisitInfo) -> VisitAction<Field<'a>> {
//!         if field.name.value == "__typename" {
//!             VisitAction::Remove
//!         } else {
//!             VisitAction::Continue
//!         }
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ a { __typename b } }").unwrap();
//! let document = document.clone().edit(&mut StripTypename {}).unwrap().unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```
//!
//! [More information on the VisitorMut trait](VisitorMut)

mod path;
mod visit_mut;
mod visitor;

pub use path::*;
pub use visit_mut::{VisitAction, VisitNodeMut, VisitorMut};
pub use visitor::{VisitFlow, VisitInfo, VisitNode, Visitor};
