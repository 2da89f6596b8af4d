//! # Validation Rules for GraphQL ASTs
//!
//! This module contains logic to run validation rules on GraphQL Query Language documents against
//! a schema. Each rule is an independent [`ValidationRule`] that reports every violation it finds,
//! and [`validate_document`] runs a list of rules and aggregates their errors into a single
//! [`Error`](crate::error::Error).
//!
//! The rules this module comes with are, in the order that [`default_rules`] runs them:
//!
//! - [`rules::UniqueOperationNames`]: checks that no operations share the same name
//! - [`rules::LoneAnonymousOperation`]: validates that a document only contains a single anonymous
//!   operation
//! - [`rules::UniqueFragmentNames`]: checks that no fragments share the same name
//! - [`rules::UniqueVariableNames`]: checks that no variables share the same name
//! - [`rules::VariablesAreInputTypes`]: checks that variables are only defined with input types
//! - [`rules::UniqueArgumentNames`]: checks for arguments that are used to not contain duplicates
//! - [`rules::KnownFragmentNames`]: validates that all spread fragments are defined
//! - [`rules::NoUnusedFragments`]: validates that all fragments in a document are used at least
//!   once
//! - [`rules::FieldsOnCorrectType`]: checks that all selected fields exist on their parent types
//!
//! The [visit](crate::visit) module is used to actually execute validation rules.
//! The [`ValidationRule`] trait is simply defined to implement the [Visitor](crate::visit::Visitor)
//! trait and to accept the [`ValidationContext`], which keeps track of validation errors and
//! carries the [`TypeInfo`] for the node that's currently visited.
//!
//! All rules must implement the `Default` trait, which makes it easier to quickly run a validation
//! rule and isolates them from external state. A rule's state never outlives a single run.
//!
//! For example, this is one way to run a single validation rule:
//!
//! ```
//! use graphql_frontend::{ast::*, schema::*, validate::{*, rules::*}};
//!
//! let ctx = ASTContext::new();
//! let schema = ctx.alloc(Schema::new(&ctx));
//! let document = Document::parse(&ctx, "query A { field } query A { field }").unwrap();
//!
//! UniqueOperationNames::validate(schema, document).unwrap_err();
//! ```
//!
//! Another way is to utilize the [`ValidateNode`] trait instead to run all rules starting from
//! the document rather than from a rule:
//!
//! ```
//! use graphql_frontend::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let mut schema = Schema::new(&ctx);
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "field", TypeRef::Type("Int")));
//! schema.add_type(SchemaType::Object(ctx.alloc(query)));
//! schema.set_root_type(OperationKind::Query, "Query");
//! let schema = ctx.alloc(schema);
//!
//! let document = Document::parse(&ctx, "{ field }").unwrap();
//! document.validate(schema).unwrap();
//!
//! let document = Document::parse(&ctx, "{ field ...Missing }").unwrap();
//! let error = document.validate_with(schema, &[rules::KnownFragmentNames::collect_errors]);
//! assert_eq!(error.unwrap_err().message(), "Unknown fragment \"Missing\"");
//! ```

#[allow(clippy::module_inception)]
mod validate;

mod context;
mod type_info;

pub mod rules;
pub use context::ValidationContext;
pub use type_info::*;
pub use validate::*;
