//! # Using Schema Definitions
//!
//! The `graphql_frontend::schema` module contains the client-side schema model that validation
//! looks types, fields, and directives up in. A schema may be created by hand or, with the `json`
//! feature, built from the result of an introspection query.
//!
//! Validation only depends on the [`SchemaLookup`] trait, which [Schema] implements.
//!
//! ```
//! use graphql_frontend::{ast::ASTContext, schema::*};
//!
//! let ctx = ASTContext::new();
//! let introspection_json = include_str!("../../fixture/introspection_query.json");
//! let introspection: IntrospectionQuery = serde_json::from_str(introspection_json).unwrap();
//! let schema = introspection.build_client_schema(&ctx);
//! assert_eq!(schema.query_type().map(|query| query.name), Some("Query"));
//! ```
//!
//! [More information on the Schema struct.](Schema)

pub mod build_client_schema;
pub mod introspection;
#[allow(clippy::module_inception)]
pub mod schema;

pub use build_client_schema::BuildClientSchema;
pub use introspection::{IntrospectionQuery, IntrospectionSchema};
pub use schema::*;
