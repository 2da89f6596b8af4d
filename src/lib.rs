//! `graphql_frontend`
//! =========
//!
//! _The front end of a GraphQL service: from query text to a validated AST._
//!
//! The **`graphql_frontend`** library turns GraphQL query source text into an abstract syntax tree
//! and checks it against a schema before it's handed to an execution engine. It's made up of four
//! parts that build on one another:
//!
//! - [A lexer and recursive-descent parser](ast), producing an arena-allocated AST whose nodes
//!   carry their source locations
//! - [Visitors](visit) that traverse the AST and may replace, remove or skip nodes along the way
//! - [A validation rule engine](validate) that runs independent rules over the AST and aggregates
//!   their errors
//! - [A schema model](schema) that the validation rules look types, fields and directives up in
//!
//! Executing queries and the GraphQL Schema Definition Language are not part of this crate.
//!
//! ```
//! use graphql_frontend::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let mut schema = Schema::new(&ctx);
//! let mut query = SchemaObject::new(&ctx, "Query");
//! query.add_field(&ctx, SchemaField::new(&ctx, "hello", TypeRef::Type("String")));
//! schema.add_type(SchemaType::Object(ctx.alloc(query)));
//! schema.set_root_type(OperationKind::Query, "Query");
//! let schema = ctx.alloc(schema);
//!
//! let document = Document::parse(&ctx, "{ hello }").unwrap();
//! document.validate(schema).unwrap();
//! ```
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;
