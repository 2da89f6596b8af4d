//! # GraphQL Query Language AST
//!
//! The `graphql_frontend::ast` module contains the GraphQL query language AST, its lexer, and the
//! recursive-descent parser that produces it. The AST implemented in this crate is specialized to
//! the client-side GraphQL query language that clients use to make requests to a GraphQL service.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`Lexer`], the scanner that produces one [`Token`] at a time for the parser
//!
//! Every node carries an optional [`Location`], a `[start, end)` span of byte offsets into the
//! [`Source`] it was parsed from. Locations may be turned off using [`ParseOptions`].
//!
//! ```
//! use graphql_frontend::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "{ field }").unwrap();
//!
//! // Locations point back into the source text
//! let field = ast.operation(None).unwrap().selection_set.selections[0].field().unwrap();
//! assert_eq!(field.name.location.unwrap().span(), 2..7);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;

pub use ast::*;
pub use ast_kind::{ASTKind, ASTNode};
pub use lexer::{next, Lexer, Token, TokenKind, TokenValue};
pub use parser::{ParseNode, ParseOptions};
