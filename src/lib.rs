//! Java source front end: lexer, parser, typed AST, and serializer.
//!
//! The parser accepts Java 7 source and produces a typed AST whose nodes
//! derive structural equality and take a [`ast::Visitor`] for traversal.
//! [`ast::serialize`] turns a tree back into valid Java source that parses
//! to an equal tree.
//!
//! ```
//! use javaparse::{parse_compilation_unit, ast};
//!
//! let source = "class Point { int x; int y; }";
//! let unit = parse_compilation_unit(source).unwrap();
//! let printed = ast::serialize(&unit);
//! let reparsed = parse_compilation_unit(&printed).unwrap();
//! assert_eq!(unit, reparsed);
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::{parse_compilation_unit, parse_expression, parse_file, parse_statement};
