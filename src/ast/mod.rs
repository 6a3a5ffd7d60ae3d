//! Abstract syntax tree: node model, visitor dispatch, and serialization.

pub mod nodes;
pub mod printer;
pub mod visitor;

pub use nodes::*;
pub use printer::{serialize, serialize_expression, serialize_statement};
pub use visitor::{Accept, Visitor};
