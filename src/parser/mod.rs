//! Lexer and parser front end.

pub mod error;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod span;

use std::fs;
use std::path::Path;

use crate::ast::nodes::{CompilationUnit, Expression, Statement};
use crate::error::Result;

pub use error::{Diagnostic, ParseError};
pub use lexer::{Lexer, LexicalToken, Token};
pub use parser::Parser;
pub use span::Location;

/// Parses a complete Java source file into a [`CompilationUnit`].
pub fn parse_compilation_unit(source: &str) -> Result<CompilationUnit> {
    let mut parser = Parser::new(source);
    warn_diagnostics(parser.diagnostics());
    let unit = parser.parse_compilation_unit()?;
    log::debug!(
        "parsed compilation unit: {} imports, {} type declarations",
        unit.import_declarations.len(),
        unit.type_declarations.len()
    );
    Ok(unit)
}

/// Parses a single statement, including local variable and type declarations.
pub fn parse_statement(source: &str) -> Result<Statement> {
    let mut parser = Parser::new(source);
    warn_diagnostics(parser.diagnostics());
    Ok(parser.parse_statement()?)
}

/// Parses a single expression.
pub fn parse_expression(source: &str) -> Result<Expression> {
    let mut parser = Parser::new(source);
    warn_diagnostics(parser.diagnostics());
    Ok(parser.parse_expression()?)
}

/// Reads a file as UTF-8 and parses it as a compilation unit.
pub fn parse_file(path: impl AsRef<Path>) -> Result<CompilationUnit> {
    let path = path.as_ref();
    log::debug!("parsing {}", path.display());
    let source = fs::read_to_string(path)?;
    parse_compilation_unit(&source)
}

fn warn_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        log::warn!("{diagnostic}");
    }
}
