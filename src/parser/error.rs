use thiserror::Error;

use crate::parser::span::Location;

/// Errors produced while parsing a token stream.
///
/// Parsing is all-or-nothing: the first syntax error aborts the parse and
/// is returned to the caller, carrying the location of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found '{found}' at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String, location: Location },

    #[error("{message} at {location}")]
    InvalidSyntax { message: String, location: Location },
}

impl ParseError {
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. }
            | ParseError::InvalidSyntax { location, .. } => *location,
        }
    }
}

/// A recoverable lexical problem: a character no token rule matches.
///
/// The lexer skips the character, records one of these, and keeps going, so
/// a single stray byte does not hide later, more interesting errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub character: char,
    pub location: Location,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected character '{}' at {}",
            self.character, self.location
        )
    }
}
