use thiserror::Error;

use crate::parser::error::ParseError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let location = err.location();
        Error::Parse {
            line: location.line,
            column: location.column,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
