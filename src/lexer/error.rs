//! Diagnostics reported while scanning. These never change the token stream.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated block comment")]
    UnterminatedComment,
    #[error("Unknown character")]
    UnknownCharacter,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub range: Span,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn length(&self) -> Bytes {
        self.range.length()
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.error_type, self.range)
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.range
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}
