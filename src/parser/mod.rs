//! Checks that a token stream forms an operator-separated chain of terms.
mod error;
mod parser_base;
mod recognizer;

pub use error::{ParseError, Reason, Stage};
pub use recognizer::parse;
