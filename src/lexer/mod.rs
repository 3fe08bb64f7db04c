//! Functionality for converting a source code string into a [`Token`](tokens::Token) stream.
mod char_ext;
mod char_lexer;
mod error;
mod keywords;
mod lexer;

pub mod tokens;

pub use error::{ErrorType, LexError};
pub use keywords::{is_keyword, KEYWORDS, PRINT};
pub use lexer::*;
