//! A scanner for a small Python-flavoured language, and a recogniser for the
//! operator-separated expressions built from its tokens.
pub mod error;
pub mod lexer;
pub mod parser;
pub mod source_map;
pub mod span;

pub use lexer::{scan, tokens::Token, tokens::TokenKind};
pub use parser::parse;
