//! Tokens, as produced by the scanner.
use std::fmt::{self, Display};

/// A classified slice of the source. The lexeme borrows from the scanned input
/// and is never empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub lexeme: &'s str,
}
impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, lexeme: &'s str) -> Self {
        Self { kind, lexeme }
    }

    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}
impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token{{type={}, value='{}'}}", self.kind, self.lexeme)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[0-9]+`
    Int,
    /// `[0-9]+\.[0-9]*`
    Float,
    Identifier,
    /// A reserved word, see [`is_keyword`](super::is_keyword).
    Keyword,
    Operator,
    /// A double-quoted string, quotes and escapes included verbatim.
    String,
    /// A `//` line comment or a `/* */` block comment, delimiters included.
    Comment,
}
impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
