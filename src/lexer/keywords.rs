//! The reserved word table.

/// Words that scan as [`TokenKind::Keyword`](super::tokens::TokenKind::Keyword)
/// rather than identifiers, in the order Python documents them.
pub const KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Reserved in addition to [`KEYWORDS`] unless disabled in the scanner configuration.
pub const PRINT: &str = "print";

/// Checks whether `word` is one of the [`KEYWORDS`]. Case-sensitive.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        // Values
        "False"
            | "None"
            | "True"
            // Operators
            | "and"
            | "in"
            | "is"
            | "not"
            | "or"
            // Statements
            | "as"
            | "assert"
            | "async"
            | "await"
            | "break"
            | "class"
            | "continue"
            | "def"
            | "del"
            | "elif"
            | "else"
            | "except"
            | "finally"
            | "for"
            | "from"
            | "global"
            | "if"
            | "import"
            | "lambda"
            | "nonlocal"
            | "pass"
            | "raise"
            | "return"
            | "try"
            | "while"
            | "with"
            | "yield"
    )
}
