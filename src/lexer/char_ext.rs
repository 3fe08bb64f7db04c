//! Character classes used by the scanner.
pub trait CharExt {
    /// Characters that route to operator scanning. Only some of them form
    /// operator tokens; the rest are skipped.
    fn is_operator_class(&self) -> bool;

    fn is_single_char_operator(&self) -> bool;

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continue(&self) -> bool;
}
impl CharExt for char {
    fn is_operator_class(&self) -> bool {
        matches!(
            self,
            '+' | '-'
                | '*'
                | '/'
                | '%'
                | '&'
                | '|'
                | '^'
                | '~'
                | '<'
                | '>'
                | '='
                | '!'
                | ':'
                | '?'
                | '.'
                | ','
                | ';'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '@'
                | '#'
                | '`'
        )
    }

    fn is_single_char_operator(&self) -> bool {
        matches!(
            self,
            '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' | '<' | '>' | '='
        )
    }

    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn is_identifier_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}

/// Returns `true` if `first` and `second` together spell a two-character operator.
pub fn is_two_char_operator(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('=', '=')
            | ('!', '=')
            | ('<', '=')
            | ('>', '=')
            | ('/', '/')
            | ('<', '<')
            | ('>', '>')
            | ('*', '*')
            | ('+', '=')
            | ('-', '=')
            | ('*', '=')
            | ('/', '=')
            | ('%', '=')
            | ('&', '=')
            | ('|', '=')
            | ('^', '=')
    )
}
