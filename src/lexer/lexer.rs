//! Single-pass scanner turning a source string into a [`Token`] stream.
use log::{debug, trace};

use crate::span::*;

use super::{char_ext::*, char_lexer::*, error::*, keywords, tokens::*};

/// Options that change how words are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Treat `print` as a keyword on top of the Python reserved words.
    pub print_is_keyword: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            print_is_keyword: true,
        }
    }
}

/// The result of a scan: the tokens, plus whatever the scanner had to skip.
#[derive(Debug, Clone, Default)]
pub struct Scan<'s> {
    pub tokens: Vec<Token<'s>>,
    pub errors: Vec<LexError>,
}

/// Scans `source` with the default [`ScannerConfig`]. Never fails: malformed
/// input is skipped silently.
pub fn scan(source: &str) -> Vec<Token<'_>> {
    scan_with(source, &ScannerConfig::default())
}

pub fn scan_with<'s>(source: &'s str, config: &ScannerConfig) -> Vec<Token<'s>> {
    scan_with_diagnostics(source, config).tokens
}

/// Scans `source`, additionally reporting every unterminated literal and
/// skipped character. The tokens are the same ones [`scan_with`] returns.
pub fn scan_with_diagnostics<'s>(source: &'s str, config: &ScannerConfig) -> Scan<'s> {
    Lexer::new(source, *config).run()
}

struct Lexer<'s> {
    source: &'s str,
    lexer: CharLexer<'s>,
    config: ScannerConfig,
    tokens: Vec<Token<'s>>,
    errors: Vec<LexError>,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str, config: ScannerConfig) -> Self {
        Self {
            source,
            lexer: CharLexer::new(source),
            config,
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Consumes the whole input. Every iteration advances by at least one character.
    fn run(mut self) -> Scan<'s> {
        while let Some(ch) = self.lexer.peek() {
            let start = self.lexer.byte_position();

            if ch.is_ascii_digit() {
                self.number(start);
            } else if ch.is_identifier_start() {
                self.identifier_or_keyword(start);
            } else if ch == '"' {
                self.string(start);
            } else if ch == '/' {
                self.slash(start);
            } else if ch.is_operator_class() {
                self.operator(ch, start);
            } else {
                self.lexer.try_next();
                if !ch.is_whitespace() {
                    self.report(start, ErrorType::UnknownCharacter);
                }
            }
        }

        debug!(
            "Scanned {} tokens ({} diagnostics)",
            self.tokens.len(),
            self.errors.len()
        );

        Scan {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Digits, optionally followed by a single `.` and more digits.
    /// A trailing `.` without digits still makes a float.
    fn number(&mut self, start: Bytes) {
        self.lexer.consume_while(char::is_ascii_digit);

        if self.lexer.recognise('.') {
            self.lexer.consume_while(char::is_ascii_digit);
            self.emit(TokenKind::Float, start);
        } else {
            self.emit(TokenKind::Int, start);
        }
    }

    fn identifier_or_keyword(&mut self, start: Bytes) {
        self.lexer.consume_while(CharExt::is_identifier_continue);

        let word = self.lexeme_from(start);
        let kind = if keywords::is_keyword(word)
            || (self.config.print_is_keyword && word == keywords::PRINT)
        {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.emit(kind, start);
    }

    /// Backslash escapes the next character without interpreting it.
    /// An unterminated string produces no token.
    fn string(&mut self, start: Bytes) {
        self.lexer.recognise('"');

        loop {
            match self.lexer.try_next() {
                None => {
                    self.report(start, ErrorType::UnterminatedString);
                    return;
                }
                Some('\\') => {
                    self.lexer.try_next();
                }
                Some('"') => break,
                Some(_) => {}
            }
        }

        self.emit(TokenKind::String, start);
    }

    fn slash(&mut self, start: Bytes) {
        match self.lexer.peek_second() {
            Some('/') => self.line_comment(start),
            Some('*') => self.block_comment(start),
            _ => self.operator('/', start),
        }
    }

    /// Runs up to, but not including, the next `\n`.
    fn line_comment(&mut self, start: Bytes) {
        self.lexer.consume_while(|&ch| ch != '\n');
        self.emit(TokenKind::Comment, start);
    }

    /// Runs through the closing `*/`. An unclosed comment produces no token.
    fn block_comment(&mut self, start: Bytes) {
        self.lexer.recognise('/');
        self.lexer.recognise('*');

        loop {
            match self.lexer.try_next() {
                None => {
                    self.report(start, ErrorType::UnterminatedComment);
                    return;
                }
                Some('*') if self.lexer.recognise('/') => break,
                Some(_) => {}
            }
        }

        self.emit(TokenKind::Comment, start);
    }

    /// Maximal munch, bounded to two characters. Operator-class characters
    /// that form no operator are skipped.
    fn operator(&mut self, first: char, start: Bytes) {
        self.lexer.try_next();

        match self.lexer.peek() {
            Some(second) if is_two_char_operator(first, second) => {
                self.lexer.try_next();
                self.emit(TokenKind::Operator, start);
            }
            _ if first.is_single_char_operator() => self.emit(TokenKind::Operator, start),
            _ => self.report(start, ErrorType::UnknownCharacter),
        }
    }

    fn lexeme_from(&self, start: Bytes) -> &'s str {
        Span::new(start, self.lexer.byte_position()).lookup(self.source)
    }

    /// Emits a token spanning from `start` to the current position.
    fn emit(&mut self, kind: TokenKind, start: Bytes) {
        let token = Token::new(kind, self.lexeme_from(start));
        trace!("{token}");
        self.tokens.push(token);
    }

    /// Records a diagnostic spanning from `start` to the current position.
    fn report(&mut self, start: Bytes, error_type: ErrorType) {
        let error = LexError {
            range: Span::new(start, self.lexer.byte_position()),
            error_type,
        };
        debug!("{error}");
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_tokens(expected: &[(TokenKind, &str)], actual: &[Token]) {
        let actual_pairs: Vec<(TokenKind, &str)> =
            actual.iter().map(|t| (t.kind, t.lexeme)).collect();

        for (idx, (pair, token)) in expected.iter().zip(actual_pairs.iter()).enumerate() {
            assert_eq!(
                pair, token,
                "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected token #{} to be {:?}, but was {:?}",
                expected, actual_pairs, idx, pair, token
            );
        }
        assert_eq!(
            expected.len(),
            actual.len(),
            "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected to find {} tokens, but found {}",
            expected,
            actual_pairs,
            expected.len(),
            actual.len()
        );
    }

    fn assert_scans(source: &str, expected: &[(TokenKind, &str)]) {
        expect_tokens(expected, &scan(source));
    }

    fn assert_token_scans(source: &str, kind: TokenKind) {
        assert_scans(source, &[(kind, source)]);
    }

    fn diagnostics(source: &str) -> Vec<ErrorType> {
        scan_with_diagnostics(source, &ScannerConfig::default())
            .errors
            .iter()
            .map(|e| e.error_type)
            .collect()
    }

    use TokenKind::*;

    #[test]
    fn assignment_without_whitespace() {
        assert_scans("x=5", &[(Identifier, "x"), (Operator, "="), (Int, "5")]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_scans("", &[]);
        assert_scans(" \t\r\n ", &[]);
    }

    #[test]
    fn string_keeps_its_quotes() {
        assert_token_scans(r#""David""#, String);
    }

    #[test]
    fn string_keeps_escapes_verbatim() {
        assert_token_scans(r#""A \"quoted\" word""#, String);
        assert_token_scans(r#""C:\\dir\\""#, String);
        assert_token_scans(r#""one\ntwo""#, String);
    }

    #[test]
    fn string_may_span_lines() {
        assert_token_scans("\"one\ntwo\"", String);
    }

    #[test]
    fn unterminated_string_is_dropped() {
        assert_scans(r#""unterminated"#, &[]);
        assert_eq!(
            vec![ErrorType::UnterminatedString],
            diagnostics(r#""unterminated"#)
        );
    }

    #[test]
    fn string_ending_in_escaped_quote_is_unterminated() {
        assert_scans(r#"x "abc\""#, &[(Identifier, "x")]);
        assert_scans(r#""abc\"#, &[]);
    }

    #[test]
    fn float_and_identifier() {
        assert_scans(
            "3.14 + foo",
            &[(Float, "3.14"), (Operator, "+"), (Identifier, "foo")],
        );
    }

    #[test]
    fn trailing_dot_is_a_float() {
        assert_scans("1.", &[(Float, "1.")]);
        assert_scans("1. + 2", &[(Float, "1."), (Operator, "+"), (Int, "2")]);
    }

    #[test]
    fn only_the_first_dot_belongs_to_a_number() {
        assert_scans("1.2.3", &[(Float, "1.2"), (Int, "3")]);
        assert_scans("1..2", &[(Float, "1."), (Int, "2")]);
    }

    #[test]
    fn leading_minus_is_an_operator() {
        assert_scans("-7", &[(Operator, "-"), (Int, "7")]);
    }

    #[test]
    fn digits_then_letters_split() {
        assert_scans("12ab", &[(Int, "12"), (Identifier, "ab")]);
    }

    #[test]
    fn identifiers_may_contain_digits_and_underscores() {
        assert_token_scans("snake_case_2", Identifier);
        assert_token_scans("CamelCase", Identifier);
    }

    #[test]
    fn identifiers_may_not_start_with_underscore() {
        assert_scans("_hidden", &[(Identifier, "hidden")]);
        assert_eq!(vec![ErrorType::UnknownCharacter], diagnostics("_hidden"));
    }

    #[test]
    fn non_ascii_letters_are_skipped() {
        assert_scans("é x", &[(Identifier, "x")]);
        assert_scans("aé", &[(Identifier, "a")]);
    }

    #[test]
    fn keywords() {
        assert_scans("return 42", &[(Keyword, "return"), (Int, "42")]);
        for word in keywords::KEYWORDS {
            assert_token_scans(word, Keyword);
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_token_scans("none", Identifier);
        assert_token_scans("None", Keyword);
    }

    #[test]
    fn keyword_prefixes_are_identifiers() {
        assert_token_scans("iffy", Identifier);
        assert_token_scans("returned", Identifier);
        assert_token_scans("in_", Identifier);
    }

    #[test]
    fn print_is_a_keyword_by_default() {
        assert_token_scans("print", Keyword);
    }

    #[test]
    fn print_can_be_an_identifier() {
        let config = ScannerConfig {
            print_is_keyword: false,
        };
        expect_tokens(&[(Identifier, "print")], &scan_with("print", &config));
        expect_tokens(&[(Keyword, "pass")], &scan_with("pass", &config));
    }

    #[test]
    fn word_operators_are_keywords() {
        assert_scans(
            "a and not b or c is d in e",
            &[
                (Identifier, "a"),
                (Keyword, "and"),
                (Keyword, "not"),
                (Identifier, "b"),
                (Keyword, "or"),
                (Identifier, "c"),
                (Keyword, "is"),
                (Identifier, "d"),
                (Keyword, "in"),
                (Identifier, "e"),
            ],
        );
    }

    #[test]
    fn two_char_operators_are_single_tokens() {
        assert_scans("a == b", &[(Identifier, "a"), (Operator, "=="), (Identifier, "b")]);
        assert_scans("a <= b", &[(Identifier, "a"), (Operator, "<="), (Identifier, "b")]);
        for op in [
            "==", "!=", "<=", ">=", "<<", ">>", "**", "+=", "-=", "*=", "/=", "%=", "&=", "|=",
            "^=",
        ] {
            assert_token_scans(op, Operator);
        }
    }

    #[test]
    fn single_char_operators() {
        for op in ["+", "-", "*", "/", "%", "&", "|", "^", "~", "<", ">", "="] {
            assert_token_scans(op, Operator);
        }
    }

    #[test]
    fn shift_assignment_is_two_tokens() {
        assert_scans(
            "a <<= b",
            &[
                (Identifier, "a"),
                (Operator, "<<"),
                (Operator, "="),
                (Identifier, "b"),
            ],
        );
        assert_scans("a>>=b", &[(Identifier, "a"), (Operator, ">>"), (Operator, "="), (Identifier, "b")]);
    }

    #[test]
    fn longest_operator_wins_left_to_right() {
        assert_scans("===", &[(Operator, "=="), (Operator, "=")]);
        assert_scans("***", &[(Operator, "**"), (Operator, "*")]);
        assert_scans("<>", &[(Operator, "<"), (Operator, ">")]);
    }

    #[test]
    fn bang_alone_is_skipped() {
        assert_scans("!x", &[(Identifier, "x")]);
        assert_scans("x != y", &[(Identifier, "x"), (Operator, "!="), (Identifier, "y")]);
    }

    #[test]
    fn punctuation_is_skipped() {
        assert_scans(
            "f(a, b[0]);",
            &[(Identifier, "f"), (Identifier, "a"), (Identifier, "b"), (Int, "0")],
        );
        assert_eq!(6, diagnostics("f(a, b[0]);").len());
    }

    #[test]
    fn hash_is_not_a_comment() {
        assert_scans("# note", &[(Identifier, "note")]);
    }

    #[test]
    fn lone_slash_is_an_operator() {
        assert_scans("a / b", &[(Identifier, "a"), (Operator, "/"), (Identifier, "b")]);
        assert_scans("/", &[(Operator, "/")]);
    }

    #[test]
    fn slash_assign_is_one_operator() {
        assert_scans("a /= 2", &[(Identifier, "a"), (Operator, "/="), (Int, "2")]);
    }

    #[test]
    fn line_comment_stops_before_newline() {
        assert_scans("// hello\nx", &[(Comment, "// hello"), (Identifier, "x")]);
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_scans("x // trailing", &[(Identifier, "x"), (Comment, "// trailing")]);
        assert_scans("//", &[(Comment, "//")]);
    }

    #[test]
    fn block_comment_is_inclusive() {
        assert_scans("/* a */ 1", &[(Comment, "/* a */"), (Int, "1")]);
        assert_scans("/**/", &[(Comment, "/**/")]);
        assert_scans("/***/x", &[(Comment, "/***/"), (Identifier, "x")]);
    }

    #[test]
    fn block_comment_may_span_lines() {
        assert_scans("/* one\ntwo */", &[(Comment, "/* one\ntwo */")]);
    }

    #[test]
    fn unclosed_block_comment_is_dropped() {
        assert_scans("1 /* never closed", &[(Int, "1")]);
        assert_scans("/*/", &[]);
        assert_eq!(vec![ErrorType::UnterminatedComment], diagnostics("/* x"));
    }

    #[test]
    fn comment_markers_inside_strings() {
        assert_token_scans(r#""// not a comment""#, String);
        assert_token_scans(r#""/* nor this */""#, String);
    }

    #[test]
    fn diagnostics_do_not_change_tokens() {
        let source = "x = \"a\" + (y // c\n/* d";
        let scanned = scan_with_diagnostics(source, &ScannerConfig::default());
        assert_eq!(scan(source), scanned.tokens);
        assert_eq!(
            vec![ErrorType::UnknownCharacter, ErrorType::UnterminatedComment],
            scanned
                .errors
                .iter()
                .map(|e| e.error_type)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn diagnostics_point_at_the_source() {
        let source = "ok \"open";
        let scanned = scan_with_diagnostics(source, &ScannerConfig::default());
        let error = scanned.errors[0];
        assert_eq!("\"open", error.range.lookup(source));
        assert_eq!(Bytes::new(5), error.length());
    }

    #[test]
    fn small_program() {
        assert_scans(
            "def f(x):\n    return x ** 2 // square\n",
            &[
                (Keyword, "def"),
                (Identifier, "f"),
                (Identifier, "x"),
                (Keyword, "return"),
                (Identifier, "x"),
                (Operator, "**"),
                (Int, "2"),
                (Comment, "// square"),
            ],
        );
    }
}
