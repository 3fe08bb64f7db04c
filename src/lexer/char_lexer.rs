use std::{iter::Peekable, str::Chars};

use crate::span::Bytes;

/// Abstraction over a peekable char iterator with position information.
///
/// Since it only holds an iterator and a position, this type is very
/// lightweight, making it easy to clone in order to handle branching
/// and two-character lookahead.
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Returns the character after the next one without consuming anything.
    pub fn peek_second(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next()
    }

    /// Retrieves the byte position of the lexer.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.chars.peek() {
            Some(ch) if ch == &character => {
                self.try_next();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the number of bytes consumed.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> Bytes
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position;
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                self.try_next();
            } else {
                break;
            }
        }
        self.byte_position - start
    }
}
