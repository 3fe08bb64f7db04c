use super::error::*;
use crate::lexer::tokens::*;

/// A cursor over a token slice that steps over comments.
#[derive(Clone)]
pub struct Parser<'t, 's> {
    tokens: &'t [Token<'s>],
    position: usize,
}

impl<'t, 's> Parser<'t, 's> {
    pub fn new(tokens: &'t [Token<'s>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn skip_comments(&mut self) {
        while let Some(Token {
            kind: TokenKind::Comment,
            ..
        }) = self.tokens.get(self.position)
        {
            self.position += 1;
        }
    }

    pub fn peek(&mut self) -> Option<Token<'s>> {
        self.skip_comments();
        self.tokens.get(self.position).copied()
    }

    pub fn next(&mut self) -> Result<Token<'s>, Reason<'s>> {
        let next = self.peek().ok_or(Reason::UnexpectedEndOfInput)?;
        self.position += 1;
        Ok(next)
    }

    /// Consumes the next token if it has the given kind. Otherwise the parser is not advanced.
    pub fn recognise(&mut self, kind: TokenKind) -> Option<Token<'s>> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Some(token)
            }
            _ => None,
        }
    }

    /// Reads the next token, failing unless it is the operator `lexeme`.
    pub fn expect_operator(&mut self, lexeme: &str) -> Result<Token<'s>, Reason<'s>> {
        let next = self.next()?;

        if next.is(TokenKind::Operator, lexeme) {
            Ok(next)
        } else {
            Err(Reason::UnexpectedToken(next))
        }
    }
}
