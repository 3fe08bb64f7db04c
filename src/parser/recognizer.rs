//! Accepts or rejects a token stream against the expression grammar:
//!
//! ```text
//! expression := term ( OPERATOR term )*
//! term       := INT | FLOAT | IDENTIFIER | STRING
//!             | "(" expression ")"
//! ```
//!
//! Every operator, `)` included, is taken as a binary operator between terms.
use log::{debug, trace};

use super::{error::*, parser_base::*};
use crate::lexer::tokens::*;

/// Recognises a single expression at the start of `tokens`. Comments are ignored, and
/// anything after the expression is left unexamined.
pub fn parse<'s>(tokens: &[Token<'s>]) -> Result<(), ParseError<'s>> {
    let mut parser = Parser::new(tokens);

    match expression(&mut parser) {
        Ok(()) => {
            debug!("Accepted {} tokens", tokens.len());
            Ok(())
        }
        Err(err) => {
            debug!("Rejected: {}", err.describe());
            Err(err)
        }
    }
}

fn expression<'s>(parser: &mut Parser<'_, 's>) -> Result<(), ParseError<'s>> {
    term(parser)?;

    while let Some(op) = parser.recognise(TokenKind::Operator) {
        trace!("Operator: {}", op.lexeme);
        term(parser)?;
    }

    Ok(())
}

fn term<'s>(parser: &mut Parser<'_, 's>) -> Result<(), ParseError<'s>> {
    let token = parser.next().add_stage(Stage::Term)?;

    match token.kind {
        TokenKind::Int | TokenKind::Float | TokenKind::Identifier | TokenKind::String => {
            trace!("Term: {}", token.lexeme);
            Ok(())
        }
        TokenKind::Operator if token.lexeme == "(" => {
            trace!("Open parenthesis");
            expression(parser)?;
            parser
                .expect_operator(")")
                .add_stage(Stage::ParenExprEnd)?;
            trace!("Close parenthesis");
            Ok(())
        }
        _ => failure(Stage::Term, Reason::UnexpectedToken(token)),
    }
}
