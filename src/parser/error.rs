//! Error handling for recognition.
use std::fmt;

use thiserror::Error;

use crate::lexer::tokens::Token;

/// A recognition failure, indicating both the grammar stage in which the failure was
/// encountered and the token that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ParseError<'s> {
    stage: Stage,
    reason: Reason<'s>,
}

impl<'s> ParseError<'s> {
    pub fn new(stage: Stage, reason: Reason<'s>) -> Self {
        Self { stage, reason }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn reason(&self) -> &Reason<'s> {
        &self.reason
    }

    /// The lexeme the recognizer stopped at, if it did not run out of tokens.
    pub fn lexeme(&self) -> Option<&'s str> {
        match self.reason {
            Reason::UnexpectedToken(token) => Some(token.lexeme),
            Reason::UnexpectedEndOfInput => None,
        }
    }

    pub fn describe(&self) -> String {
        format!("{} when parsing {}", self.reason(), self.stage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason<'s> {
    #[error("syntax error at `{}`", .0.lexeme)]
    UnexpectedToken(Token<'s>),
    #[error("syntax error at end of input")]
    UnexpectedEndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A literal, identifier, or parenthesised expression.
    Term,
    /// The closing parenthesis of a parenthesised expression.
    ParenExprEnd,
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Stage::Term => "a term",
            Stage::ParenExprEnd => "the end of a parenthesised expression",
        })
    }
}

pub trait AddStage {
    type Annotated;

    fn add_stage(self, stage: Stage) -> Self::Annotated;
}

impl<'s, O> AddStage for Result<O, Reason<'s>> {
    type Annotated = Result<O, ParseError<'s>>;

    fn add_stage(self, stage: Stage) -> Self::Annotated {
        self.map_err(|reason| ParseError { stage, reason })
    }
}

pub fn failure<'s, R>(stage: Stage, reason: Reason<'s>) -> Result<R, ParseError<'s>> {
    Err(ParseError::new(stage, reason))
}
