use std::{fmt, io, num::ParseFloatError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected character {ch:?} at offset {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("invalid number literal {literal:?}")]
    InvalidNumber {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("malformed expression: {0}")]
    MalformedExpression(Malformed),

    #[error("division by zero")]
    DivisionByZero,

    #[error("limit is not an indeterminate form 0/0 or inf/inf (f = {f}, g = {g}), L'Hopital's rule does not apply")]
    NotIndeterminate { f: f64, g: f64 },

    #[error("fraction has a zero denominator")]
    ZeroDenominator,

    #[error("cannot convert non-finite value {0} to a fraction")]
    NonFinite(f64),

    #[error("value {0} is too large to convert to a fraction")]
    FractionOverflow(f64),

    #[error("invalid limit target {0:?}, expected a number or \"inf\"")]
    InvalidTarget(String),

    #[error("missing input: {0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Ways an expression can be structurally broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    Empty,
    MissingOperand,
    UnmatchedLeftParen,
    UnmatchedRightParen,
    DanglingOperand,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Malformed::Empty => "empty expression",
            Malformed::MissingOperand => "operator is missing an operand",
            Malformed::UnmatchedLeftParen => "unmatched '('",
            Malformed::UnmatchedRightParen => "unmatched ')'",
            Malformed::DanglingOperand => "operand without an operator",
        };
        f.write_str(reason)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
