use std::fmt;

use itertools::Itertools;

use crate::error::Result;

use self::scanner::{Scanner, Token};

pub mod evaluator;
pub mod scanner;

/// A tokenized single-variable expression.
///
/// Every letter run names the same variable, so `x*y` is `x^2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Expression<'a> {
    pub fn parse(source: &'a str) -> Result<Self> {
        let tokens = Scanner::new(source).collect::<Result<Vec<_>>>()?;
        Ok(Expression { tokens })
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn eval(&self, x: f64) -> Result<f64> {
        evaluator::evaluate(&self.tokens, x)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}
