use std::{borrow::Cow, fmt};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    rest: &'a str,
    failed: bool,
}

/// Literal and variable text borrows from the source unless whitespace
/// had to be removed from inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Number(Cow<'a, str>),
    Variable(Cow<'a, str>),
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            rest: source,
            failed: false,
        }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    /// Splits off the longest prefix whose characters all satisfy `pred`,
    /// stepping over whitespace inside it, so `1 2` is the literal `12`.
    fn split_run(&mut self, pred: impl Fn(char) -> bool) -> Cow<'a, str> {
        let len = self
            .rest
            .find(|c: char| !pred(c) && !c.is_whitespace())
            .unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(len);
        self.rest = rest;

        let taken = taken.trim_end();
        if taken.contains(char::is_whitespace) {
            Cow::Owned(taken.chars().filter(|c| !c.is_whitespace()).collect())
        } else {
            Cow::Borrowed(taken)
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Result<Token<'a>>> {
        if self.failed {
            return None;
        }

        self.rest = self.rest.trim_start();
        let next = self.rest.chars().next()?;

        // Literals are only checked for well-formedness by the evaluator.
        if next.is_ascii_digit() {
            let literal = self.split_run(|c| c.is_ascii_digit() || c == '.');
            return Some(Ok(Token::Number(literal)));
        }
        if next.is_alphabetic() {
            let name = self.split_run(char::is_alphabetic);
            return Some(Ok(Token::Variable(name)));
        }

        let token = match next {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '^' => Token::Power,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ch => {
                self.failed = true;
                return Some(Err(Error::UnexpectedChar {
                    ch,
                    position: self.offset(),
                }));
            }
        };
        self.rest = &self.rest[next.len_utf8()..];
        Some(Ok(token))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => write!(f, "{literal}"),
            Token::Variable(name) => write!(f, "{name}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Multiply => write!(f, "*"),
            Token::Divide => write!(f, "/"),
            Token::Power => write!(f, "^"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}
