use crate::error::{Error, Malformed, Result};

use super::scanner::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Pow => 3,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Add | BinaryOp::Sub => 1,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        let value = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => {
                if rhs.abs() < f64::EPSILON {
                    return Err(Error::DivisionByZero);
                }
                lhs / rhs
            }
            BinaryOp::Pow => lhs.powf(rhs),
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(BinaryOp),
    LeftParen,
}

#[derive(Debug, Default)]
struct Stacks {
    values: Vec<f64>,
    pending: Vec<Pending>,
}

impl Stacks {
    /// Pops `rhs` then `lhs` and pushes `lhs op rhs`.
    fn reduce(&mut self, op: BinaryOp) -> Result<()> {
        let rhs = self.pop_value()?;
        let lhs = self.pop_value()?;
        self.values.push(op.apply(lhs, rhs)?);
        Ok(())
    }

    /// Reduces every pending operator that binds at least as tightly as
    /// `incoming`, then queues `incoming`.
    fn push_operator(&mut self, incoming: BinaryOp) -> Result<()> {
        while let Some(&Pending::Op(top)) = self.pending.last() {
            if top.precedence() < incoming.precedence() {
                break;
            }
            self.pending.pop();
            self.reduce(top)?;
        }
        self.pending.push(Pending::Op(incoming));
        Ok(())
    }

    fn pop_value(&mut self) -> Result<f64> {
        self.values
            .pop()
            .ok_or(Error::MalformedExpression(Malformed::MissingOperand))
    }
}

/// Evaluates an infix token sequence with every variable bound to `x`.
///
/// Operators of equal precedence, `^` included, associate to the left, so
/// `2^3^2` is `(2^3)^2`.
pub fn evaluate(tokens: &[Token], x: f64) -> Result<f64> {
    if tokens.is_empty() {
        return Err(Error::MalformedExpression(Malformed::Empty));
    }

    let mut stacks = Stacks::default();
    for token in tokens {
        match token {
            Token::Number(literal) => {
                let value = literal.parse::<f64>().map_err(|source| Error::InvalidNumber {
                    literal: literal.to_string(),
                    source,
                })?;
                stacks.values.push(value);
            }
            Token::Variable(_) => stacks.values.push(x),
            Token::LeftParen => stacks.pending.push(Pending::LeftParen),
            Token::RightParen => loop {
                match stacks.pending.pop() {
                    Some(Pending::Op(op)) => stacks.reduce(op)?,
                    Some(Pending::LeftParen) => break,
                    None => {
                        return Err(Error::MalformedExpression(
                            Malformed::UnmatchedRightParen,
                        ))
                    }
                }
            },
            Token::Plus => stacks.push_operator(BinaryOp::Add)?,
            Token::Minus => stacks.push_operator(BinaryOp::Sub)?,
            Token::Multiply => stacks.push_operator(BinaryOp::Mul)?,
            Token::Divide => stacks.push_operator(BinaryOp::Div)?,
            Token::Power => stacks.push_operator(BinaryOp::Pow)?,
        }
    }

    while let Some(pending) = stacks.pending.pop() {
        match pending {
            Pending::Op(op) => stacks.reduce(op)?,
            Pending::LeftParen => {
                return Err(Error::MalformedExpression(Malformed::UnmatchedLeftParen))
            }
        }
    }

    let result = stacks.pop_value()?;
    if !stacks.values.is_empty() {
        return Err(Error::MalformedExpression(Malformed::DanglingOperand));
    }
    Ok(result)
}
