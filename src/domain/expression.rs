// ============================================================================
// Expression
// Parsed form of a "<number> <operator> <number>" string
// ============================================================================

use super::config::EvaluatorConfig;
use super::operator::Operator;
use crate::numeric::{CalcResult, ParseError};
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of tokens in a well-formed expression
const EXPRESSION_TOKENS: usize = 3;

/// A two-operand, one-operator expression
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
}

impl Expression {
    pub fn new(lhs: f64, operator: Operator, rhs: f64) -> Self {
        Self { lhs, operator, rhs }
    }

    /// Parse an expression string under the given limits.
    ///
    /// Tokens are separated by one or more whitespace characters; leading and
    /// trailing whitespace is ignored.
    ///
    /// # Errors
    /// - `TooLong` if the input exceeds `config.max_input_len`
    /// - `Empty` if the input holds no tokens
    /// - `TokenCount` if it does not hold exactly three tokens
    /// - `InvalidNumber` / `NonFiniteNumber` for a bad operand
    /// - `UnknownOperator` for a middle token other than `+ - * /`
    pub fn parse_with(input: &str, config: &EvaluatorConfig) -> Result<Self, ParseError> {
        if let Some(max) = config.max_input_len {
            if input.len() > max {
                return Err(ParseError::TooLong {
                    len: input.len(),
                    max,
                });
            }
        }

        let tokens = tokenize(input)?;
        let (lhs, op, rhs) = (tokens[0], tokens[1], tokens[2]);

        let lhs = parse_operand(lhs, config)?;
        let operator = op.parse::<Operator>()?;
        let rhs = parse_operand(rhs, config)?;

        Ok(Self::new(lhs, operator, rhs))
    }

    /// Compute the value of the expression.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `x / 0`.
    #[inline]
    pub fn evaluate(&self) -> CalcResult<f64> {
        self.operator.apply(self.lhs, self.rhs)
    }
}

/// Split on whitespace into exactly three tokens.
fn tokenize(input: &str) -> Result<ArrayVec<&str, EXPRESSION_TOKENS>, ParseError> {
    let mut tokens = ArrayVec::new();
    let mut count = 0usize;

    for token in input.split_whitespace() {
        if !tokens.is_full() {
            tokens.push(token);
        }
        count += 1;
    }

    match count {
        0 => Err(ParseError::Empty),
        EXPRESSION_TOKENS => Ok(tokens),
        n => Err(ParseError::TokenCount(n)),
    }
}

fn parse_operand(token: &str, config: &EvaluatorConfig) -> Result<f64, ParseError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))?;

    if config.finite_only && !value.is_finite() {
        return Err(ParseError::NonFiniteNumber(token.to_string()));
    }
    Ok(value)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &EvaluatorConfig::default())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}
