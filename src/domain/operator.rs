// ============================================================================
// Operator
// Binary arithmetic operators accepted by the expression evaluator
// ============================================================================

use crate::numeric::{self, CalcResult, ParseError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator of a two-operand expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Every supported operator, in symbol order `+ - * /`
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The textual symbol of this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `Divide` with a zero right operand.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(numeric::add(lhs, rhs)),
            Operator::Subtract => Ok(numeric::subtract(lhs, rhs)),
            Operator::Multiply => Ok(numeric::multiply(lhs, rhs)),
            Operator::Divide => numeric::divide(lhs, rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    /// Parse a single operator token. Surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(ParseError::UnknownOperator(other.to_string())),
        }
    }
}
