// ============================================================================
// Calculator Errors
// Error types for arithmetic operations and expression parsing
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while computing or evaluating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Attempted division by zero. Both operands are kept for diagnostics.
    DivisionByZero { dividend: f64, divisor: f64 },
    /// An operand or argument is outside the operation's domain
    InvalidArgument(InvalidArgument),
    /// Expression string does not have the `<number> <operator> <number>` shape
    Parse(ParseError),
}

/// Reasons an argument is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidArgument {
    /// Square root of a negative number has no real result
    NegativeSqrt(f64),
    /// Left-fold subtraction needs an initial element
    EmptySequence,
    /// Evaluator configuration failed validation
    InvalidConfig(String),
}

/// Reasons an expression string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseError {
    /// Input is empty or whitespace only
    Empty,
    /// Input did not split into exactly three tokens
    TokenCount(usize),
    /// Operand token is not a floating-point number
    InvalidNumber(String),
    /// Operand parsed to infinity or NaN while finite operands are required
    NonFiniteNumber(String),
    /// Middle token is not one of `+ - * /`
    UnknownOperator(String),
    /// Input exceeds the configured maximum length (in bytes)
    TooLong { len: usize, max: usize },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero { dividend, divisor } => write!(
                f,
                "bad input: {}, {} (division by zero is undefined)",
                dividend, divisor
            ),
            CalcError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            CalcError::Parse(reason) => write!(f, "parse error: {}", reason),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeSqrt(x) => write!(
                f,
                "{} (no real number squared equals a negative)",
                x
            ),
            InvalidArgument::EmptySequence => {
                write!(f, "empty sequence (subtraction needs an initial value)")
            },
            InvalidArgument::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty expression"),
            ParseError::TokenCount(n) => write!(
                f,
                "expected `<number> <operator> <number>`, found {} token(s)",
                n
            ),
            ParseError::InvalidNumber(tok) => write!(f, "invalid number `{}`", tok),
            ParseError::NonFiniteNumber(tok) => write!(f, "non-finite number `{}`", tok),
            ParseError::UnknownOperator(tok) => {
                write!(f, "unknown operator `{}` (expected one of + - * /)", tok)
            },
            ParseError::TooLong { len, max } => {
                write!(f, "expression is {} bytes long, limit is {}", len, max)
            },
        }
    }
}

impl std::error::Error for CalcError {}

impl From<InvalidArgument> for CalcError {
    fn from(reason: InvalidArgument) -> Self {
        CalcError::InvalidArgument(reason)
    }
}

impl From<ParseError> for CalcError {
    fn from(reason: ParseError) -> Self {
        CalcError::Parse(reason)
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
