// ============================================================================
// Arithmetic Operations
// Pure floating-point functions over two operands or a sequence of operands
// ============================================================================

use super::errors::{CalcError, CalcResult, InvalidArgument};

/// Adds two numbers.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Sums all values in order. An empty slice sums to `0`.
#[inline]
pub fn add_many(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Subtracts `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Left-fold subtraction: `values[0] - values[1] - ... - values[n-1]`.
///
/// # Errors
/// Returns `InvalidArgument::EmptySequence` if `values` is empty.
pub fn subtract_many(values: &[f64]) -> CalcResult<f64> {
    let (first, rest) = values.split_first().ok_or_else(|| {
        tracing::debug!("subtract_many called with an empty sequence");
        CalcError::from(InvalidArgument::EmptySequence)
    })?;

    Ok(rest.iter().fold(*first, |acc, v| acc - v))
}

/// Multiplies two numbers.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` carrying both operands if `b` is zero
/// (positive or negative).
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        tracing::debug!(dividend = a, divisor = b, "division by zero rejected");
        return Err(CalcError::DivisionByZero {
            dividend: a,
            divisor: b,
        });
    }
    Ok(a / b)
}

/// Principal square root.
///
/// `NaN` is passed through unchanged, like the other operations.
///
/// # Errors
/// Returns `InvalidArgument::NegativeSqrt` if `x < 0`.
pub fn sqrt(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        tracing::debug!(input = x, "square root of a negative number rejected");
        return Err(InvalidArgument::NegativeSqrt(x).into());
    }
    Ok(x.sqrt())
}

// ============================================================================
// Tests
// ============================================================================
