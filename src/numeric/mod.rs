// ============================================================================
// Numeric Module
// Floating-point arithmetic operations and the crate error taxonomy
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide/sqrt over f64 operands
// - add_many/subtract_many over ordered slices
// - CalcError: error type shared by every fallible operation
//
// Design principles:
// - Pure functions, no shared state
// - Domain violations return Result (no panics)
// - IEEE semantics for everything else (overflow to inf, NaN propagation)

mod errors;
mod operations;

pub use errors::{CalcError, CalcResult, InvalidArgument, ParseError};
pub use operations::{add, add_many, divide, multiply, sqrt, subtract, subtract_many};
