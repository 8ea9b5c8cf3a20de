// ============================================================================
// Calculator Library
// Floating-point arithmetic and a two-operand expression evaluator
// ============================================================================

//! # Calculator
//!
//! Small arithmetic library over `f64`.
//!
//! ## Features
//!
//! - **Two-operand operations**: `add`, `subtract`, `multiply`, `divide`
//! - **Variadic operations**: `add_many`, `subtract_many` over ordered slices
//! - **Square root** with domain checking
//! - **Expression evaluation** of `"<number> <operator> <number>"` strings
//! - **Explicit errors**: division by zero, invalid arguments and malformed
//!   expressions are returned as [`CalcError`](numeric::CalcError), never panics
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! assert_eq!(add(2.0, 2.0), 4.0);
//! assert_eq!(subtract_many(&[10.0, 3.0, 2.0]).unwrap(), 5.0);
//! assert!(divide(6.0, 0.0).is_err());
//! assert_eq!(sqrt(9.0).unwrap(), 3.0);
//!
//! assert_eq!(evaluate("1 + 1.5").unwrap(), 2.5);
//! assert_eq!(evaluate("18  /   6").unwrap(), 3.0);
//!
//! // Untrusted input
//! let evaluator = Evaluator::new(EvaluatorConfig::strict()).unwrap();
//! assert!(evaluator.evaluate("inf * 2").is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod utils;

pub use engine::{evaluate, evaluate_with};
pub use numeric::{
    add, add_many, divide, multiply, sqrt, subtract, subtract_many, CalcError, CalcResult,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{EvaluatorConfig, Expression, Operator};
    pub use crate::engine::{evaluate, evaluate_with, Evaluator, EvaluatorBuilder};
    pub use crate::numeric::{
        add, add_many, divide, multiply, sqrt, subtract, subtract_many, CalcError, CalcResult,
        InvalidArgument, ParseError,
    };
}
