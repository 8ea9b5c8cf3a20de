// ============================================================================
// Engine Module
// Expression evaluation entry points
// ============================================================================

mod evaluator;

pub mod factory;

pub use evaluator::{evaluate, evaluate_with, Evaluator};
pub use factory::{create_from_config, EvaluatorBuilder};
