// ============================================================================
// Domain Models Module
// Operators, parsed expressions and evaluator configuration
// ============================================================================

pub mod config;
pub mod expression;
pub mod operator;

pub use config::EvaluatorConfig;
pub use expression::Expression;
pub use operator::Operator;
