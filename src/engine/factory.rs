// ============================================================================
// Evaluator Factory
// Creates evaluators with validated configuration
// ============================================================================

use crate::domain::EvaluatorConfig;
use crate::engine::Evaluator;
use crate::numeric::CalcResult;

/// Creates an evaluator from configuration
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use calculator::engine::factory::create_from_config;
///
/// let evaluator = create_from_config(EvaluatorConfig::strict()).unwrap();
/// assert_eq!(evaluator.evaluate("2 * 2").unwrap(), 4.0);
/// ```
pub fn create_from_config(config: EvaluatorConfig) -> CalcResult<Evaluator> {
    Evaluator::new(config)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating evaluators with fluent API
///
/// # Example
/// ```
/// use calculator::engine::factory::EvaluatorBuilder;
///
/// let evaluator = EvaluatorBuilder::new()
///     .max_input_len(64)
///     .finite_only()
///     .build()
///     .unwrap();
/// assert!(evaluator.evaluate("inf + 1").is_err());
/// ```
#[derive(Debug, Default)]
pub struct EvaluatorBuilder {
    config: EvaluatorConfig,
}

impl EvaluatorBuilder {
    /// Create a new builder with the permissive default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Limit input length in bytes
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.config.max_input_len = Some(max);
        self
    }

    /// Remove the input length limit
    pub fn unlimited_input(mut self) -> Self {
        self.config.max_input_len = None;
        self
    }

    /// Reject infinite and NaN operands
    pub fn finite_only(mut self) -> Self {
        self.config.finite_only = true;
        self
    }

    /// Build the evaluator
    pub fn build(self) -> CalcResult<Evaluator> {
        create_from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let evaluator = create_from_config(EvaluatorConfig::default()).unwrap();
        assert_eq!(evaluator.evaluate("1 + 1.5").unwrap(), 2.5);

        let result = create_from_config(EvaluatorConfig::new().with_max_input_len(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let evaluator = EvaluatorBuilder::new()
            .max_input_len(16)
            .finite_only()
            .build()
            .unwrap();

        let expected = EvaluatorConfig::new()
            .with_max_input_len(16)
            .with_finite_only(true);
        assert_eq!(evaluator.config(), &expected);
    }

    #[test]
    fn test_builder_from_config() {
        let evaluator = EvaluatorBuilder::from_config(EvaluatorConfig::strict())
            .unlimited_input()
            .build()
            .unwrap();

        assert_eq!(evaluator.config().max_input_len, None);
        assert!(evaluator.config().finite_only);
    }

    #[test]
    fn test_builder_rejects_zero_length() {
        assert!(EvaluatorBuilder::new().max_input_len(0).build().is_err());
    }
}
