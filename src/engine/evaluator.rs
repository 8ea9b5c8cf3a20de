// ============================================================================
// Evaluator
// Parses and computes "<number> <operator> <number>" expression strings
// ============================================================================

use crate::domain::{EvaluatorConfig, Expression};
use crate::numeric::CalcResult;

/// Expression evaluator holding a validated configuration.
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator, validating the configuration first.
    pub fn new(config: EvaluatorConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse an expression string without computing it.
    pub fn parse(&self, input: &str) -> CalcResult<Expression> {
        Expression::parse_with(input, &self.config).map_err(|err| {
            tracing::debug!(input, error = %err, "expression rejected");
            err.into()
        })
    }

    /// Parse and compute an expression string.
    ///
    /// # Errors
    /// - `Parse` if the input is not a well-formed two-operand expression
    /// - `DivisionByZero` for `x / 0`
    pub fn evaluate(&self, input: &str) -> CalcResult<f64> {
        let expr = self.parse(input)?;
        let value = expr.evaluate()?;
        tracing::trace!(%expr, value, "expression evaluated");
        Ok(value)
    }

    /// Get the active configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
}

/// Evaluate an expression string with the default configuration.
///
/// # Example
/// ```
/// assert_eq!(calculator::evaluate("18  /   6").unwrap(), 3.0);
/// assert!(calculator::evaluate("2 % 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> CalcResult<f64> {
    Evaluator::default().evaluate(expression)
}

/// Evaluate an expression string under the given configuration.
///
/// The configuration is validated before parsing.
pub fn evaluate_with(expression: &str, config: &EvaluatorConfig) -> CalcResult<f64> {
    config.validate()?;
    Expression::parse_with(expression, config)
        .map_err(|err| {
            tracing::debug!(input = expression, error = %err, "expression rejected");
            err
        })?
        .evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{CalcError, InvalidArgument, ParseError};

    #[test]
    fn test_evaluate_scenarios() {
        assert_eq!(evaluate("2 * 2").unwrap(), 4.0);
        assert_eq!(evaluate("1 + 1.5").unwrap(), 2.5);
        assert_eq!(evaluate("18  /   6").unwrap(), 3.0);
        assert_eq!(evaluate("5 - 7").unwrap(), -2.0);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(
            evaluate("6 / 0"),
            Err(CalcError::DivisionByZero {
                dividend: 6.0,
                divisor: 0.0
            })
        );
    }

    #[test]
    fn test_evaluate_unknown_operator_is_error() {
        assert_eq!(
            evaluate("2 % 2"),
            Err(CalcError::Parse(ParseError::UnknownOperator("%".to_string())))
        );
    }

    #[test]
    fn test_evaluate_malformed() {
        for input in ["", "2 +", "1 + 2 + 3", "x + 1", "(1 + 2)"] {
            assert!(
                matches!(evaluate(input), Err(CalcError::Parse(_))),
                "input {:?} should fail to parse",
                input
            );
        }
    }

    #[test]
    fn test_evaluator_rejects_invalid_config() {
        let config = EvaluatorConfig::new().with_max_input_len(0);
        assert!(matches!(
            Evaluator::new(config.clone()),
            Err(CalcError::InvalidArgument(InvalidArgument::InvalidConfig(_)))
        ));
        assert!(evaluate_with("1 + 1", &config).is_err());
    }

    #[test]
    fn test_evaluator_with_strict_config() {
        let evaluator = Evaluator::new(EvaluatorConfig::strict()).unwrap();
        assert_eq!(evaluator.evaluate("1e3 * 2").unwrap(), 2000.0);
        assert_eq!(
            evaluator.evaluate("inf - 1"),
            Err(CalcError::Parse(ParseError::NonFiniteNumber(
                "inf".to_string()
            )))
        );

        let long_input = format!("1 + {}", "1".repeat(300));
        assert!(matches!(
            evaluator.evaluate(&long_input),
            Err(CalcError::Parse(ParseError::TooLong { max: 256, .. }))
        ));
    }

    #[test]
    fn test_evaluator_parse_only() {
        let evaluator = Evaluator::default();
        let expr = evaluator.parse("3 / 0").unwrap();
        assert_eq!(expr.to_string(), "3 / 0");
        assert!(expr.evaluate().is_err());
    }
}
