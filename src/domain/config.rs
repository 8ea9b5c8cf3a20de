// ============================================================================
// Evaluator Configuration
// Limits applied when parsing expression strings
// ============================================================================

use crate::numeric::{CalcError, CalcResult, InvalidArgument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum input length used by [`EvaluatorConfig::strict`]
pub const STRICT_MAX_INPUT_LEN: usize = 256;

/// Configuration for parsing and evaluating expression strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Optional: Maximum input length in bytes, checked before tokenizing
    /// None means unlimited
    pub max_input_len: Option<usize>,

    /// Reject operands that parse to infinity or NaN
    pub finite_only: bool,
}

impl EvaluatorConfig {
    /// Create a permissive configuration (no length limit, non-finite operands allowed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set maximum input length
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    /// Builder method: Require finite operands
    pub fn with_finite_only(mut self, finite_only: bool) -> Self {
        self.finite_only = finite_only;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_input_len == Some(0) {
            return Err(invalid("max input length must be positive"));
        }
        Ok(())
    }

    /// Strict preset for untrusted input
    /// - Max input length: 256 bytes
    /// - Finite operands only
    pub fn strict() -> Self {
        Self::new()
            .with_max_input_len(STRICT_MAX_INPUT_LEN)
            .with_finite_only(true)
    }

    /// Load and validate a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(msg: impl Into<String>) -> CalcError {
    CalcError::InvalidArgument(InvalidArgument::InvalidConfig(msg.into()))
}
