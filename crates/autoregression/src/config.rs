//! Configuration for OLS autoregressive fitting.

use crate::error::ArError;

/// How the standard error is derived when the residual variance radicand
/// `E[r²] - E[r]²` comes out negative through floating-point cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandardErrorPolicy {
    /// Take the square root as-is; a negative radicand yields NaN.
    #[default]
    Propagate,
    /// Clamp a negative radicand to zero before taking the square root.
    ClampToZero,
}

/// Default upper bound on the 1-norm condition number of the covariance
/// matrix before it is treated as singular.
pub const DEFAULT_CONDITION_TOLERANCE: f64 = 1e16;

/// Configuration for [`fit_ols_with_config`](crate::fit_ols_with_config).
///
/// # Example
///
/// ```
/// use autoregression::{FitConfig, StandardErrorPolicy};
///
/// let config = FitConfig::new()
///     .with_standard_error_policy(StandardErrorPolicy::ClampToZero)
///     .with_condition_tolerance(1e12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    standard_error_policy: StandardErrorPolicy,
    condition_tolerance: f64,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `standard_error_policy = Propagate`,
    /// `condition_tolerance = 1e16`.
    pub fn new() -> Self {
        Self {
            standard_error_policy: StandardErrorPolicy::Propagate,
            condition_tolerance: DEFAULT_CONDITION_TOLERANCE,
        }
    }

    /// Sets the policy for negative standard-error radicands.
    pub fn with_standard_error_policy(mut self, policy: StandardErrorPolicy) -> Self {
        self.standard_error_policy = policy;
        self
    }

    /// Sets the condition-number bound above which the covariance matrix
    /// is rejected as singular.
    pub fn with_condition_tolerance(mut self, tolerance: f64) -> Self {
        self.condition_tolerance = tolerance;
        self
    }

    /// Returns the policy for negative standard-error radicands.
    pub fn standard_error_policy(&self) -> StandardErrorPolicy {
        self.standard_error_policy
    }

    /// Returns the condition-number bound.
    pub fn condition_tolerance(&self) -> f64 {
        self.condition_tolerance
    }

    /// Validates this configuration.
    ///
    /// `condition_tolerance` must be finite and at least 1 (no matrix has a
    /// condition number below 1).
    pub fn validate(&self) -> Result<(), ArError> {
        if !self.condition_tolerance.is_finite() || self.condition_tolerance < 1.0 {
            return Err(ArError::InvalidConfig {
                reason: format!(
                    "condition_tolerance must be finite and >= 1, got {}",
                    self.condition_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
