//! Fitted AR(p) model.

use serde::{Deserialize, Serialize};

use crate::error::ArError;

/// A fitted AR(p) model produced by [`fit_ols()`](crate::fit_ols).
///
/// `coefficients()[j]` weights the observation `j + 1` steps back, so the
/// first coefficient applies to the most recent value. The model is an
/// immutable value; prediction never mutates it.
///
/// Serializes as `{ "coefficients": [...], "noise": .., "standard_error": .. }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArModel {
    coefficients: Vec<f64>,
    noise: f64,
    standard_error: f64,
}

impl ArModel {
    /// Creates a new `ArModel` (crate-internal constructor).
    pub(crate) fn new(coefficients: Vec<f64>, noise: f64, standard_error: f64) -> Self {
        Self {
            coefficients,
            noise,
            standard_error,
        }
    }

    /// Returns the model order `p`.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the population standard deviation of the in-sample
    /// one-step residuals.
    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }

    /// Returns the lag coefficients, lag 1 first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the intercept (mean in-sample residual).
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Predicts the value following `window`, which holds the last `p`
    /// observations oldest first.
    ///
    /// Returns `noise + Σ coefficients[p-1-i] * window[i]`.
    ///
    /// # Errors
    ///
    /// [`ArError::IncorrectDataLength`] if `window.len() != self.order()`.
    pub fn predict(&self, window: &[f64]) -> Result<f64, ArError> {
        let p = self.order();
        if window.len() != p {
            return Err(ArError::IncorrectDataLength {
                expected: p,
                got: window.len(),
            });
        }
        Ok(window
            .iter()
            .enumerate()
            .fold(self.noise, |acc, (i, x)| {
                acc + self.coefficients[p - 1 - i] * x
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn accessors_round_trip() {
        let model = ArModel::new(vec![0.5, -0.3], 1.25, 0.8);
        assert_eq!(model.order(), 2);
        assert_eq!(model.coefficients(), &[0.5, -0.3]);
        assert_eq!(model.noise(), 1.25);
        assert_eq!(model.standard_error(), 0.8);
    }

    #[test]
    fn predict_pairs_newest_with_lag_one() {
        let model = ArModel::new(vec![0.5, -0.3], 1.0, 0.0);
        // window = [older, newer]
        let y = model.predict(&[10.0, 20.0]).unwrap();
        assert_abs_diff_eq!(y, 1.0 + 0.5 * 20.0 - 0.3 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn predict_zero_order_returns_noise() {
        let model = ArModel::new(vec![], 3.5, 1.0);
        assert_eq!(model.order(), 0);
        assert_eq!(model.predict(&[]).unwrap(), 3.5);
    }

    #[test]
    fn predict_wrong_length() {
        let model = ArModel::new(vec![0.5, -0.3], 0.0, 0.0);
        for window in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            assert_eq!(
                model.predict(window).unwrap_err(),
                ArError::IncorrectDataLength {
                    expected: 2,
                    got: window.len()
                }
            );
        }
    }

    #[test]
    fn predict_does_not_mutate() {
        let model = ArModel::new(vec![0.2], 0.1, 0.3);
        let before = model.clone();
        let _ = model.predict(&[4.0]);
        let _ = model.predict(&[4.0, 5.0]);
        assert_eq!(model, before);
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + Clone>() {}
        assert_impl::<ArModel>();
    }
}
