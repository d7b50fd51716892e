//! OLS fitting pipeline: validate, build covariances, solve, estimate.

use tracing::debug;

use crate::config::FitConfig;
use crate::covariance::{covariance_matrix, covariance_vector};
use crate::error::ArError;
use crate::estimate::residual_summary;
use crate::linalg::solve_vec;
use crate::model::ArModel;

/// Fits an AR(`order`) model to `data` by ordinary least squares on the
/// lagged sample covariances, using [`FitConfig::default()`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArError::NegativeOrder`] | `order < 0` |
/// | [`ArError::InsufficientData`] | `data.len() <= 2 * order + 1` |
/// | [`ArError::SingularCovariantMatrix`] | the lag covariance matrix cannot be solved |
///
/// # Example
///
/// ```
/// use autoregression::fit_ols;
///
/// let model = fit_ols(&[2.0, 7.0, 1.0, -3.0, 2.0, -2.0], 2).unwrap();
/// assert_eq!(model.order(), 2);
/// let next = model.predict(&[66.0, 88.0]).unwrap();
/// assert!(next.is_finite());
/// ```
pub fn fit_ols(data: &[f64], order: isize) -> Result<ArModel, ArError> {
    fit_ols_with_config(data, order, &FitConfig::default())
}

/// Fits an AR(`order`) model like [`fit_ols`] with explicit configuration.
///
/// # Errors
///
/// As [`fit_ols`], plus [`ArError::InvalidConfig`] when `config` fails
/// [`FitConfig::validate()`].
#[tracing::instrument(skip(data, config), fields(n = data.len()))]
pub fn fit_ols_with_config(
    data: &[f64],
    order: isize,
    config: &FitConfig,
) -> Result<ArModel, ArError> {
    config.validate()?;
    let order = validate_inputs(data, order)?;

    let coefficients: Vec<f64> = if order > 0 {
        let cm = covariance_matrix(data, order);
        let cv = covariance_vector(data, order);
        let solution = solve_vec(&cm, false, &cv, config.condition_tolerance()).map_err(|e| {
            debug!(error = %e, "covariance solve failed");
            ArError::SingularCovariantMatrix
        })?;
        solution.iter().copied().collect()
    } else {
        Vec::new()
    };
    debug!(?coefficients, "solved normal equations");

    let summary = residual_summary(data, &coefficients, config.standard_error_policy());
    debug!(
        noise = summary.noise,
        standard_error = summary.standard_error,
        "estimated residual noise"
    );

    Ok(ArModel::new(
        coefficients,
        summary.noise,
        summary.standard_error,
    ))
}

/// Checks the order and data length, returning the order as `usize`.
fn validate_inputs(data: &[f64], order: isize) -> Result<usize, ArError> {
    let order = usize::try_from(order).map_err(|_| ArError::NegativeOrder { order })?;
    let n = data.len();
    let min = order.saturating_mul(2).saturating_add(2);
    if n < min {
        return Err(ArError::InsufficientData { n, order, min });
    }
    Ok(order)
}
