//! Noise (intercept) and standard-error estimation from in-sample residuals.

use tracing::warn;

use crate::config::StandardErrorPolicy;

/// Mean and spread of the one-step residuals over the training windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResidualSummary {
    /// Mean of `observed - predicted`; the model's intercept.
    pub(crate) noise: f64,
    /// Population standard deviation of the residuals.
    pub(crate) standard_error: f64,
}

/// Replays `coefficients` over every one of the `n - p` training windows.
///
/// `coefficients[j]` weights lag `j + 1`. The standard error is computed as
/// `sqrt(E[r²] - E[r]²)`; `policy` decides what happens when floating-point
/// cancellation drives that radicand below zero.
pub(crate) fn residual_summary(
    data: &[f64],
    coefficients: &[f64],
    policy: StandardErrorPolicy,
) -> ResidualSummary {
    let n = data.len();
    let order = coefficients.len();
    let windows = n - order;
    let w = windows as f64;

    let mut noise = 0.0;
    let mut deviation_variance = 0.0;
    for k in 0..windows {
        let predicted: f64 = coefficients
            .iter()
            .enumerate()
            .map(|(j, coef)| coef * data[n - j - 2 - k])
            .sum();
        let observed = data[n - 1 - k];
        let deviation = predicted - observed;
        deviation_variance += deviation * deviation / w;
        noise += observed / w - predicted / w;
    }

    let radicand = deviation_variance - noise * noise;
    if radicand < 0.0 {
        warn!(radicand, ?policy, "negative residual variance");
    }
    let standard_error = match policy {
        StandardErrorPolicy::Propagate => radicand.sqrt(),
        StandardErrorPolicy::ClampToZero => radicand.max(0.0).sqrt(),
    };

    ResidualSummary {
        noise,
        standard_error,
    }
}
