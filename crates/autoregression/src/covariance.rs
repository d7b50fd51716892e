//! Lagged sample covariances for the AR(p) normal equations.
//!
//! All quantities use the `m = n - p` most recent complete windows. Lag `r`
//! of window `k` is `data[n - r - 1 - k]`, so `k = 0` is the newest window
//! and lag 0 is the value being explained.

use crate::linalg::{CovarianceVector, SymmetricMatrix};

/// Un-normalised sample covariance between lags `r` and `c`:
/// `Σ x_r x_c - (Σ x_r)(Σ x_c) / m`.
pub(crate) fn cov(data: &[f64], r: usize, c: usize, order: usize) -> f64 {
    let n = data.len();
    let windows = n - order;
    let mut r_tally = 0.0;
    let mut c_tally = 0.0;
    let mut rc_tally = 0.0;
    for k in 0..windows {
        let xr = data[n - r - 1 - k];
        let xc = data[n - c - 1 - k];
        r_tally += xr;
        c_tally += xc;
        rc_tally += xr * xc;
    }
    rc_tally - r_tally * c_tally / windows as f64
}

/// Builds the `order x order` matrix with `C[row][col] = cov(row+1, col+1)`.
/// Only the upper triangle is computed.
pub(crate) fn covariance_matrix(data: &[f64], order: usize) -> SymmetricMatrix {
    let mut m = SymmetricMatrix::new(order);
    for r in 0..order {
        for c in r..order {
            m.set(r, c, cov(data, r + 1, c + 1, order));
        }
    }
    m
}

/// Builds the vector `b[row] = cov(row+1, 0)`.
pub(crate) fn covariance_vector(data: &[f64], order: usize) -> CovarianceVector {
    (0..order)
        .map(|r| cov(data, r + 1, 0, order))
        .collect::<Vec<_>>()
        .into()
}
