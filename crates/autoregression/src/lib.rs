//! # autoregression
//!
//! Fixed-order autoregressive AR(p) models fitted by ordinary least squares
//! on lagged sample covariances (the Yule-Walker normal equations), with
//! single-step prediction.
//!
//! ## Pipeline
//!
//! ```text
//! fit_ols(&data, p)
//!   ├─ validate order and length     (fit.rs)
//!   ├─ covariance_matrix / _vector   (covariance.rs)
//!   ├─ LU solve C·φ = b              (linalg.rs, via nalgebra)
//!   ├─ residual_summary              (estimate.rs)
//!   └─ ArModel                       (model.rs)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use autoregression::{ArError, fit_ols};
//!
//! let data = [2.0, 7.0, 1.0, -3.0, 2.0, -2.0];
//! let model = fit_ols(&data, 2)?;
//! assert_eq!(model.order(), 2);
//!
//! // the last `p` observations, oldest first
//! let next = model.predict(&data[4..])?;
//! assert!(next.is_finite());
//! # Ok::<(), ArError>(())
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | p | [`ArModel::order()`] | Number of lagged terms |
//! | phi | [`ArModel::coefficients()`] | Lag weights, lag 1 first |
//! | c | [`ArModel::noise()`] | Intercept: mean in-sample residual |
//! | sigma | [`ArModel::standard_error()`] | Std. deviation of in-sample residuals |

mod config;
mod covariance;
mod error;
mod estimate;
mod fit;
mod linalg;
mod model;

pub use config::{DEFAULT_CONDITION_TOLERANCE, FitConfig, StandardErrorPolicy};
pub use error::ArError;
pub use fit::{fit_ols, fit_ols_with_config};
pub use linalg::{CovarianceVector, Matrix, SymmetricMatrix, TransposeVec, Vector};
pub use model::ArModel;
