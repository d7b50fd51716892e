//! Error types for the autoregression crate.

/// Error type for all fallible operations in the autoregression crate.
///
/// Every variant is terminal for the call that produced it: fitting never
/// returns a partial model, and a failed prediction leaves the model untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArError {
    /// Returned when the requested model order is negative.
    #[error("model order cannot be negative, got {order}")]
    NegativeOrder {
        /// The order that was requested.
        order: isize,
    },

    /// Returned when the data is too short for the requested order.
    ///
    /// Fitting an AR(p) model needs more than `2p + 1` observations so that
    /// at least one residual remains after the covariance windows.
    #[error("insufficient data: got {n} observations, order {order} needs at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Requested model order.
        order: usize,
        /// Minimum number of observations required (`2 * order + 2`, saturating).
        min: usize,
    },

    /// Returned when the covariance matrix built from the data could not be
    /// factorized (collinear or degenerate lagged data).
    #[error("the covariance matrix generated from the data was singular")]
    SingularCovariantMatrix,

    /// Returned when a prediction window does not match the model order.
    #[error("prediction window has {got} values, model order is {expected}")]
    IncorrectDataLength {
        /// Model order.
        expected: usize,
        /// Length of the supplied window.
        got: usize,
    },

    /// Returned when a [`FitConfig`](crate::FitConfig) fails validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_negative_order() {
        let err = ArError::NegativeOrder { order: -1 };
        assert_eq!(err.to_string(), "model order cannot be negative, got -1");
    }

    #[test]
    fn error_insufficient_data() {
        let err = ArError::InsufficientData {
            n: 5,
            order: 2,
            min: 6,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: got 5 observations, order 2 needs at least 6"
        );
    }

    #[test]
    fn error_singular() {
        let err = ArError::SingularCovariantMatrix;
        assert_eq!(
            err.to_string(),
            "the covariance matrix generated from the data was singular"
        );
    }

    #[test]
    fn error_incorrect_data_length() {
        let err = ArError::IncorrectDataLength {
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "prediction window has 3 values, model order is 2"
        );
    }

    #[test]
    fn error_invalid_config() {
        let err = ArError::InvalidConfig {
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ArError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ArError>();
    }
}
