//! Error types for oscillatory quadrature operations.

use thiserror::Error;

/// Result type for quadrature operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during oscillatory quadrature.
///
/// Running out of subdivisions is *not* an error: the adaptive routines
/// return their best estimate with [`QuadResult::converged`] cleared and the
/// shortfall reflected in the error estimate. Only genuinely unusable input
/// surfaces here.
///
/// [`QuadResult::converged`]: crate::quadrature::QuadResult::converged
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrateError {
    /// Invalid integration interval (e.g. a >= b).
    #[error("invalid interval [{a}, {b}] in {context}: bounds must satisfy a < b")]
    InvalidInterval {
        /// Lower bound as supplied
        a: f64,
        /// Upper bound as supplied
        b: f64,
        /// Routine that rejected the interval
        context: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What was wrong with it
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntegrateError::InvalidInterval {
            a: 5.0,
            b: 3.0,
            context: "oscillatory_quad",
        };
        assert!(err.to_string().contains("invalid interval"));
        assert!(err.to_string().contains("oscillatory_quad"));

        let err = IntegrateError::InvalidParameter {
            parameter: "limit",
            message: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("limit"));
        assert!(err.to_string().contains("at least 1"));
    }
}
