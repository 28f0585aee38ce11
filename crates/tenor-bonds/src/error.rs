//! Error types for bond valuation and curve construction.

use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond valuation and curve construction.
///
/// `InvalidInput` is fatal to the single call that received the bad
/// argument. `NoConvergence` is recoverable at the per-bond level: the
/// curve builder collects it and keeps bootstrapping the remaining bonds.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Malformed or out-of-domain argument.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// The yield solver exhausted its iteration/tolerance budget.
    #[error("Yield solver failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    NoConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Not enough data points for the operation.
    #[error("Insufficient data: need at least {required}, got {got}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        got: usize,
    },
}

impl BondError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a no-convergence error.
    #[must_use]
    pub fn no_convergence(iterations: u32, residual: f64) -> Self {
        Self::NoConvergence {
            iterations,
            residual,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::NoConvergence {
                iterations,
                residual,
            },
            MathError::InsufficientData { required, actual } => Self::InsufficientData {
                required,
                got: actual,
            },
            other => Self::InvalidInput {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::no_convergence(100, 1e-4);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_math_error_mapping() {
        let err: BondError = MathError::convergence_failed(50, 1e-3).into();
        assert!(matches!(err, BondError::NoConvergence { iterations: 50, .. }));

        let err: BondError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, BondError::InsufficientData { required: 2, got: 1 }));
    }
}
