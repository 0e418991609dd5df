//! Error types for factor estimation.

use lagfactor_math::MathError;
use lagfactor_traits::EstimatorError;

/// Errors that can occur during factor model estimation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Estimator error.
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Dimension mismatch.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

impl ModelError {
    /// Returns whether this error is recoverable.
    ///
    /// Shape problems can be fixed by the caller; numerical failures cannot.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Estimator(err) => err.is_recoverable(),
            Self::Math(_) => false,
            Self::DimensionMismatch(_) => true,
        }
    }
}

impl From<ModelError> for EstimatorError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Estimator(inner) => inner,
            ModelError::Math(inner) => Self::LinearAlgebra(inner.to_string()),
            ModelError::DimensionMismatch(msg) => Self::InvalidConfig(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::from(EstimatorError::TooFewVariables { required: 3, actual: 2 });
        assert!(err.to_string().contains("too few variables"));
    }

    #[test]
    fn error_is_recoverable() {
        let err = ModelError::from(EstimatorError::LagOutOfRange { max_lag: 5, n_obs: 5 });
        assert!(err.is_recoverable());

        let err = ModelError::from(MathError::NoConvergence { sweeps: 100, off_norm: 1.0 });
        assert!(!err.is_recoverable());
    }

    #[test]
    fn math_error_maps_to_linear_algebra() {
        let err: EstimatorError = ModelError::from(MathError::EmptyData).into();
        assert!(matches!(err, EstimatorError::LinearAlgebra(_)));
    }
}
