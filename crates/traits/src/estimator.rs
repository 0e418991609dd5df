//! Factor estimation trait definitions.

use lagfactor_primitives::{ObservedSeries, SeriesError};
use ndarray::ArrayView2;

/// Errors that can occur during estimation.
///
/// Every variant except `LinearAlgebra` describes input whose shape is
/// inconsistent with the requested lag or factor count.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// The input could not be read as an observations x variables matrix.
    #[error("invalid series: {0}")]
    Series(#[from] SeriesError),

    /// Insufficient data for estimation.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Too few variables for the eigenvalue-ratio search.
    #[error("too few variables: need at least {required}, got {actual}")]
    TooFewVariables {
        /// Required number of variables.
        required: usize,
        /// Actual number of variables.
        actual: usize,
    },

    /// Lag count outside `1..n_obs`.
    #[error("lag count {max_lag} out of range for {n_obs} observations (must be in 1..{n_obs})")]
    LagOutOfRange {
        /// Requested lag count.
        max_lag: usize,
        /// Number of observations.
        n_obs: usize,
    },

    /// Factor count outside `1..=n_vars`.
    #[error("factor count {n_factors} out of range for {n_vars} variables (must be in 1..={n_vars})")]
    FactorCountOutOfRange {
        /// Requested factor count.
        n_factors: usize,
        /// Number of variables.
        n_vars: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Linear algebra error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),
}

impl EstimatorError {
    /// Returns whether this error is recoverable.
    ///
    /// Shape errors are recoverable by re-invoking with valid parameters.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::LinearAlgebra(_))
    }
}

/// Trait for estimating a latent factor model from an observed series.
pub trait FactorEstimator: Send + Sync {
    /// Configuration type for this estimator.
    type Config: Default + Clone + Send + Sync;

    /// Fitted model returned by [`FactorEstimator::fit`].
    type Output;

    /// Create a new estimator with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Get the configuration.
    fn config(&self) -> &Self::Config;

    /// Fit the model to a T x n series.
    ///
    /// # Arguments
    /// * `series` - Observations (n_obs x n_vars), rows ordered in time
    ///
    /// # Errors
    /// Returns `EstimatorError` if the series shape is inconsistent with the
    /// configuration or the decomposition fails.
    fn fit(&self, series: ArrayView2<'_, f64>) -> Result<Self::Output, EstimatorError>;

    /// Fit the model to an [`ObservedSeries`].
    ///
    /// # Errors
    /// See [`FactorEstimator::fit`].
    fn fit_series(&self, series: &ObservedSeries) -> Result<Self::Output, EstimatorError> {
        self.fit(series.view())
    }
}
