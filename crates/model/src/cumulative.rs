//! Cumulative-autocovariance factor estimation.

use lagfactor_math::{EigenConfig, cumulative_covariance, eigenvalue_ratio, symmetric_eigen};
use lagfactor_primitives::{FactorCount, MaxLag};
use lagfactor_traits::{
    EstimatorError, FactorEstimator, validate_dimensions, validate_factor_count,
};
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{FactorModelFit, ModelError};

/// How many factors the reconstruction uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorSelection {
    /// Use exactly this many factors. The eigenvalue-ratio estimate is
    /// still computed and reported.
    Fixed(FactorCount),
    /// Use the eigenvalue-ratio estimate.
    EigenvalueRatio,
}

/// Configuration for cumulative-autocovariance estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Number of lags k0 accumulated into the cumulative covariance.
    pub max_lag: MaxLag,
    /// Factor count used for the reconstruction.
    pub selection: FactorSelection,
    /// Eigensolver settings.
    pub eigen: EigenConfig,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_lag: MaxLag::new(2),
            selection: FactorSelection::EigenvalueRatio,
            eigen: EigenConfig::default(),
        }
    }
}

/// Lam-Yao-Bathia factor estimator.
///
/// Builds S = sum over k in 1..=k0 of M_k * M_k', where M_k is the lag-k
/// sample cross-covariance, and takes its leading eigenvectors as
/// loadings. Factors are the series projected onto the loadings and the
/// common component is the factors mapped back through them.
#[derive(Debug, Clone, Default)]
pub struct CumulativeCovarianceEstimator {
    config: EstimatorConfig,
}

impl CumulativeCovarianceEstimator {
    /// Create a new estimator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::default())
    }

    /// Estimate the factor model.
    ///
    /// The series is only read; every output is freshly allocated.
    ///
    /// # Arguments
    /// * `series` - Observations (T x n), rows ordered in time
    ///
    /// # Returns
    /// Factors, loadings, common component, eigenvalues and the
    /// eigenvalue-ratio estimate.
    ///
    /// # Errors
    /// Returns `ModelError::Estimator` when the shape violates
    /// `1 <= k0 < T`, `n >= 3` or `1 <= r <= n`, and `ModelError::Math` if
    /// the eigendecomposition fails.
    #[tracing::instrument(
        level = "debug",
        skip(self, series),
        fields(n_obs = series.nrows(), n_vars = series.ncols(), max_lag = self.config.max_lag.get())
    )]
    pub fn estimate(&self, series: ArrayView2<'_, f64>) -> Result<FactorModelFit, ModelError> {
        let (n_obs, n_vars) = series.dim();
        validate_dimensions(n_obs, n_vars, self.config.max_lag)?;
        if let FactorSelection::Fixed(n_factors) = self.config.selection {
            validate_factor_count(n_factors, n_vars)?;
        }

        let cumulative = cumulative_covariance(series, self.config.max_lag.get())?;
        let eigen = symmetric_eigen(&cumulative, &self.config.eigen)?;
        debug!(sweeps = eigen.sweeps, "decomposed cumulative covariance");

        let bound = FactorCount::ratio_search_bound(n_vars);
        let ratio_estimate = eigenvalue_ratio(&eigen.eigenvalues, bound.get())?;
        if ratio_estimate.is_degenerate() {
            warn!(
                indices = ?ratio_estimate.degenerate,
                ratios = ?ratio_estimate.ratios,
                "near-zero eigenvalue in ratio denominator"
            );
        }

        let n_factors = match self.config.selection {
            FactorSelection::Fixed(n_factors) => n_factors.get(),
            FactorSelection::EigenvalueRatio => ratio_estimate.count,
        };

        let loadings = eigen.leading_vectors(n_factors);
        let factors = series.dot(&loadings);
        let common_component = factors.dot(&loadings.t());
        debug!(n_factors, estimated = ratio_estimate.count, "reconstructed common component");

        Ok(FactorModelFit {
            factors,
            loadings,
            common_component,
            eigenvalues: eigen.eigenvalues,
            ratio_estimate,
        })
    }
}

impl FactorEstimator for CumulativeCovarianceEstimator {
    type Config = EstimatorConfig;
    type Output = FactorModelFit;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn fit(&self, series: ArrayView2<'_, f64>) -> Result<Self::Output, EstimatorError> {
        self.estimate(series).map_err(EstimatorError::from)
    }
}

/// Estimate a factor model with `max_lag` lags and `n_factors` factors.
///
/// The eigenvalue-ratio estimate is reported in the result but does not
/// change the number of factors used; callers who want it applied can
/// re-run with [`FactorModelFit::estimated_factor_count`] or configure
/// [`FactorSelection::EigenvalueRatio`].
///
/// # Errors
/// See [`CumulativeCovarianceEstimator::estimate`].
pub fn estimate_factors(
    series: ArrayView2<'_, f64>,
    max_lag: usize,
    n_factors: usize,
) -> Result<FactorModelFit, ModelError> {
    CumulativeCovarianceEstimator::with_config(EstimatorConfig {
        max_lag: MaxLag::new(max_lag),
        selection: FactorSelection::Fixed(FactorCount::new(n_factors)),
        eigen: EigenConfig::default(),
    })
    .estimate(series)
}
