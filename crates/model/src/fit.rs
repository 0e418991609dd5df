//! Fitted factor model.

use lagfactor_math::FactorCountEstimate;
use lagfactor_primitives::EigenSpectrum;
use ndarray::{Array1, Array2, ArrayView2};

use crate::ModelError;

/// Result of a cumulative-autocovariance factor fit.
#[derive(Debug, Clone)]
pub struct FactorModelFit {
    /// Estimated factors, the series projected onto the loadings (T x r).
    pub factors: Array2<f64>,
    /// Loadings, orthonormal columns (n x r).
    pub loadings: Array2<f64>,
    /// Common component, factors times loadings' (T x n).
    pub common_component: Array2<f64>,
    /// Full spectrum of the cumulative covariance, descending (n).
    pub eigenvalues: Array1<f64>,
    /// Eigenvalue-ratio search over `1..=floor(n / 3)`.
    pub ratio_estimate: FactorCountEstimate,
}

impl FactorModelFit {
    /// Number of factors used for the reconstruction (r).
    #[must_use]
    pub fn n_factors(&self) -> usize {
        self.loadings.ncols()
    }

    /// Factor count suggested by the eigenvalue-ratio estimator.
    ///
    /// This is diagnostic; it need not equal [`Self::n_factors`].
    #[must_use]
    pub const fn estimated_factor_count(&self) -> usize {
        self.ratio_estimate.count
    }

    /// Eigenvalues as a spectrum.
    #[must_use]
    pub fn spectrum(&self) -> EigenSpectrum {
        EigenSpectrum::new(self.eigenvalues.clone())
    }

    /// Share of the cumulative covariance spectrum carried by the `r`
    /// factors used.
    #[must_use]
    pub fn explained_share(&self) -> f64 {
        self.spectrum().explained_share(self.n_factors())
    }

    /// Idiosyncratic component: the series minus the common component.
    ///
    /// # Errors
    /// Returns `ModelError::DimensionMismatch` if `series` does not have the
    /// shape of the fitted series.
    pub fn idiosyncratic(&self, series: ArrayView2<'_, f64>) -> Result<Array2<f64>, ModelError> {
        if series.dim() != self.common_component.dim() {
            return Err(ModelError::DimensionMismatch(format!(
                "series is {:?}, fit is {:?}",
                series.dim(),
                self.common_component.dim()
            )));
        }
        Ok(&series - &self.common_component)
    }

    /// Split into `(factors, loadings, common_component, eigenvalues,
    /// estimated_factor_count)`.
    #[must_use]
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Array2<f64>, Array1<f64>, usize) {
        let count = self.ratio_estimate.count;
        (self.factors, self.loadings, self.common_component, self.eigenvalues, count)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    fn toy_fit() -> FactorModelFit {
        let loadings = array![[1.0], [0.0], [0.0]];
        let series = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let factors = series.dot(&loadings);
        let common_component = factors.dot(&loadings.t());
        FactorModelFit {
            factors,
            loadings,
            common_component,
            eigenvalues: array![3.0, 1.0, 0.0],
            ratio_estimate: FactorCountEstimate {
                count: 1,
                ratios: array![1.0 / 3.0],
                degenerate: Vec::new(),
            },
        }
    }

    #[test]
    fn idiosyncratic_is_remainder() {
        let fit = toy_fit();
        let series = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let resid = fit.idiosyncratic(series.view()).unwrap();

        assert_eq!(resid, array![[0.0, 2.0, 3.0], [0.0, 5.0, 6.0]]);
    }

    #[test]
    fn idiosyncratic_checks_shape() {
        let fit = toy_fit();
        let wrong = Array2::<f64>::zeros((3, 3));
        assert!(matches!(fit.idiosyncratic(wrong.view()), Err(ModelError::DimensionMismatch(_))));
    }

    #[test]
    fn explained_share_uses_factor_count() {
        let fit = toy_fit();
        assert_eq!(fit.n_factors(), 1);
        assert_relative_eq!(fit.explained_share(), 0.75);
    }

    #[test]
    fn into_parts_order() {
        let (factors, loadings, common, eigenvalues, count) = toy_fit().into_parts();
        assert_eq!(factors.dim(), (2, 1));
        assert_eq!(loadings.dim(), (3, 1));
        assert_eq!(common.dim(), (2, 3));
        assert_eq!(eigenvalues.len(), 3);
        assert_eq!(count, 1);
    }
}
