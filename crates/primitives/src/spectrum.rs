//! Eigenvalue spectrum of the cumulative covariance matrix.

use ndarray::Array1;

/// Eigenvalues sorted in descending order.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenSpectrum {
    values: Array1<f64>,
}

impl EigenSpectrum {
    /// Wrap eigenvalues that are already sorted in descending order.
    #[must_use]
    pub const fn new(values: Array1<f64>) -> Self {
        Self { values }
    }

    /// Get the eigenvalues.
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of eigenvalues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all eigenvalues.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    /// Share of the total carried by the `k` largest eigenvalues.
    ///
    /// Returns `NaN` when the spectrum sums to zero.
    #[must_use]
    pub fn explained_share(&self, k: usize) -> f64 {
        let k = k.min(self.values.len());
        let head: f64 = self.values.iter().take(k).sum();
        head / self.total()
    }

    /// Whether each eigenvalue is no larger than the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.values.iter().zip(self.values.iter().skip(1)).all(|(prev, next)| next <= prev)
    }
}

impl From<EigenSpectrum> for Array1<f64> {
    fn from(spectrum: EigenSpectrum) -> Self {
        spectrum.values
    }
}
