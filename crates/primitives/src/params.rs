//! Estimation parameter newtypes.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Number of autocovariance lags accumulated into the cumulative covariance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct MaxLag(pub usize);

impl MaxLag {
    /// Create a new lag count.
    #[must_use]
    pub const fn new(lags: usize) -> Self {
        Self(lags)
    }

    /// Get the lag count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Lags accumulated, in order: `1..=k0`.
    pub fn lags(self) -> impl Iterator<Item = usize> {
        1..=self.0
    }
}

impl Default for MaxLag {
    fn default() -> Self {
        Self(1)
    }
}

/// Number of latent factors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct FactorCount(pub usize);

impl FactorCount {
    /// Create a new factor count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Get the factor count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Largest count the eigenvalue-ratio estimator may return for `n_vars`
    /// variables, `floor(n_vars / 3)`.
    #[must_use]
    pub const fn ratio_search_bound(n_vars: usize) -> Self {
        Self(n_vars / 3)
    }
}
