//! Observed multivariate series.

use derive_more::Display;
use ndarray::{Array2, ArrayD, ArrayView2, Ix2};
use serde::{Deserialize, Serialize};

/// Errors raised while assembling an observed series.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// Input array does not have exactly two axes.
    #[error("series must be two-dimensional (observations x variables), got {ndim} axes")]
    NotTwoDimensional {
        /// Number of axes of the rejected array.
        ndim: usize,
    },

    /// Variable names do not match the number of columns.
    #[error("expected {expected} variable names, got {actual}")]
    NameCountMismatch {
        /// Number of variables in the series.
        expected: usize,
        /// Number of names supplied.
        actual: usize,
    },
}

/// Name of an observed variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct VariableName(pub String);

impl VariableName {
    /// Create a new variable name.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariableName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A T x n series: one row per observation, one column per variable.
///
/// Rows are assumed equally spaced in time and free of missing values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservedSeries {
    /// Variable names, one per column (empty when unnamed).
    pub names: Vec<VariableName>,
    /// Observation matrix.
    #[serde(skip)]
    pub values: Array2<f64>,
}

impl ObservedSeries {
    /// Wrap an observation matrix without variable names.
    #[must_use]
    pub const fn new(values: Array2<f64>) -> Self {
        Self { names: Vec::new(), values }
    }

    /// Wrap an observation matrix and attach one name per column.
    ///
    /// # Errors
    /// Returns `SeriesError::NameCountMismatch` if `names` does not have one
    /// entry per column.
    pub fn with_names(values: Array2<f64>, names: Vec<VariableName>) -> Result<Self, SeriesError> {
        if names.len() != values.ncols() {
            return Err(SeriesError::NameCountMismatch {
                expected: values.ncols(),
                actual: names.len(),
            });
        }
        Ok(Self { names, values })
    }

    /// Build a series from an array of arbitrary dimensionality.
    ///
    /// # Errors
    /// Returns `SeriesError::NotTwoDimensional` unless the array has exactly
    /// two axes.
    pub fn from_dyn(values: ArrayD<f64>) -> Result<Self, SeriesError> {
        let ndim = values.ndim();
        values
            .into_dimensionality::<Ix2>()
            .map(Self::new)
            .map_err(|_| SeriesError::NotTwoDimensional { ndim })
    }

    /// Number of observations (T).
    #[must_use]
    pub fn n_obs(&self) -> usize {
        self.values.nrows()
    }

    /// Number of variables (n).
    #[must_use]
    pub fn n_vars(&self) -> usize {
        self.values.ncols()
    }

    /// Borrow the observation matrix.
    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Name of variable `j`, if names were attached.
    #[must_use]
    pub fn name(&self, j: usize) -> Option<&VariableName> {
        self.names.get(j)
    }
}

impl From<Array2<f64>> for ObservedSeries {
    fn from(values: Array2<f64>) -> Self {
        Self::new(values)
    }
}
