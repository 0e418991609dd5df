//! Lagged autocovariance operations.

use ndarray::{Array2, ArrayView2, s};

use crate::MathError;

/// Compute the lag-`lag` sample cross-covariance of a T x n series.
///
/// Computes: M_k = (1/(T-k)) * Y[k..T]' * Y[0..T-k]
///
/// Entry (i, j) averages `y[t + k, i] * y[t, j]`, so the result is
/// generally not symmetric. The series is not demeaned.
///
/// # Arguments
/// * `y` - Series (T x n), rows ordered in time
/// * `lag` - Lag k, must satisfy 1 <= k < T
///
/// # Returns
/// n x n cross-covariance matrix.
///
/// # Errors
/// Returns error if the series is empty or the lag is out of range.
pub fn lagged_cross_covariance(
    y: ArrayView2<'_, f64>,
    lag: usize,
) -> Result<Array2<f64>, MathError> {
    let t = y.nrows();
    if t == 0 || y.ncols() == 0 {
        return Err(MathError::EmptyData);
    }
    if lag == 0 || lag >= t {
        return Err(MathError::InvalidParameter(format!(
            "lag {lag} out of range for {t} observations"
        )));
    }

    let lead = y.slice(s![lag.., ..]);
    let base = y.slice(s![..t - lag, ..]);

    Ok(lead.t().dot(&base) / (t - lag) as f64)
}

/// Compute the cumulative covariance matrix over lags `1..=max_lag`.
///
/// Computes: S = sum_k M_k * M_k'
///
/// The result is symmetric positive semi-definite. It is symmetrised
/// explicitly so that rounding in the products cannot leave it skewed.
///
/// # Arguments
/// * `y` - Series (T x n), rows ordered in time
/// * `max_lag` - Number of lags k0, must satisfy 1 <= k0 < T
///
/// # Returns
/// n x n cumulative covariance matrix.
///
/// # Errors
/// Returns error if the series is empty or the lag count is out of range.
pub fn cumulative_covariance(
    y: ArrayView2<'_, f64>,
    max_lag: usize,
) -> Result<Array2<f64>, MathError> {
    if max_lag == 0 {
        return Err(MathError::InvalidParameter("lag count must be at least 1".to_string()));
    }

    let n = y.ncols();
    let mut cumulative = Array2::<f64>::zeros((n, n));
    for lag in 1..=max_lag {
        let m = lagged_cross_covariance(y, lag)?;
        cumulative += &m.dot(&m.t());
    }

    Ok((&cumulative + &cumulative.t()) * 0.5)
}
