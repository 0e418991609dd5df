//! Precondition checks shared by estimators.

use lagfactor_primitives::{FactorCount, MaxLag};

use crate::EstimatorError;

/// Fewest variables for which the eigenvalue-ratio search has a candidate,
/// since it scans `1..=floor(n_vars / 3)`.
pub const MIN_VARIABLES: usize = 3;

/// Check the series shape against the lag count.
///
/// Requires at least one observation, `n_vars >= MIN_VARIABLES` and
/// `1 <= max_lag < n_obs`.
///
/// # Errors
/// Returns the first violated precondition as an `EstimatorError`.
pub fn validate_dimensions(
    n_obs: usize,
    n_vars: usize,
    max_lag: MaxLag,
) -> Result<(), EstimatorError> {
    if n_obs == 0 {
        return Err(EstimatorError::InsufficientData { required: 2, actual: 0 });
    }
    if n_vars < MIN_VARIABLES {
        return Err(EstimatorError::TooFewVariables { required: MIN_VARIABLES, actual: n_vars });
    }
    if max_lag.get() == 0 || max_lag.get() >= n_obs {
        return Err(EstimatorError::LagOutOfRange { max_lag: max_lag.get(), n_obs });
    }
    Ok(())
}

/// Check that `1 <= n_factors <= n_vars`.
///
/// # Errors
/// Returns `EstimatorError::FactorCountOutOfRange` otherwise.
pub fn validate_factor_count(
    n_factors: FactorCount,
    n_vars: usize,
) -> Result<(), EstimatorError> {
    if n_factors.get() == 0 || n_factors.get() > n_vars {
        return Err(EstimatorError::FactorCountOutOfRange { n_factors: n_factors.get(), n_vars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(10, 3, 1)]
    #[case(10, 3, 9)]
    #[case(2, 6, 1)]
    fn accepts_valid_shapes(#[case] n_obs: usize, #[case] n_vars: usize, #[case] lag: usize) {
        assert!(validate_dimensions(n_obs, n_vars, MaxLag::new(lag)).is_ok());
    }

    #[rstest]
    #[case(10, 6, 0)]
    #[case(10, 6, 10)]
    #[case(10, 6, 11)]
    fn rejects_lag_out_of_range(#[case] n_obs: usize, #[case] n_vars: usize, #[case] lag: usize) {
        let err = validate_dimensions(n_obs, n_vars, MaxLag::new(lag)).unwrap_err();
        assert!(matches!(err, EstimatorError::LagOutOfRange { .. }));
    }

    #[test]
    fn rejects_too_few_variables() {
        let err = validate_dimensions(50, 2, MaxLag::new(1)).unwrap_err();
        assert!(matches!(err, EstimatorError::TooFewVariables { required: 3, actual: 2 }));
    }

    #[test]
    fn rejects_empty_series() {
        let err = validate_dimensions(0, 5, MaxLag::new(1)).unwrap_err();
        assert!(matches!(err, EstimatorError::InsufficientData { .. }));
    }

    #[rstest]
    #[case(0, 5, false)]
    #[case(1, 5, true)]
    #[case(5, 5, true)]
    #[case(6, 5, false)]
    fn factor_count_bounds(#[case] r: usize, #[case] n_vars: usize, #[case] ok: bool) {
        assert_eq!(validate_factor_count(FactorCount::new(r), n_vars).is_ok(), ok);
    }
}
