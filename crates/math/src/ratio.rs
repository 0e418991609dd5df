//! Eigenvalue-ratio factor count estimation.

use ndarray::Array1;

use crate::MathError;

/// Outcome of the eigenvalue-ratio search.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorCountEstimate {
    /// Estimated number of factors, in `1..=ratios.len()`.
    pub count: usize,
    /// `ratios[i - 1]` is the (i+1)-th largest eigenvalue over the i-th.
    pub ratios: Array1<f64>,
    /// 1-based indices whose denominator is numerically zero. Their ratios
    /// are kept as computed (possibly `inf` or `NaN`).
    pub degenerate: Vec<usize>,
}

impl FactorCountEstimate {
    /// Whether any ratio had a numerically zero denominator.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }

    /// Ratio at 1-based index `i`.
    #[must_use]
    pub fn ratio(&self, i: usize) -> Option<f64> {
        i.checked_sub(1).and_then(|idx| self.ratios.get(idx).copied())
    }
}

/// Estimate the number of factors from a descending eigenvalue sequence.
///
/// For i = 1..=max_factors computes lambda_i = ev[i+1] / ev[i] (1-based)
/// and returns the first i minimising it: the index just before the
/// largest relative drop.
///
/// `NaN` ratios never win the minimum; if every ratio is `NaN` the count
/// is 1.
///
/// # Arguments
/// * `eigenvalues` - Eigenvalues sorted in descending order
/// * `max_factors` - Largest count to consider, typically floor(n / 3)
///
/// # Errors
/// Returns error if `max_factors` is zero or there are fewer than
/// `max_factors + 1` eigenvalues.
pub fn eigenvalue_ratio(
    eigenvalues: &Array1<f64>,
    max_factors: usize,
) -> Result<FactorCountEstimate, MathError> {
    if max_factors == 0 {
        return Err(MathError::InvalidParameter(
            "factor count search needs at least one candidate".to_string(),
        ));
    }
    if eigenvalues.len() <= max_factors {
        return Err(MathError::DimensionMismatch {
            expected: max_factors + 1,
            actual: eigenvalues.len(),
        });
    }

    let floor = f64::EPSILON * eigenvalues[0].abs();
    let mut degenerate = Vec::new();
    let ratios: Array1<f64> = (0..max_factors)
        .map(|i| {
            let denominator = eigenvalues[i];
            if denominator.abs() <= floor {
                degenerate.push(i + 1);
            }
            eigenvalues[i + 1] / denominator
        })
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for (i, &ratio) in ratios.iter().enumerate() {
        if ratio.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if ratio >= current => {}
            _ => best = Some((i, ratio)),
        }
    }
    let count = best.map_or(1, |(i, _)| i + 1);

    Ok(FactorCountEstimate { count, ratios, degenerate })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(array![10.0, 9.0, 1.0, 0.9, 0.8, 0.7], 2, 2)]
    #[case(array![10.0, 1.0, 0.9, 0.8, 0.7, 0.6], 2, 1)]
    #[case(array![10.0, 9.0, 8.0, 0.5, 0.4, 0.3, 0.2, 0.1, 0.05], 3, 3)]
    fn picks_largest_relative_drop(
        #[case] eigenvalues: Array1<f64>,
        #[case] max_factors: usize,
        #[case] expected: usize,
    ) {
        let estimate = eigenvalue_ratio(&eigenvalues, max_factors).unwrap();
        assert_eq!(estimate.count, expected);
        assert_eq!(estimate.ratios.len(), max_factors);
        assert!(!estimate.is_degenerate());
    }

    #[test]
    fn ratios_are_next_over_current() {
        let estimate = eigenvalue_ratio(&array![8.0, 4.0, 1.0, 0.5], 2).unwrap();
        assert_relative_eq!(estimate.ratio(1).unwrap(), 0.5);
        assert_relative_eq!(estimate.ratio(2).unwrap(), 0.25);
        assert_eq!(estimate.ratio(0), None);
        assert_eq!(estimate.ratio(3), None);
    }

    #[test]
    fn drop_beyond_search_bound_is_ignored() {
        // The steep drop sits at i = 4, outside 1..=2
        let estimate = eigenvalue_ratio(&array![10.0, 9.0, 8.5, 8.0, 0.1, 0.05], 2).unwrap();
        assert_eq!(estimate.count, 1);
    }

    #[test]
    fn ties_take_first_minimiser() {
        let estimate = eigenvalue_ratio(&array![4.0, 2.0, 1.0, 0.9, 0.8, 0.7], 2).unwrap();
        assert_eq!(estimate.count, 1);
    }

    #[test]
    fn zero_spectrum_is_degenerate_not_fatal() {
        let estimate = eigenvalue_ratio(&array![0.0, 0.0, 0.0], 1).unwrap();
        assert_eq!(estimate.count, 1);
        assert!(estimate.ratios[0].is_nan());
        assert_eq!(estimate.degenerate, vec![1]);
    }

    #[test]
    fn near_zero_denominator_is_flagged() {
        let estimate = eigenvalue_ratio(&array![1.0, 1e-20, 0.0, 0.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(estimate.degenerate, vec![2]);
        assert_eq!(estimate.count, 2);
        assert_eq!(estimate.ratios[1], 0.0);
    }

    #[test]
    fn rejects_empty_search() {
        assert!(matches!(
            eigenvalue_ratio(&array![1.0, 0.5], 0),
            Err(MathError::InvalidParameter(_))
        ));
        assert!(matches!(
            eigenvalue_ratio(&array![1.0, 0.5], 2),
            Err(MathError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }
}
