//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Matrix is not square.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Parameter outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Iterative solver exhausted its budget.
    #[error("no convergence after {sweeps} sweeps (off-diagonal norm {off_norm:e})")]
    NoConvergence {
        /// Sweeps performed.
        sweeps: usize,
        /// Remaining off-diagonal Frobenius norm.
        off_norm: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::NotSquare { rows: 3, cols: 2 };
        assert_eq!(err.to_string(), "matrix must be square, got 3x2");

        let err = MathError::DimensionMismatch { expected: 10, actual: 5 };
        assert!(err.to_string().contains("10") && err.to_string().contains("5"));

        let err = MathError::NoConvergence { sweeps: 4, off_norm: 0.5 };
        assert!(err.to_string().contains("4 sweeps"));
    }
}
