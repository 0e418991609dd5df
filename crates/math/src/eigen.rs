//! Eigendecomposition of symmetric matrices.

use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::MathError;

/// Configuration for the cyclic Jacobi eigensolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenConfig {
    /// Maximum number of full sweeps over the off-diagonal pairs.
    pub max_sweeps: usize,
    /// Convergence threshold on the off-diagonal Frobenius norm, relative to
    /// the Frobenius norm of the input.
    pub tolerance: f64,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self { max_sweeps: 100, tolerance: 1e-12 }
    }
}

/// Eigenpairs of a symmetric matrix.
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    /// Eigenvalues, sorted in descending order.
    pub eigenvalues: Array1<f64>,
    /// Orthonormal eigenvectors; column `i` pairs with `eigenvalues[i]`.
    pub eigenvectors: Array2<f64>,
    /// Jacobi sweeps performed.
    pub sweeps: usize,
}

impl SymmetricEigen {
    /// Eigenvectors of the `k` largest eigenvalues, as columns (n x k).
    #[must_use]
    pub fn leading_vectors(&self, k: usize) -> Array2<f64> {
        self.eigenvectors.slice(s![.., ..k]).to_owned()
    }

    /// Rebuild the decomposed matrix: V * diag(eigenvalues) * V'.
    #[must_use]
    pub fn reconstruct(&self) -> Array2<f64> {
        let scaled = &self.eigenvectors * &self.eigenvalues;
        scaled.dot(&self.eigenvectors.t())
    }
}

/// Decompose a symmetric matrix with cyclic Jacobi rotations.
///
/// Each sweep rotates away every off-diagonal pair (p, q) in row order.
/// Iteration stops once the off-diagonal Frobenius norm falls below
/// `config.tolerance` times the norm of the input. Only symmetry is
/// assumed; the lower triangle is read as the mirror of the upper.
///
/// Eigenpairs are sorted by eigenvalue, descending, with a stable sort:
/// equal eigenvalues keep the order in which they sit on the rotated
/// diagonal.
///
/// # Arguments
/// * `matrix` - Symmetric matrix (n x n)
/// * `config` - Sweep budget and tolerance
///
/// # Returns
/// Sorted eigenvalues and orthonormal eigenvectors.
///
/// # Errors
/// Returns error if the matrix is empty or not square, or if the sweep
/// budget runs out before convergence (including non-finite input).
pub fn symmetric_eigen(
    matrix: &Array2<f64>,
    config: &EigenConfig,
) -> Result<SymmetricEigen, MathError> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::NotSquare { rows: n, cols: matrix.ncols() });
    }
    if n == 0 {
        return Err(MathError::EmptyData);
    }

    let mut a = matrix.clone();
    let mut v = Array2::<f64>::eye(n);

    let scale = matrix.iter().map(|x| x * x).sum::<f64>().sqrt();
    let threshold = config.tolerance * scale;

    let mut sweeps = 0;
    loop {
        let off_norm = off_diagonal_norm(&a);
        if off_norm <= threshold {
            break;
        }
        if sweeps == config.max_sweeps {
            return Err(MathError::NoConvergence { sweeps, off_norm });
        }
        jacobi_sweep(&mut a, &mut v);
        sweeps += 1;
    }
    trace!(n, sweeps, "jacobi converged");

    let diagonal = a.diag();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        diagonal[j].partial_cmp(&diagonal[i]).unwrap_or(std::cmp::Ordering::Equal)
    });

    let eigenvalues = order.iter().map(|&i| diagonal[i]).collect();
    let mut eigenvectors = Array2::<f64>::zeros((n, n));
    for (new_idx, &old_idx) in order.iter().enumerate() {
        eigenvectors.column_mut(new_idx).assign(&v.column(old_idx));
    }

    Ok(SymmetricEigen { eigenvalues, eigenvectors, sweeps })
}

fn off_diagonal_norm(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for p in 0..n {
        for q in (p + 1)..n {
            sum += 2.0 * a[[p, q]] * a[[p, q]];
        }
    }
    sum.sqrt()
}

fn jacobi_sweep(a: &mut Array2<f64>, v: &mut Array2<f64>) {
    let n = a.nrows();
    for p in 0..n {
        for q in (p + 1)..n {
            let apq = a[[p, q]];
            if apq == 0.0 {
                continue;
            }

            let app = a[[p, p]];
            let aqq = a[[q, q]];
            let theta = (aqq - app) / (2.0 * apq);
            // Smaller root of t^2 + 2*theta*t - 1 = 0
            let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t * t + 1.0).sqrt();
            let sn = t * c;

            a[[p, p]] = app - t * apq;
            a[[q, q]] = aqq + t * apq;
            a[[p, q]] = 0.0;
            a[[q, p]] = 0.0;

            for k in 0..n {
                if k == p || k == q {
                    continue;
                }
                let akp = a[[k, p]];
                let akq = a[[k, q]];
                a[[k, p]] = c * akp - sn * akq;
                a[[p, k]] = a[[k, p]];
                a[[k, q]] = sn * akp + c * akq;
                a[[q, k]] = a[[k, q]];
            }

            for k in 0..n {
                let vkp = v[[k, p]];
                let vkq = v[[k, q]];
                v[[k, p]] = c * vkp - sn * vkq;
                v[[k, q]] = sn * vkp + c * vkq;
            }
        }
    }
}
