//! Tridiagonal (bandwidth 1) system storage and direct solve.

use crate::error::{SolverError, SolverResult};
use nalgebra::DVector;

/// A tridiagonal linear system stored as three diagonals.
///
/// Row `i` reads `lower[i]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1]`;
/// `lower[0]` and `upper[n-1]` are ignored.
#[derive(Clone, Debug)]
pub struct TriDiagonal {
    pub lower: DVector<f64>,
    pub diag: DVector<f64>,
    pub upper: DVector<f64>,
}

impl TriDiagonal {
    pub fn zeros(n: usize) -> Self {
        Self {
            lower: DVector::zeros(n),
            diag: DVector::zeros(n),
            upper: DVector::zeros(n),
        }
    }

    pub fn n(&self) -> usize {
        self.diag.len()
    }

    /// Multiply by a vector. Used to check residuals in tests.
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.n();
        let mut y = DVector::zeros(n);
        for i in 0..n {
            let mut acc = self.diag[i] * x[i];
            if i > 0 {
                acc += self.lower[i] * x[i - 1];
            }
            if i + 1 < n {
                acc += self.upper[i] * x[i + 1];
            }
            y[i] = acc;
        }
        y
    }

    /// Solve the system by the Thomas algorithm (forward elimination, back
    /// substitution). Runs in O(n); a vanishing pivot is reported as a
    /// singular system, which for a well-assembled conduction step indicates
    /// an assembly defect rather than a recoverable condition.
    pub fn solve(&self, rhs: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let n = self.n();
        if n == 0 {
            return Err(SolverError::ProblemSetup {
                what: "empty tridiagonal system".to_string(),
            });
        }
        if rhs.len() != n {
            return Err(SolverError::ProblemSetup {
                what: format!("rhs length {} does not match system size {}", rhs.len(), n),
            });
        }

        let mut c_prime = DVector::zeros(n);
        let mut d_prime = DVector::zeros(n);

        let mut pivot = self.diag[0];
        if !pivot.is_finite() || pivot.abs() < f64::MIN_POSITIVE {
            return Err(SolverError::SingularSystem { row: 0 });
        }
        c_prime[0] = self.upper[0] / pivot;
        d_prime[0] = rhs[0] / pivot;

        for i in 1..n {
            pivot = self.diag[i] - self.lower[i] * c_prime[i - 1];
            if !pivot.is_finite() || pivot.abs() < f64::MIN_POSITIVE {
                return Err(SolverError::SingularSystem { row: i });
            }
            c_prime[i] = self.upper[i] / pivot;
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / pivot;
        }

        let mut x = DVector::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        Ok(x)
    }
}
