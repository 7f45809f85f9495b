//! Direct solvers for the assembled systems.
//!
//! The discretization matrices are symmetric tridiagonal, so the default
//! path extracts the three diagonals from the dense matrix and runs Thomas
//! elimination in O(n). A generic dense LU (nalgebra) is kept as a fallback
//! for cross-checking. Both report singularity through `None` so the caller
//! decides how to surface it.
use nalgebra::{DMatrix, DVector};

/// Enumeration of available linear solvers for one tridiagonal system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearSolverMethod {
    /// O(n) elimination on the three diagonals (default)
    Thomas,
    /// nalgebra dense LU with partial pivoting
    DenseLU,
}

/// The three diagonals of a square tridiagonal matrix.
/// `sub[0]` and `sup[m-1]` are unused and kept at zero.
pub struct Tridiagonal {
    pub sub: DVector<f64>,
    pub diag: DVector<f64>,
    pub sup: DVector<f64>,
}

impl Tridiagonal {
    /// Extracts the band from a dense matrix. Entries outside the band are
    /// ignored; the assembly never produces any.
    pub fn from_dense(A: &DMatrix<f64>) -> Tridiagonal {
        let m = A.nrows();
        assert!(A.is_square(), "matrix must be square");
        let mut sub = DVector::zeros(m);
        let mut diag = DVector::zeros(m);
        let mut sup = DVector::zeros(m);
        for i in 0..m {
            diag[i] = A[(i, i)];
            if i > 0 {
                sub[i] = A[(i, i - 1)];
            }
            if i < m - 1 {
                sup[i] = A[(i, i + 1)];
            }
        }
        Tridiagonal { sub, diag, sup }
    }

    /// Thomas elimination: forward sweep with the running pivot, then back
    /// substitution. Returns `None` on an exactly zero pivot (singular
    /// band); NaN/Inf in `b` flow through to the returned vector.
    pub fn solve(&self, b: &DVector<f64>) -> Option<DVector<f64>> {
        let m = self.diag.len();
        assert_eq!(m, b.len(), "rhs dimension mismatch");
        let mut c = DVector::zeros(m);
        let mut d = DVector::zeros(m);
        if self.diag[0] == 0.0 {
            return None;
        }
        c[0] = self.sup[0] / self.diag[0];
        d[0] = b[0] / self.diag[0];
        for i in 1..m {
            let pivot = self.diag[i] - self.sub[i] * c[i - 1];
            if pivot == 0.0 {
                return None;
            }
            if i < m - 1 {
                c[i] = self.sup[i] / pivot;
            }
            d[i] = (b[i] - self.sub[i] * d[i - 1]) / pivot;
        }
        let mut x = DVector::zeros(m);
        x[m - 1] = d[m - 1];
        for i in (0..m - 1).rev() {
            x[i] = d[i] - c[i] * x[i + 1];
        }
        Some(x)
    }
}

/// Dispatcher over the solver depot. `None` means the underlying solve
/// found the matrix singular.
pub fn solve_linear_system(
    method: LinearSolverMethod,
    A: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Option<DVector<f64>> {
    match method {
        LinearSolverMethod::Thomas => Tridiagonal::from_dense(A).solve(b),
        LinearSolverMethod::DenseLU => A.clone().lu().solve(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::relative_eq;

    fn model_system(m: usize) -> (DMatrix<f64>, DVector<f64>) {
        // the FD model matrix with a smooth rhs
        let mut A = DMatrix::zeros(m, m);
        for i in 0..m {
            A[(i, i)] = 2.0;
            if i > 0 {
                A[(i, i - 1)] = -1.0;
            }
            if i < m - 1 {
                A[(i, i + 1)] = -1.0;
            }
        }
        let b = DVector::from_fn(m, |i, _| ((i + 1) as f64).sin());
        (A, b)
    }

    #[test]
    fn test_thomas_against_dense_lu() {
        for m in [1usize, 2, 5, 50, 500] {
            let (A, b) = model_system(m);
            let x_thomas = solve_linear_system(LinearSolverMethod::Thomas, &A, &b).unwrap();
            let x_lu = solve_linear_system(LinearSolverMethod::DenseLU, &A, &b).unwrap();
            let diff = (&x_thomas - &x_lu).norm();
            let scale = x_lu.norm().max(1.0);
            assert!(
                relative_eq!(diff / scale, 0.0, epsilon = 1e-9),
                "m = {}: Thomas and dense LU disagree by {}",
                m,
                diff
            );
            // residual at machine precision relative to the solution scale
            let res = (&A * &x_thomas - &b).norm();
            assert!(res < 1e-10 * x_thomas.norm().max(1.0), "m = {}: residual {}", m, res);
        }
    }

    #[test]
    fn test_singular_band_returns_none() {
        // rank-deficient: second row is the negation of the first
        let A = DMatrix::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert!(Tridiagonal::from_dense(&A).solve(&b).is_none());
        assert!(solve_linear_system(LinearSolverMethod::DenseLU, &A, &b).is_none());
    }

    #[test]
    fn test_zero_diagonal_returns_none() {
        let A = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        assert!(Tridiagonal::from_dense(&A).solve(&b).is_none());
    }

    #[test]
    fn test_nan_rhs_propagates() {
        let (A, mut b) = model_system(5);
        b[2] = f64::NAN;
        let x = solve_linear_system(LinearSolverMethod::Thomas, &A, &b).unwrap();
        assert!(x.iter().any(|v| v.is_nan()));
    }

    #[test]
    fn test_band_extraction() {
        let (A, _) = model_system(4);
        let t = Tridiagonal::from_dense(&A);
        assert_eq!(t.diag, DVector::from_element(4, 2.0));
        assert_eq!(t.sub[0], 0.0);
        assert_eq!(t.sub[2], -1.0);
        assert_eq!(t.sup[3], 0.0);
        assert_eq!(t.sup[1], -1.0);
    }
}
