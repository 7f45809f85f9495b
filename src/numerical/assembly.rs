//! # Mesh and linear system assembly
//!
//! Both discretizations of -u''(x) = f(x) lead to a symmetric tridiagonal
//! system. The finite-difference scheme places N-1 unknowns at the interior
//! nodes x_i = i*h, the finite-volume scheme places N unknowns at the cell
//! centers x_i = (i + 1/2)*h. One parametrized assembly loop covers both,
//! selected by [`SchemeKind`].
use nalgebra::{DMatrix, DVector};
use std::fmt;

/// Error taxonomy of the solver core.
///
/// `InvalidArgument` is raised before any computation (bad mesh size),
/// `SingularSystem` when the direct solve cannot find a unique solution.
/// NaN/Inf coming out of a pathological source function is deliberately
/// NOT an error: it propagates into the solution vector.
#[derive(Debug, Clone, PartialEq)]
pub enum BvpError {
    InvalidArgument(String),
    SingularSystem(String),
}

impl fmt::Display for BvpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BvpError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BvpError::SingularSystem(msg) => write!(f, "Singular system: {}", msg),
        }
    }
}

impl std::error::Error for BvpError {}

/// Discretization scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// centered second difference at the mesh nodes, exact for polynomials
    /// up to degree 3
    CenteredFD,
    /// conservative flux balance over control volumes, boundary fluxes
    /// taken over the half cell next to each end
    FiniteVolume,
}

impl SchemeKind {
    /// Minimum admissible number of subdivisions. FD needs at least one
    /// interior node (N >= 2), FV accepts the single-cell mesh (N >= 1).
    pub fn min_subdivisions(&self) -> usize {
        match self {
            SchemeKind::CenteredFD => 2,
            SchemeKind::FiniteVolume => 1,
        }
    }
    /// Number of unknowns of the linear system for N subdivisions.
    pub fn unknowns(&self, n: usize) -> usize {
        match self {
            SchemeKind::CenteredFD => n - 1,
            SchemeKind::FiniteVolume => n,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::CenteredFD => "centered finite differences",
            SchemeKind::FiniteVolume => "finite volumes",
        }
    }
}

/// Uniform mesh on [0,1] with N subdivisions, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct Grid1D {
    pub n: usize,
    pub h: f64,
    pub scheme: SchemeKind,
}

impl Grid1D {
    /// Validates N against the per-scheme minimum before anything is
    /// allocated.
    pub fn new(scheme: SchemeKind, n: usize) -> Result<Grid1D, BvpError> {
        let n_min = scheme.min_subdivisions();
        if n < n_min {
            return Err(BvpError::InvalidArgument(format!(
                "N = {} is too small for {}: N must be at least {}",
                n,
                scheme.name(),
                n_min
            )));
        }
        Ok(Grid1D {
            n,
            h: 1.0 / (n as f64),
            scheme,
        })
    }

    /// Locations of the unknowns: interior nodes for FD, cell centers for FV.
    pub fn unknown_nodes(&self) -> DVector<f64> {
        let h = self.h;
        match self.scheme {
            SchemeKind::CenteredFD => {
                DVector::from_fn(self.n - 1, |i, _| ((i + 1) as f64) * h)
            }
            SchemeKind::FiniteVolume => {
                DVector::from_fn(self.n, |i, _| (i as f64 + 0.5) * h)
            }
        }
    }

    /// Full coordinate vector of the assembled solution: the N+1 mesh nodes
    /// for FD, boundary points plus the N cell centers (length N+2) for FV.
    pub fn full_nodes(&self) -> DVector<f64> {
        match self.scheme {
            SchemeKind::CenteredFD => {
                let h = self.h;
                DVector::from_fn(self.n + 1, |i, _| (i as f64) * h)
            }
            SchemeKind::FiniteVolume => {
                let centers = self.unknown_nodes();
                let mut x = DVector::zeros(self.n + 2);
                x[0] = 0.0;
                for i in 0..self.n {
                    x[i + 1] = centers[i];
                }
                x[self.n + 1] = 1.0;
                x
            }
        }
    }
}

/// Assembles the tridiagonal system (A, b) for the given scheme.
///
/// Row pattern (0-indexed, m unknowns):
/// - diagonal 2, sub/super-diagonal -1 where the neighbor exists,
///   rhs = h^2 * f(x_i);
/// - FD end rows: + U0 to rhs[0], + U1 to rhs[m-1];
/// - FV end rows: the boundary face flux spans the half cell h/2, which
///   adds +1 to the diagonal and +2*U0 (resp. +2*U1) to the rhs. The
///   single-cell mesh (N=1) falls out of the same loop: diag 4,
///   rhs = h^2*f(1/2) + 2*U0 + 2*U1.
///
/// The FD mesh N=2 collapses to one unknown and is emitted directly as
/// A = [[2]], b = [h^2*f(1/2) + U0 + U1]: the general loop would have to
/// patch both boundary contributions into a single overlapping row.
///
/// U0/U1 are passed through unvalidated; NaN/Inf in f lands in b untouched.
pub fn assemble_system<F>(
    scheme: SchemeKind,
    f: &F,
    n: usize,
    U0: f64,
    U1: f64,
) -> Result<(DMatrix<f64>, DVector<f64>), BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let grid = Grid1D::new(scheme, n)?;
    Ok(assemble_on_grid(&grid, f, U0, U1))
}

/// Assembly on an already validated grid.
pub fn assemble_on_grid<F>(grid: &Grid1D, f: &F, U0: f64, U1: f64) -> (DMatrix<f64>, DVector<f64>)
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let h = grid.h;
    let h2 = h * h;
    let nodes = grid.unknown_nodes();
    let m = nodes.len();
    let f_nodes = f(&nodes);

    if grid.scheme == SchemeKind::CenteredFD && m == 1 {
        // degenerate FD mesh N=2: both boundaries touch the single unknown
        let A = DMatrix::from_element(1, 1, 2.0);
        let b = DVector::from_element(1, h2 * f_nodes[0] + U0 + U1);
        return (A, b);
    }

    let mut A = DMatrix::zeros(m, m);
    let mut b = DVector::zeros(m);
    for i in 0..m {
        A[(i, i)] = 2.0;
        if i > 0 {
            A[(i, i - 1)] = -1.0;
        }
        if i < m - 1 {
            A[(i, i + 1)] = -1.0;
        }
        b[i] = h2 * f_nodes[i];
        match grid.scheme {
            SchemeKind::CenteredFD => {
                if i == 0 {
                    b[i] += U0;
                }
                if i == m - 1 {
                    b[i] += U1;
                }
            }
            SchemeKind::FiniteVolume => {
                // half-cell boundary flux
                if i == 0 {
                    A[(i, i)] += 1.0;
                    b[i] += 2.0 * U0;
                }
                if i == m - 1 {
                    A[(i, i)] += 1.0;
                    b[i] += 2.0 * U1;
                }
            }
        }
    }
    (A, b)
}
