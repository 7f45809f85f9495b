//! One-shot solve entrypoints for both schemes and the `PoissonBVP` facade.
//!
//! A single solve is build -> direct solve -> embed: the tridiagonal system
//! is assembled, handed to the solver depot, and the unknowns are embedded
//! between the boundary values. The boundary entries of the returned arrays
//! are set to U0/U1 exactly, never recomputed from the scheme.
use crate::Utils::logger::save_solution_to_file;
use crate::Utils::plots::plot_solution;
use crate::numerical::assembly::{BvpError, Grid1D, SchemeKind, assemble_on_grid};
use crate::somelinalg::tridiagonal::{LinearSolverMethod, solve_linear_system};
use log::info;
use nalgebra::DVector;

/// vectorized source term f(x)
pub type SourceFn = Box<dyn Fn(&DVector<f64>) -> DVector<f64>>;

fn solve_on_grid<F>(
    grid: &Grid1D,
    f: &F,
    U0: f64,
    U1: f64,
    method: LinearSolverMethod,
) -> Result<DVector<f64>, BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let (A, b) = assemble_on_grid(grid, f, U0, U1);
    solve_linear_system(method, &A, &b).ok_or_else(|| {
        BvpError::SingularSystem(format!(
            "direct solve failed for {} with N = {}",
            grid.scheme.name(),
            grid.n
        ))
    })
}

/// Embeds the solved unknowns between the boundary values.
/// The first and last entries are U0 and U1 exactly.
fn embed_solution(grid: &Grid1D, u_inner: &DVector<f64>, U0: f64, U1: f64) -> DVector<f64> {
    let m = u_inner.len();
    let mut u = DVector::zeros(m + 2);
    u[0] = U0;
    for i in 0..m {
        u[i + 1] = u_inner[i];
    }
    u[m + 1] = U1;
    u
}

/// Solves -u''(x) = f(x), u(0)=U0, u(1)=U1 by centered finite differences.
///
/// Returns `(u, x)` of length N+1 with x = linspace(0, 1, N+1).
/// Fails with `InvalidArgument` for N < 2 and `SingularSystem` if the
/// direct solve breaks down.
pub fn solve<F>(f: &F, n: usize, U0: f64, U1: f64) -> Result<(DVector<f64>, DVector<f64>), BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    solve_with_method(f, n, U0, U1, LinearSolverMethod::Thomas)
}

pub fn solve_with_method<F>(
    f: &F,
    n: usize,
    U0: f64,
    U1: f64,
    method: LinearSolverMethod,
) -> Result<(DVector<f64>, DVector<f64>), BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let grid = Grid1D::new(SchemeKind::CenteredFD, n)?;
    let u_inner = solve_on_grid(&grid, f, U0, U1, method)?;
    let u = embed_solution(&grid, &u_inner, U0, U1);
    let x = grid.full_nodes();
    Ok((u, x))
}

/// Solves the same problem by finite volumes.
///
/// Returns `(u_full, x_full, u_centers, x_centers)`: the embedded arrays of
/// length N+2 (boundaries plus cell centers) and the center-only pair of
/// length N. Error measurement belongs on the centers: the face values were
/// never solved for.
pub fn solve_vf<F>(
    f: &F,
    n: usize,
    U0: f64,
    U1: f64,
) -> Result<(DVector<f64>, DVector<f64>, DVector<f64>, DVector<f64>), BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    solve_vf_with_method(f, n, U0, U1, LinearSolverMethod::Thomas)
}

pub fn solve_vf_with_method<F>(
    f: &F,
    n: usize,
    U0: f64,
    U1: f64,
    method: LinearSolverMethod,
) -> Result<(DVector<f64>, DVector<f64>, DVector<f64>, DVector<f64>), BvpError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let grid = Grid1D::new(SchemeKind::FiniteVolume, n)?;
    let u_centers = solve_on_grid(&grid, f, U0, U1, method)?;
    let x_centers = grid.unknown_nodes();
    let u_full = embed_solution(&grid, &u_centers, U0, U1);
    let x_full = grid.full_nodes();
    Ok((u_full, x_full, u_centers, x_centers))
}

/// General api over both schemes: holds the problem definition, runs the
/// solve, keeps the result for plotting and saving.
pub struct PoissonBVP {
    pub scheme: SchemeKind,
    pub n: usize,
    pub U0: f64,
    pub U1: f64,
    pub source: SourceFn,
    pub linear_sys_method: Option<LinearSolverMethod>, // None - Thomas by default
    result: Option<(DVector<f64>, DVector<f64>)>,
}

impl PoissonBVP {
    pub fn new(
        scheme: SchemeKind,
        n: usize,
        U0: f64,
        U1: f64,
        source: SourceFn,
        linear_sys_method: Option<LinearSolverMethod>,
    ) -> PoissonBVP {
        PoissonBVP {
            scheme,
            n,
            U0,
            U1,
            source,
            linear_sys_method,
            result: None,
        }
    }

    pub fn solve(&mut self) -> Result<(), BvpError> {
        let method = self.linear_sys_method.unwrap_or(LinearSolverMethod::Thomas);
        info!(
            "solving -u'' = f by {} with N = {}",
            self.scheme.name(),
            self.n
        );
        let (u, x) = match self.scheme {
            SchemeKind::CenteredFD => {
                solve_with_method(&self.source, self.n, self.U0, self.U1, method)?
            }
            SchemeKind::FiniteVolume => {
                let (u_full, x_full, _, _) =
                    solve_vf_with_method(&self.source, self.n, self.U0, self.U1, method)?;
                (u_full, x_full)
            }
        };
        self.result = Some((u, x));
        Ok(())
    }

    pub fn get_result(&self) -> Option<(DVector<f64>, DVector<f64>)> {
        self.result.clone()
    }

    pub fn plot_result(&self) {
        if let Some((u, x)) = &self.result {
            plot_solution("u", x, u, None);
        }
    }

    pub fn save_to_file(&self, filename: Option<String>) {
        if let Some((u, x)) = &self.result {
            let filename = filename.unwrap_or_else(|| "poisson_solution.txt".to_string());
            if let Err(e) = save_solution_to_file(&filename, x, u) {
                info!("could not save solution: {}", e);
            }
        }
    }
}
