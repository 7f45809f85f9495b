/// a collection of test cases with known exact solutions of
/// -u''(x) = f(x), used for validation of both schemes
use crate::numerical::convergence::TestCase;
use nalgebra::DVector;
use std::f64::consts::PI;
use strum_macros::EnumIter;

// EXACT SOLUTIONS USED FOR VALIDATION
//
// u(x) = sin(pi*x):              f(x) = pi^2*sin(pi*x),  u(0)=0, u(1)=0
// u(x) = x^3:                    f(x) = -6x,             u(0)=0, u(1)=1
// u(x) = x^2:                    f(x) = -2,              u(0)=0, u(1)=1
// u(x) = 1 + 2x:                 f(x) = 0,               u(0)=1, u(1)=3
// u(x) = -x^3/3 - x^2/2 + 5x/6:  f(x) = 2x + 1,          u(0)=0, u(1)=0
//
// the polynomial cases up to degree 3 are reproduced exactly by centered
// finite differences (zero truncation error), which makes them probes for
// the noise-floor policy of the order computation rather than for the
// order itself
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter)]
pub enum TestProblem {
    SinPiX,
    Cubic,
    Quadratic,
    LinearProfile,
    PolySource,
}

impl TestProblem {
    pub fn name(&self) -> &'static str {
        match self {
            TestProblem::SinPiX => "u(x) = sin(pi*x)",
            TestProblem::Cubic => "u(x) = x^3",
            TestProblem::Quadratic => "u(x) = x^2",
            TestProblem::LinearProfile => "u(x) = 1 + 2x",
            TestProblem::PolySource => "f(x) = 2x + 1",
        }
    }

    pub fn boundary_values(&self) -> (f64, f64) {
        match self {
            TestProblem::SinPiX => (0.0, 0.0),
            TestProblem::Cubic => (0.0, 1.0),
            TestProblem::Quadratic => (0.0, 1.0),
            TestProblem::LinearProfile => (1.0, 3.0),
            TestProblem::PolySource => (0.0, 0.0),
        }
    }

    pub fn source_term(&self, x: &DVector<f64>) -> DVector<f64> {
        match self {
            TestProblem::SinPiX => x.map(|xi| PI * PI * (PI * xi).sin()),
            TestProblem::Cubic => x.map(|xi| -6.0 * xi),
            TestProblem::Quadratic => x.map(|_| -2.0),
            TestProblem::LinearProfile => DVector::zeros(x.len()),
            TestProblem::PolySource => x.map(|xi| 2.0 * xi + 1.0),
        }
    }

    pub fn exact_solution(&self, x: &DVector<f64>) -> DVector<f64> {
        match self {
            TestProblem::SinPiX => x.map(|xi| (PI * xi).sin()),
            TestProblem::Cubic => x.map(|xi| xi * xi * xi),
            TestProblem::Quadratic => x.map(|xi| xi * xi),
            TestProblem::LinearProfile => x.map(|xi| 1.0 + 2.0 * xi),
            TestProblem::PolySource => {
                x.map(|xi| -xi * xi * xi / 3.0 - xi * xi / 2.0 + 5.0 * xi / 6.0)
            }
        }
    }

    /// Packs the problem into the tagged record the convergence analyzer
    /// consumes.
    pub fn case(&self) -> TestCase {
        let problem = *self;
        let exact = *self;
        let (U0, U1) = self.boundary_values();
        TestCase {
            name: self.name().to_string(),
            source_fn: Box::new(move |x| problem.source_term(x)),
            exact_fn: Box::new(move |x| exact.exact_solution(x)),
            U0,
            U1,
        }
    }
}
