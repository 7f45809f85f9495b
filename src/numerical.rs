//! numerical machinery for the two-point boundary value problem
//! -u''(x) = f(x) on [0,1] with Dirichlet conditions u(0)=U0, u(1)=U1
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// predefined test cases with known exact solutions
pub mod Examples_and_utils;
/// mesh and tridiagonal system assembly for both discretization schemes
pub mod assembly;
/// convergence order analysis across a sequence of mesh sizes
pub mod convergence;
/// L-infinity error between numeric and exact solutions
pub mod error_metrics;
/// one-shot solve entrypoints and the PoissonBVP facade
pub mod solver_api;
