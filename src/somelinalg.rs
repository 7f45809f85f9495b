//! some linear algebra functions used throughout the code
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// direct solvers for the assembled tridiagonal systems: Thomas elimination
/// and a dense LU fallback
pub mod tridiagonal;
