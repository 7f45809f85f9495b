//! L-infinity distance between a numeric solution and an exact one.
use nalgebra::DVector;

/// max |u_numeric - u_exact(x)| with the exact solution evaluated lazily at
/// exactly the nodes the solver used. No interpolation, no resampling.
pub fn linf_error<F>(u_numeric: &DVector<f64>, u_exact: &F, x: &DVector<f64>) -> f64
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    assert_eq!(
        u_numeric.len(),
        x.len(),
        "solution and node vectors must have equal length"
    );
    let u_ref = u_exact(x);
    (u_numeric - u_ref).amax()
}
