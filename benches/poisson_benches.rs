#![allow(non_snake_case)]
use RustedPoisson1D::numerical::solver_api::{solve, solve_vf};
use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::DVector;
use std::f64::consts::PI;
use std::hint::black_box;

fn sin_source(x: &DVector<f64>) -> DVector<f64> {
    x.map(|xi| PI * PI * (PI * xi).sin())
}

fn bench_fd_solve(c: &mut Criterion) {
    for n in [100usize, 1000] {
        c.bench_function(&format!("FD solve N = {}", n), |b| {
            b.iter(|| solve(&sin_source, black_box(n), 0.0, 0.0).unwrap())
        });
    }
}

fn bench_fv_solve(c: &mut Criterion) {
    for n in [100usize, 1000] {
        c.bench_function(&format!("FV solve N = {}", n), |b| {
            b.iter(|| solve_vf(&sin_source, black_box(n), 0.0, 0.0).unwrap())
        });
    }
}

criterion_group!(benches, bench_fd_solve, bench_fv_solve);
criterion_main!(benches);
