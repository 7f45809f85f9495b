#![allow(non_snake_case)]
use RustedPoisson1D::Utils::logger::save_convergence_to_csv;
use RustedPoisson1D::Utils::plots::{plot_convergence, plot_solution};
use RustedPoisson1D::numerical::Examples_and_utils::TestProblem;
use RustedPoisson1D::numerical::assembly::SchemeKind;
use RustedPoisson1D::numerical::convergence::analyze_convergence;
use RustedPoisson1D::numerical::solver_api::{PoissonBVP, SourceFn, solve, solve_vf};
use log::info;
use nalgebra::DVector;
use simplelog::*;
use std::f64::consts::PI;

fn main() {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let example = 4;
    match example {
        1 => {
            // centered finite differences on the classical sin test
            let f = |x: &DVector<f64>| x.map(|xi| PI * PI * (PI * xi).sin());
            let (u, x) = solve(&f, 100, 0.0, 0.0).unwrap();
            let u_exact = x.map(|xi| (PI * xi).sin());
            plot_solution("u_fd", &x, &u, Some(&u_exact));
            info!("FD solve done, {} mesh points", u.len());
        }
        2 => {
            // finite volumes on the same problem, plotted with the
            // boundary values embedded around the cell centers
            let f = |x: &DVector<f64>| x.map(|xi| PI * PI * (PI * xi).sin());
            let (u_full, x_full, _, _) = solve_vf(&f, 100, 0.0, 0.0).unwrap();
            plot_solution("u_fv", &x_full, &u_full, None);
            info!("FV solve done, {} mesh points", u_full.len());
        }
        3 => {
            // the same through the general api, saved to a text file
            let source: SourceFn = Box::new(|x: &DVector<f64>| x.map(|xi| 2.0 * xi + 1.0));
            let mut bvp = PoissonBVP::new(SchemeKind::CenteredFD, 200, 0.0, 0.0, source, None);
            bvp.solve().unwrap();
            bvp.plot_result();
            bvp.save_to_file(None);
        }
        4 => {
            // convergence study for both schemes over a doubling mesh
            // sequence, printed as a table and saved as csv and png
            let n_values = [10usize, 20, 40, 80, 160, 320];
            for scheme in [SchemeKind::CenteredFD, SchemeKind::FiniteVolume] {
                let case = TestProblem::SinPiX.case();
                let report = analyze_convergence(scheme, &case, &n_values).unwrap();
                println!("{}", report.table());
                let tag = match scheme {
                    SchemeKind::CenteredFD => "fd",
                    SchemeKind::FiniteVolume => "fv",
                };
                save_convergence_to_csv(&report, &format!("convergence_{}.csv", tag)).unwrap();
                plot_convergence(&report, &format!("convergence_{}.png", tag));
            }
        }
        5 => {
            // exact polynomial reproduction: errors at roundoff, mean
            // order reported as the 0.0 sentinel
            let case = TestProblem::Cubic.case();
            let report =
                analyze_convergence(SchemeKind::CenteredFD, &case, &[10, 20, 40]).unwrap();
            println!("{}", report.table());
        }
        _ => {
            println!("no such example");
        }
    }
}
