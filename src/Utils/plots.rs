use crate::numerical::convergence::ConvergenceReport;
use nalgebra::DVector;

/// Plot the solution (and optionally the exact one) into "<varname>.png".
pub fn plot_solution(
    varname: &str,
    x: &DVector<f64>,
    u: &DVector<f64>,
    u_exact: Option<&DVector<f64>>,
) {
    use plotters::prelude::*;
    let x_min = x.min();
    let x_max = x.max();
    let mut y_min = u.min();
    let mut y_max = u.max();
    if let Some(u_ref) = u_exact {
        y_min = y_min.min(u_ref.min());
        y_max = y_max.max(u_ref.max());
    }
    if y_min == y_max {
        // flat solution, give the axis some room
        y_min -= 0.5;
        y_max += 0.5;
    }
    let filename = format!("{}.png", varname);
    let root_area = BitMapBackend::new(&filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root_area)
        .caption(varname, ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .unwrap();

    chart.configure_mesh().x_desc("x").y_desc(varname).draw().unwrap();

    let series: Vec<(f64, f64)> = x.iter().zip(u.iter()).map(|(&x, &y)| (x, y)).collect();
    chart
        .draw_series(LineSeries::new(series, &BLUE))
        .unwrap()
        .label(format!(" {} numeric", varname))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    if let Some(u_ref) = u_exact {
        let series: Vec<(f64, f64)> =
            x.iter().zip(u_ref.iter()).map(|(&x, &y)| (x, y)).collect();
        chart
            .draw_series(LineSeries::new(series, &RED))
            .unwrap()
            .label(format!(" {} exact", varname))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}

/// Log-log convergence plot of the L-inf error against N, with the
/// theoretical O(h^2) line anchored at the first point.
pub fn plot_convergence(report: &ConvergenceReport, filename: &str) {
    use plotters::prelude::*;
    let points: Vec<(f64, f64)> = report
        .records
        .iter()
        .filter(|r| r.error > 0.0)
        .map(|r| (r.n as f64, r.error))
        .collect();
    if points.len() < 2 {
        // everything at roundoff, nothing meaningful to draw
        return;
    }
    let (n0, e0) = points[0];
    let n_max = points.last().unwrap().0;
    let e_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();
    let caption = format!("{} ({})", report.case_name, report.scheme.name());
    let mut chart = ChartBuilder::on(&root_area)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (n0..n_max).log_scale(),
            (e_min * 0.5..e0 * 2.0).log_scale(),
        )
        .unwrap();
    chart
        .configure_mesh()
        .x_desc("N")
        .y_desc("L-inf error")
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(points.clone(), &BLUE))
        .unwrap()
        .label(" computed error")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    let theoretical: Vec<(f64, f64)> = points
        .iter()
        .map(|&(n, _)| (n, e0 * (n0 / n) * (n0 / n)))
        .collect();
    chart
        .draw_series(LineSeries::new(theoretical, &RED))
        .unwrap()
        .label(" O(h^2) slope")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}
