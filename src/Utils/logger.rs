use crate::numerical::convergence::ConvergenceReport;
use chrono::Local;
use csv::Writer;
use nalgebra::DVector;
use std::fs::File;
use std::io::{self, Write as IoWrite};

/// Saves a solution as a tab-separated table "x \t u", one mesh point per
/// line, with a timestamp header.
pub fn save_solution_to_file(
    filename: &str,
    x: &DVector<f64>,
    u: &DVector<f64>,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "# saved {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "x\tu")?;
    for (xi, ui) in x.iter().zip(u.iter()) {
        writeln!(file, "{}\t{}", xi, ui)?;
    }
    Ok(())
}

/// Saves a convergence study as csv: one row per mesh size, empty order
/// cell where the order is undefined.
pub fn save_convergence_to_csv(report: &ConvergenceReport, filename: &str) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["N", "h", "error", "order"])?;
    for rec in &report.records {
        let order = match rec.order {
            Some(p) => p.to_string(),
            None => String::new(),
        };
        writer.write_record(&[
            rec.n.to_string(),
            rec.h.to_string(),
            rec.error.to_string(),
            order,
        ])?;
    }
    writer.write_record(&[
        "mean".to_string(),
        String::new(),
        String::new(),
        report.mean_order.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}
