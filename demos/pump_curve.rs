//! Fit head and efficiency curves for a pump data sheet.
//!
//! The sheet layout is a name line, a column header line, a units line, then
//! one `flow head efficiency` row per line.
//!
//! Run with: `RUST_LOG=debug cargo run --example pump_curve`

use pumpfit::prelude::*;

const SHEET: &str = "\
Goulds 3196 MTX 3x4-8
Flow Head Efficiency
gpm ft %
0 115.0 0.0
100 114.0 23.0
200 112.0 40.5
300 107.5 52.5
400 100.5 61.0
500 91.0 66.0
600 79.5 67.5
700 66.0 65.0
800 50.0 58.0
";

fn parse_sheet(text: &str) -> Option<PumpData<f64>> {
    let mut lines = text.lines();
    let name = lines.next()?.trim();
    let _header = lines.next()?;
    let mut units = lines.next()?.split_whitespace();
    let mut data = PumpData::new(name, units.next()?, units.next()?);

    for line in lines.filter(|l| !l.trim().is_empty()) {
        let cells: Vec<f64> = line
            .split_whitespace()
            .map(|c| c.parse().ok())
            .collect::<Option<_>>()?;
        if cells.len() < 3 {
            return None;
        }
        data.push(cells[0], cells[1], cells[2]);
    }
    Some(data)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data = parse_sheet(SHEET).ok_or("malformed pump data sheet")?;
    let curve = PumpCurve::fit(&data)?;

    println!("Pump: {}", curve.name());
    println!(
        "Head coefficients ({} vs {}): {}",
        curve.head_units(),
        curve.flow_units(),
        curve.head_coefficients()
    );
    println!("Efficiency coefficients: {}", curve.efficiency_coefficients());
    println!(
        "R²: head {:.4}, efficiency {:.4}",
        curve.head_r_squared(),
        curve.efficiency_r_squared()
    );

    println!();
    println!("{:>8} {:>10} {:>10}", curve.flow_units(), curve.head_units(), "%");
    let head = curve.head_curve();
    let eff = curve.efficiency_curve();
    for i in (0..head.len()).step_by(11) {
        println!("{:>8.1} {:>10.2} {:>10.2}", head.x[i], head.y[i], eff.y[i]);
    }

    // Same data, fixed-point coefficients and a straight-line head fit.
    let coarse = PumpCurveBuilder::new()
        .head_degree(Linear)
        .coefficient_format(CoefficientFormat::Fixed)
        .precision(3)
        .build()?
        .fit(&data)?;
    println!();
    println!(
        "Linear head fit: {} (R² {:.4})",
        coarse.head_coefficients(),
        coarse.head_r_squared()
    );

    let fitter = PolyFit::new().degree(Quadratic).build()?;
    let model = fitter.fit(&data.flow, &data.head)?;
    print!("{}", fitter.diagnostics(&model, &data.flow, &data.head)?);

    Ok(())
}
