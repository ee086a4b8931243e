use std::time::Instant;

use log::info;

use tsp_small_core::{Result, SolverInput, SolverOptions, logging, solve, write_reports};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let input = SolverInput::from_options(&options)?;

    info!("input: {input}");
    info!("options: {options}");

    let reports = solve(&input, &options)?;
    write_reports(&reports, &options)?;

    for report in &reports {
        report.tour.metrics();
    }

    info!(
        "output: n={} runs={} time={:.2}s",
        input.n(),
        reports.len(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
