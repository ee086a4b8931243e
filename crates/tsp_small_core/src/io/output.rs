use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::{Error, Result, SolveReport, SolverOptions};

/// Writes every report to `--output`, or stdout when unset.
pub fn write_reports(reports: &[SolveReport], options: &SolverOptions) -> Result<()> {
    match options.output_path() {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::other(format!(
                    "failed to create output file {}: {e}",
                    path.display()
                ))
            })?;
            let mut out = BufWriter::new(file);
            render_reports(&mut out, reports)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_reports(&mut out, reports)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// One `# <algorithm> weight=<w>` header per report, then one `x,y` line per
/// point in tour order.
pub(crate) fn render_reports<W: Write>(out: &mut W, reports: &[SolveReport]) -> Result<()> {
    for report in reports {
        let mut weight = ryu::Buffer::new();
        writeln!(
            out,
            "# {} weight={}",
            report.algorithm,
            weight.format(report.tour.weight)
        )?;
        for point in &report.tour.path {
            writeln!(out, "{point}")?;
        }
    }
    Ok(())
}
