use std::{fmt, fs::File, io::Write};

use env_logger::{Builder, Target, WriteStyle};
use log::Record;

use crate::options::{LogFormat, SolverOptions};
use crate::{Error, Result};

/// Installs the global logger described by the `--log-*` options.
pub fn init_logger(options: &SolverOptions) -> Result<()> {
    build_logger(options)?
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn build_logger(options: &SolverOptions) -> Result<Builder> {
    let style = LineStyle {
        format: options.log_format,
        timestamp: options.log_timestamp,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(WriteStyle::Never)
        .target(log_target(options)?)
        .format(move |buf, record| {
            if style.timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{}", style.line(record))
        });

    Ok(builder)
}

fn log_target(options: &SolverOptions) -> Result<Target> {
    let Some(path) = options.log_output_path() else {
        return Ok(Target::Stderr);
    };
    let file = File::create(path).map_err(|e| {
        Error::other(format!(
            "failed to create log output file {}: {e}",
            path.display()
        ))
    })?;
    Ok(Target::Pipe(Box::new(file)))
}

#[derive(Clone, Copy)]
struct LineStyle {
    format: LogFormat,
    timestamp: bool,
}

impl LineStyle {
    fn line<'a>(self, record: &'a Record<'a>) -> Line<'a> {
        Line {
            format: self.format,
            record,
        }
    }
}

/// Everything after the timestamp: `LEVEL msg` or `LEVEL [target] msg`.
struct Line<'a> {
    format: LogFormat,
    record: &'a Record<'a>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.record.level().as_str();
        match self.format {
            LogFormat::Compact => write!(f, "{level} {}", self.record.args()),
            LogFormat::Pretty => write!(
                f,
                "{level} [{}] {}",
                self.record.target(),
                self.record.args()
            ),
        }
    }
}
