use std::{env, path::Path};

use log::LevelFilter;
use tsp_small_derive::{CliOptions, CliValue, KvDisplay};

use crate::{Error, Result};

/// Runtime options for the solver driver.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct SolverOptions {
    /// Which solver(s) to run: `brute-force`, `nearest-neighbor`, or `both`.
    #[cli(long = "algorithm", parse_with = "Algorithm::parse")]
    pub algorithm: Algorithm,
    /// Largest point count brute force will accept.
    #[cli(long = "max-brute-force-points")]
    pub max_brute_force_points: usize,
    /// Generate this many random points instead of reading input.
    #[cli(long = "random-points")]
    #[kv(fmt = "opt")]
    pub random_points: Option<usize>,
    /// Seed for random point generation.
    #[cli(long = "seed")]
    pub seed: u64,
    /// Random points are drawn from `[0, coordinate_range)` on both axes.
    #[cli(long = "coordinate-range")]
    pub coordinate_range: f64,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[cli(long = "log-timestamp", flag)]
    pub log_timestamp: bool,
    /// Optional output file path for logs and metrics. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
    /// Optional input file path for points. Empty means stdin.
    #[cli(long = "input")]
    pub input: String,
    /// Optional output file path for tours. Empty means stdout.
    #[cli(long = "output")]
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "algorithm")]
pub enum Algorithm {
    #[cli(alias = "bf", alias = "exact")]
    BruteForce,
    #[cli(alias = "nn", alias = "greedy")]
    NearestNeighbor,
    Both,
}

impl Algorithm {
    pub fn runs_brute_force(self) -> bool {
        matches!(self, Self::BruteForce | Self::Both)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Both,
            max_brute_force_points: 10,
            random_points: None,
            seed: 999,
            coordinate_range: 100.0,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            input: String::new(),
            output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);

            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        if self.random_points == Some(0) {
            return Err(Error::invalid_input("--random-points must be > 0"));
        }
        if !(self.coordinate_range.is_finite() && self.coordinate_range > 0.0) {
            return Err(Error::invalid_input(
                "--coordinate-range must be a finite value > 0",
            ));
        }
        Ok(())
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-small [options] [--input points.txt]\n",
            "  tsp-small [options] < points.txt\n",
            "  tsp-small [options] --random-points <n>\n\n",
            "Options:\n",
            "  --algorithm <brute-force|nearest-neighbor|both>\n",
            "  --max-brute-force-points <usize>\n",
            "  --random-points <usize>\n",
            "  --seed <u64>\n",
            "  --coordinate-range <f64>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --help\n",
            "\n",
            "Input is whitespace separated x,y tokens.\n",
            "\n",
            "Examples:\n",
            "  tsp-small --algorithm=brute-force < points.txt\n",
            "  tsp-small --input points.txt --output tours.txt\n",
            "  tsp-small --random-points 9 --seed 7 --log-level=info\n",
            "  tsp-small --algorithm=nn --log-level=debug --log-format=pretty < points.txt\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        non_stdio_path(&self.input)
    }
}

/// Empty and `-` select the standard stream.
fn non_stdio_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}
