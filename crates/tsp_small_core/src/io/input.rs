use std::{fs, io::Read};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tsp_small_derive::KvDisplay;

use crate::{Error, Point, Result, SolverOptions};

/// Point set handed to the solvers.
#[derive(Clone, Debug, KvDisplay)]
pub struct SolverInput {
    #[kv(fmt = "len")]
    pub(crate) points: Vec<Point>,
    pub(crate) source: InputSource,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputSource {
    Stdin,
    File,
    Random,
    Memory,
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Stdin => "stdin",
            Self::File => "file",
            Self::Random => "random",
            Self::Memory => "memory",
        };
        write!(f, "{value}")
    }
}

impl SolverInput {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
            source: InputSource::Memory,
        }
    }

    /// Loads points from the source `options` select: random generation,
    /// `--input`, or stdin.
    pub fn from_options(options: &SolverOptions) -> Result<Self> {
        if let Some(count) = options.random_points {
            return Ok(Self {
                points: random_points(count, options.seed, options.coordinate_range),
                source: InputSource::Random,
            });
        }

        if let Some(path) = options.input_path() {
            let raw = fs::read_to_string(path).map_err(|e| {
                Error::invalid_input(format!("failed to read input {}: {e}", path.display()))
            })?;
            return Ok(Self {
                points: parse_points(&raw)?,
                source: InputSource::File,
            });
        }

        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(Self {
            points: parse_points(&raw)?,
            source: InputSource::Stdin,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn n(&self) -> usize {
        self.points.len()
    }
}

pub(crate) fn random_points(count: usize, seed: u64, range: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..range),
                rng.random_range(0.0..range),
            )
        })
        .collect()
}

pub(crate) fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, tok) in input.split_whitespace().enumerate() {
        let mut it = tok.split(',');
        let x_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing x", idx + 1)))?;
        let y_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing y", idx + 1)))?;

        if it.next().is_some() {
            return Err(Error::invalid_input(format!(
                "Token {}: expected 'x,y' but got extra comma fields: {tok}",
                idx + 1
            )));
        }

        let x: f64 = x_s
            .parse()
            .map_err(|_| Error::invalid_input(format!("Token {}: invalid x: {x_s}", idx + 1)))?;
        let y: f64 = y_s
            .parse()
            .map_err(|_| Error::invalid_input(format!("Token {}: invalid y: {y_s}", idx + 1)))?;

        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(Error::invalid_input(format!(
                "Token {}: coordinates must be finite: {tok}",
                idx + 1
            )));
        }
        points.push(point);
    }

    if points.is_empty() {
        return Err(Error::invalid_input("No points provided."));
    }

    Ok(points)
}
