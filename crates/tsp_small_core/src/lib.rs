//! Exact and greedy TSP on small planar point sets.
//! Brute force enumerates every visiting order in lexicographic order; the
//! nearest-neighbor heuristic walks greedily from the first point.

mod algo;
mod error;
mod geo;
mod io;
pub mod logging;
mod node;
mod tour;
mod utils;

pub(crate) use geo::geometry;
pub(crate) use io::options;

pub use algo::brute_force::{tsp_brute_force, tsp_brute_force_with_cancel};
pub use algo::nearest_neighbor::{nearest_neighbor_tsp, nearest_neighbor_tsp_with_cancel};
pub use algo::permutation::next_permutation;
pub use algo::solver::{SolveReport, solve};
pub use error::{Error, Result};
pub use geo::geometry::{distance, path_weight};
pub use io::input::{InputSource, SolverInput};
pub use io::options::{Algorithm, LogFormat, LogLevel, SolverOptions};
pub use io::output::write_reports;
pub use node::Point;
pub use tour::{TourMetrics, TourResult};
