use std::time::{Duration, Instant};

use tsp_small_derive::New;

use crate::{
    Error, Result, SolverInput, TourResult,
    algo::{brute_force::tsp_brute_force, nearest_neighbor::nearest_neighbor_tsp},
    options::{Algorithm, SolverOptions},
};

/// One solver run: which algorithm produced `tour` and how long it took.
#[derive(Clone, Debug, New)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub tour: TourResult,
    pub elapsed: Duration,
}

/// Runs the algorithm(s) selected in `options` on `input`.
///
/// Reports come back brute force first. With [`Algorithm::Both`] the two
/// solvers run side by side on the rayon pool.
#[tsp_small_derive::timer("solve")]
pub fn solve(input: &SolverInput, options: &SolverOptions) -> Result<Vec<SolveReport>> {
    let n = input.n();
    let algorithm = options.algorithm;

    if algorithm.runs_brute_force() && n > options.max_brute_force_points {
        return Err(Error::invalid_input(format!(
            "brute force limited to {} points, got {n} (raise --max-brute-force-points or use --algorithm nearest-neighbor)",
            options.max_brute_force_points
        )));
    }

    log::info!("solver: start n={n} algorithm={algorithm}");

    let reports = match algorithm {
        Algorithm::BruteForce => vec![run_brute_force(input)?],
        Algorithm::NearestNeighbor => vec![run_nearest_neighbor(input)?],
        Algorithm::Both => {
            let (exact, greedy) =
                rayon::join(|| run_brute_force(input), || run_nearest_neighbor(input));
            let (exact, greedy) = (exact?, greedy?);
            log_gap(&exact.tour, &greedy.tour);
            vec![exact, greedy]
        }
    };

    log::info!("solver: complete runs={}", reports.len());
    Ok(reports)
}

fn run_brute_force(input: &SolverInput) -> Result<SolveReport> {
    timed(Algorithm::BruteForce, || {
        tsp_brute_force(input.n(), input.points())
    })
}

fn run_nearest_neighbor(input: &SolverInput) -> Result<SolveReport> {
    timed(Algorithm::NearestNeighbor, || {
        nearest_neighbor_tsp(input.n(), input.points())
    })
}

fn timed<F>(algorithm: Algorithm, run: F) -> Result<SolveReport>
where
    F: FnOnce() -> Result<TourResult>,
{
    let start = Instant::now();
    let tour = run()?;
    let elapsed = start.elapsed();
    log::info!(
        "solver.{algorithm}: weight={:.6} time={:.3}s",
        tour.weight,
        elapsed.as_secs_f64()
    );
    Ok(SolveReport::new(algorithm, tour, elapsed))
}

fn log_gap(optimal: &TourResult, heuristic: &TourResult) {
    if optimal.weight > 0.0 {
        let gap = (heuristic.weight - optimal.weight) / optimal.weight * 100.0;
        log::info!("solver: nearest-neighbor gap={gap:.2}%");
    }
}
