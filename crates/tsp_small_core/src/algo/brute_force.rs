use crate::{
    Error, Result,
    algo::{ensure_point_count, permutation::next_permutation},
    geometry::{path_weight, resolve_path},
    node::Point,
    tour::TourResult,
};

/// Exact TSP by enumerating every visiting order of `points`.
///
/// Runs in `O(n! * n)` time and `O(n)` memory. Of several optimal orders the
/// lexicographically smallest one is returned.
pub fn tsp_brute_force(n: usize, points: &[Point]) -> Result<TourResult> {
    tsp_brute_force_with_cancel(n, points, || false)
}

/// [`tsp_brute_force`] that consults `should_stop` before scoring each
/// permutation and aborts with [`Error::Cancelled`] once it returns `true`.
pub fn tsp_brute_force_with_cancel<F>(
    n: usize,
    points: &[Point],
    mut should_stop: F,
) -> Result<TourResult>
where
    F: FnMut() -> bool,
{
    ensure_point_count(n, points)?;
    log::debug!("brute_force: start n={n}");

    let mut path: Vec<usize> = (0..n).collect();
    let mut best_path = path.clone();
    let mut best_weight = f64::INFINITY;
    let mut visited: u64 = 0;

    loop {
        if should_stop() {
            log::debug!("brute_force: cancelled after permutations={visited}");
            return Err(Error::Cancelled);
        }

        let weight = path_weight(&path, points)?;
        visited += 1;
        if weight < best_weight {
            log::trace!("brute_force: improved weight={weight} path={path:?}");
            best_weight = weight;
            best_path.copy_from_slice(&path);
        }

        if !next_permutation(&mut path) {
            break;
        }
    }

    log::debug!("brute_force: done permutations={visited} weight={best_weight}");

    Ok(TourResult::new(
        resolve_path(&best_path, points)?,
        best_path,
        best_weight,
    ))
}

#[cfg(test)]
mod tests {
    use super::{tsp_brute_force, tsp_brute_force_with_cancel};
    use crate::{Error, node::Point};

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn right_triangle_weighs_perimeter() {
        let result = tsp_brute_force(3, &triangle()).expect("solve");
        assert!((result.weight - 12.0).abs() < 1e-12);
        assert_eq!(result.order, vec![0, 1, 2]);
    }

    #[test]
    fn single_point_has_zero_weight() {
        let result = tsp_brute_force(1, &[Point::new(5.0, 5.0)]).expect("solve");
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.path, vec![Point::new(5.0, 5.0)]);
        assert_eq!(result.weight, 0.0);
    }

    #[test]
    fn square_finds_perimeter_with_first_optimal_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let result = tsp_brute_force(4, &points).expect("solve");
        assert!((result.weight - 4.0).abs() < 1e-12);
        assert_eq!(result.order, vec![0, 1, 2, 3]);
        assert_eq!(result.path, points);
    }

    #[test]
    fn keeps_first_of_tied_orders() {
        // Every order of a shuffled square ties with its reversal; the
        // lexicographically smaller one must win.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let result = tsp_brute_force(4, &points).expect("solve");
        assert!((result.weight - 4.0).abs() < 1e-12);
        assert_eq!(result.order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn rejects_mismatched_point_count() {
        let err = tsp_brute_force(2, &triangle()).expect_err("n != len");
        assert!(matches!(
            err,
            Error::InvalidInputSize {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let err = tsp_brute_force(0, &[]).expect_err("n = 0");
        assert!(matches!(err, Error::InvalidInputSize { .. }));
    }

    #[test]
    fn cancel_check_aborts_enumeration() {
        let mut calls = 0;
        let err = tsp_brute_force_with_cancel(3, &triangle(), || {
            calls += 1;
            calls > 2
        })
        .expect_err("should be cancelled");
        assert!(matches!(err, Error::Cancelled));
        assert_eq!(calls, 3);
    }
}
