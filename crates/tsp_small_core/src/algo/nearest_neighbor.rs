use std::collections::BTreeSet;

use crate::{
    Error, Result,
    algo::ensure_point_count,
    geometry::{distance, path_weight, resolve_path},
    node::Point,
    tour::TourResult,
};

const START_NODE: usize = 0;

/// Greedy tour from index 0 that always moves to the closest unvisited point.
///
/// Unvisited nodes are scanned in ascending index order and only a strictly
/// shorter distance replaces the current candidate, so ties go to the lowest
/// index.
pub fn nearest_neighbor_tsp(n: usize, points: &[Point]) -> Result<TourResult> {
    nearest_neighbor_tsp_with_cancel(n, points, || false)
}

/// [`nearest_neighbor_tsp`] that consults `should_stop` before each greedy
/// step and aborts with [`Error::Cancelled`] once it returns `true`.
pub fn nearest_neighbor_tsp_with_cancel<F>(
    n: usize,
    points: &[Point],
    mut should_stop: F,
) -> Result<TourResult>
where
    F: FnMut() -> bool,
{
    ensure_point_count(n, points)?;
    log::debug!("nearest_neighbor: start n={n} start_node={START_NODE}");

    let mut unvisited: BTreeSet<usize> = (0..n).collect();
    let mut path = Vec::with_capacity(n);
    let mut current = START_NODE;

    while unvisited.len() > 1 {
        if should_stop() {
            log::debug!("nearest_neighbor: cancelled at step={}", path.len());
            return Err(Error::Cancelled);
        }

        path.push(current);
        unvisited.remove(&current);

        let from = points[current];
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;
        for &node in &unvisited {
            let d = distance(from, points[node]);
            if d < min_distance {
                min_distance = d;
                nearest = Some(node);
            }
        }

        // Only NaN coordinates can leave `nearest` unset; fall back to the
        // lowest remaining index so the path stays a permutation.
        current = nearest
            .or_else(|| unvisited.first().copied())
            .ok_or_else(|| Error::other("nearest_neighbor: no unvisited node left"))?;
        log::trace!("nearest_neighbor: step to={current} d={min_distance}");
    }

    path.push(current);

    let weight = path_weight(&path, points)?;
    log::debug!("nearest_neighbor: done weight={weight}");

    Ok(TourResult::new(resolve_path(&path, points)?, path, weight))
}

#[cfg(test)]
mod tests {
    use super::{nearest_neighbor_tsp, nearest_neighbor_tsp_with_cancel};
    use crate::{Error, node::Point};

    #[test]
    fn right_triangle_weighs_perimeter() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        ];
        let result = nearest_neighbor_tsp(3, &points).expect("solve");
        assert!((result.weight - 12.0).abs() < 1e-12);
        assert_eq!(result.order, vec![0, 1, 2]);
    }

    #[test]
    fn single_point_has_zero_weight() {
        let result = nearest_neighbor_tsp(1, &[Point::new(5.0, 5.0)]).expect("solve");
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.weight, 0.0);
    }

    #[test]
    fn square_walks_the_perimeter() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let result = nearest_neighbor_tsp(4, &points).expect("solve");
        assert!((result.weight - 4.0).abs() < 1e-12);
        assert_eq!(result.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        // Nodes 1 and 2 are both at distance 1 from the start.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let result = nearest_neighbor_tsp(4, &points).expect("solve");
        assert_eq!(result.order[..2], [0, 1]);
    }

    #[test]
    fn greedy_steps_follow_nearest_point() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let result = nearest_neighbor_tsp(4, &points).expect("solve");
        assert_eq!(result.order, vec![0, 2, 3, 1]);
        assert!((result.weight - 20.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_have_zero_weight() {
        let points = vec![Point::new(2.0, 2.0); 4];
        let result = nearest_neighbor_tsp(4, &points).expect("solve");
        assert_eq!(result.order, vec![0, 1, 2, 3]);
        assert_eq!(result.weight, 0.0);
    }

    #[test]
    fn rejects_mismatched_point_count() {
        let points = vec![Point::new(0.0, 0.0); 3];
        let err = nearest_neighbor_tsp(2, &points).expect_err("n != len");
        assert!(matches!(
            err,
            Error::InvalidInputSize {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn cancel_check_aborts_before_first_step() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let err =
            nearest_neighbor_tsp_with_cancel(2, &points, || true).expect_err("should be cancelled");
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn cancel_check_aborts_mid_tour() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let mut calls = 0;
        let result = nearest_neighbor_tsp_with_cancel(4, &points, || {
            calls += 1;
            calls > 2
        });
        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(calls, 3);
    }
}
