use crate::{Error, Result, node::Point};

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the closed tour visiting `points` in `path` order, including the
/// edge from the last index back to the first.
pub fn path_weight(path: &[usize], points: &[Point]) -> Result<f64> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Err(Error::InvalidInputSize {
            expected: points.len(),
            actual: 0,
        });
    };

    let mut weight = 0.0;
    for pair in path.windows(2) {
        weight += distance(point_at(points, pair[0])?, point_at(points, pair[1])?);
    }
    weight += distance(point_at(points, last)?, point_at(points, first)?);
    Ok(weight)
}

/// Resolves a path into the points it visits.
pub(crate) fn resolve_path(path: &[usize], points: &[Point]) -> Result<Vec<Point>> {
    path.iter().map(|&idx| point_at(points, idx)).collect()
}

#[inline]
fn point_at(points: &[Point], index: usize) -> Result<Point> {
    points.get(index).copied().ok_or(Error::IndexOutOfRange {
        index,
        len: points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::{distance, path_weight, resolve_path};
    use crate::{Error, node::Point};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    #[test]
    fn distance_uses_euclidean_metric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 3.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn path_weight_closes_cycle() {
        let weight = path_weight(&[0, 1, 2, 3], &square()).expect("weight");
        assert!((weight - 4.0).abs() < 1e-12);
    }

    #[test]
    fn path_weight_of_single_index_is_zero() {
        let weight = path_weight(&[0], &[Point::new(5.0, 5.0)]).expect("weight");
        assert_eq!(weight, 0.0);
    }

    #[test]
    fn path_weight_counts_crossing_edges() {
        let weight = path_weight(&[0, 2, 1, 3], &square()).expect("weight");
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((weight - expected).abs() < 1e-12);
    }

    #[test]
    fn path_weight_is_rotation_and_reversal_invariant() {
        let points = vec![
            Point::new(4.6749, -4.788),
            Point::new(1.23, 2.45),
            Point::new(3.56, 1.0),
            Point::new(2.12, 3.78),
        ];
        let base = path_weight(&[0, 1, 2, 3], &points).expect("weight");
        let rotated = path_weight(&[2, 3, 0, 1], &points).expect("weight");
        let reversed = path_weight(&[3, 2, 1, 0], &points).expect("weight");
        assert!((base - rotated).abs() < 1e-9);
        assert!((base - reversed).abs() < 1e-9);
    }

    #[test]
    fn path_weight_rejects_out_of_range_index() {
        let err = path_weight(&[0, 4], &square()).expect_err("index 4 is out of range");
        assert!(matches!(err, Error::IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn path_weight_rejects_empty_path() {
        let err = path_weight(&[], &square()).expect_err("empty path");
        assert!(matches!(err, Error::InvalidInputSize { actual: 0, .. }));
    }

    #[test]
    fn resolve_path_maps_indices_to_points() {
        let points = square();
        let resolved = resolve_path(&[2, 0], &points).expect("resolve");
        assert_eq!(resolved, vec![points[2], points[0]]);
    }
}
