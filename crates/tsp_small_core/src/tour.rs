use tsp_small_derive::New;

use crate::node::Point;

/// A closed tour: the visited points in order, the indices they came from and
/// the total length including the closing edge.
#[derive(Clone, Debug, Default, PartialEq, New)]
pub struct TourResult {
    pub path: Vec<Point>,
    pub order: Vec<usize>,
    pub weight: f64,
}

impl TourResult {
    pub fn metrics(&self) -> TourMetrics {
        let n = self.n();

        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return TourMetrics::default();
        }

        let distances: Vec<f64> = (0..n)
            .map(|i| self.path[i].dist(&self.path[(i + 1) % n]))
            .collect();
        let total: f64 = distances.iter().sum();
        let average = total / (n as f64);
        let longest = distances.iter().copied().fold(0.0_f64, f64::max);

        log::info!("metrics: n={n} total={total:.4} longest={longest:.4} avg={average:.4}");

        TourMetrics::new(n, total, longest, average)
    }

    pub fn n(&self) -> usize {
        self.path.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, New)]
pub struct TourMetrics {
    pub edges: usize,
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::{TourMetrics, TourResult};
    use crate::node::Point;

    #[test]
    fn metrics_cover_the_closing_edge() {
        let tour = TourResult::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(0.0, 4.0),
            ],
            vec![0, 1, 2],
            12.0,
        );
        let metrics = tour.metrics();
        assert_eq!(metrics.edges, 3);
        assert!((metrics.total - 12.0).abs() < 1e-12);
        assert!((metrics.longest - 5.0).abs() < 1e-12);
        assert!((metrics.average - 4.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_for_single_point_are_empty() {
        let tour = TourResult::new(vec![Point::new(1.0, 1.0)], vec![0], 0.0);
        assert_eq!(tour.metrics(), TourMetrics::default());
    }

    #[test]
    fn with_weight_replaces_weight() {
        let tour = TourResult::default().with_weight(2.5);
        assert_eq!(tour.weight, 2.5);
    }
}
