use std::fmt;

/// Planar point. Two points with equal coordinates are interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dist(self, rhs: &Self) -> f64 {
        crate::geometry::distance(self, *rhs)
    }

    pub(crate) fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.x), b2.format(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn new_stores_x_and_y() {
        let point = Point::new(12.5, -33.75);
        assert_eq!(point.x, 12.5);
        assert_eq!(point.y, -33.75);
    }

    #[test]
    fn from_tuple_matches_new() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn non_finite_values_are_detected() {
        assert!(Point::new(-1e300, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn dist_is_symmetric_and_zero_for_same_point() {
        let a = Point::new(37.7749, -122.4194);
        let b = Point::new(34.0522, -118.2437);

        assert!((a.dist(&b) - b.dist(&a)).abs() < 1e-12);
        assert!(a.dist(&a).abs() < 1e-12);
    }

    #[test]
    fn display_formats_as_x_y() {
        let point = Point::new(1.5, -2.25);
        assert_eq!(point.to_string(), "1.5,-2.25");
    }
}
