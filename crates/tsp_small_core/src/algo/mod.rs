pub(crate) mod brute_force;
pub(crate) mod nearest_neighbor;
pub(crate) mod permutation;
pub(crate) mod solver;

use crate::{Error, Result, node::Point};

/// Both solvers take `n` alongside the points; they must agree and be non-zero.
pub(crate) fn ensure_point_count(n: usize, points: &[Point]) -> Result<()> {
    if n < 1 || n != points.len() {
        return Err(Error::InvalidInputSize {
            expected: n,
            actual: points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_point_count;
    use crate::{Error, node::Point};

    #[test]
    fn matching_non_zero_count_is_accepted() {
        ensure_point_count(2, &[Point::default(), Point::default()]).expect("valid");
    }

    #[test]
    fn zero_count_is_rejected_even_when_empty() {
        let err = ensure_point_count(0, &[]).expect_err("n = 0");
        assert!(matches!(
            err,
            Error::InvalidInputSize {
                expected: 0,
                actual: 0
            }
        ));
    }
}
