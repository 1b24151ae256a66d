use rand::Rng;

use crate::error::Result;
use crate::geometry::validate_side_length;
use crate::math::{Point2, PointPair};

use super::distinct_points;

/// Samples two points by pinning one Cartesian coordinate to `0` or `L`.
///
/// For each point a fair coin picks whether `x` or `y` is pinned, a second
/// coin picks the endpoint, and the free coordinate is uniform in `[0, L]`.
/// All four sides are equally likely, so the result is uniform over arc
/// length.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_cartesian<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(cartesian(side, rng))
}

pub(super) fn cartesian<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_points(rng, |rng| {
        let pin_x = rng.random_bool(0.5);
        let pinned = if rng.random_bool(0.5) { 0.0 } else { side };
        let free = rng.random_range(0.0..=side);
        if pin_x {
            Point2::new(pinned, free)
        } else {
            Point2::new(free, pinned)
        }
    })
}
