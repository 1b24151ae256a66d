use rand::Rng;

use crate::error::Result;
use crate::geometry::{validate_side_length, Side};
use crate::math::{Point2, PointPair};

use super::distinct_points;

/// Samples uniform interior points and projects each onto its nearest side.
///
/// The result is not uniform on the perimeter: most of the interior lies
/// closest to a side's middle, so midpoints are over-represented and corners
/// under-represented.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_interior_projection<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(interior_projection(side, rng))
}

pub(super) fn interior_projection<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_points(rng, |rng| {
        let p = Point2::new(rng.random_range(0.0..=side), rng.random_range(0.0..=side));
        project_to_boundary(&p, side)
    })
}

/// Projects `point` onto the nearest side of the square.
///
/// Ties go to the first side in bottom, top, left, right order.
#[must_use]
pub fn project_to_boundary(point: &Point2, side: f64) -> Point2 {
    let candidates = [
        (point.y, Side::Bottom),
        (side - point.y, Side::Top),
        (point.x, Side::Left),
        (side - point.x, Side::Right),
    ];

    let mut nearest = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 < nearest.0 {
            nearest = *candidate;
        }
    }

    match nearest.1 {
        Side::Bottom | Side::Top => nearest.1.point_at(point.x, side),
        Side::Left | Side::Right => nearest.1.point_at(point.y, side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: f64 = 10.0;

    #[test]
    fn projects_to_each_nearest_side() {
        assert_eq!(project_to_boundary(&Point2::new(5.0, 1.0), L), Point2::new(5.0, 0.0));
        assert_eq!(project_to_boundary(&Point2::new(5.0, 9.0), L), Point2::new(5.0, L));
        assert_eq!(project_to_boundary(&Point2::new(1.0, 5.0), L), Point2::new(0.0, 5.0));
        assert_eq!(project_to_boundary(&Point2::new(9.0, 5.0), L), Point2::new(L, 5.0));
    }

    #[test]
    fn tie_prefers_bottom_then_top_then_left() {
        // Equidistant from bottom and left.
        assert_eq!(project_to_boundary(&Point2::new(2.0, 2.0), L), Point2::new(2.0, 0.0));
        // Equidistant from top and left.
        assert_eq!(project_to_boundary(&Point2::new(2.0, 8.0), L), Point2::new(2.0, L));
        // Center: all four tie.
        assert_eq!(project_to_boundary(&Point2::new(5.0, 5.0), L), Point2::new(5.0, 0.0));
    }

    #[test]
    fn boundary_points_project_to_themselves() {
        for p in [Point2::new(3.0, 0.0), Point2::new(L, 7.0), Point2::new(0.0, 0.0)] {
            assert_eq!(project_to_boundary(&p, L), p);
        }
    }
}
