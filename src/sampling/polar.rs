use std::f64::consts::TAU;

use rand::Rng;

use crate::error::Result;
use crate::geometry::validate_side_length;
use crate::math::{are_distinct, Point2, PointPair, DISTINCT_TOLERANCE};

/// Samples two boundary points by casting rays from the center.
///
/// Each ray's direction is uniform over `[0, 2π)`, so the points are uniform
/// in angle, not in arc length: side midpoints are favored over corners.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_polar_ray<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(polar_ray(side, rng))
}

/// Angle-uniform sampling like [`sample_polar_ray`], using the closed form
/// that scales the direction until its dominant component reaches `L/2`.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_polar_angle<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(polar_angle(side, rng))
}

pub(super) fn polar_ray<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_angles(rng, |theta| ray_boundary_point(theta, side))
}

pub(super) fn polar_angle<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_angles(rng, |theta| angle_boundary_point(theta, side))
}

/// Intersects the ray from `(L/2, L/2)` at angle `theta` with the boundary.
///
/// Every wall line the ray is not parallel to yields a ray parameter; the
/// smallest positive one is the first wall hit. If none exists the bottom
/// midpoint is returned.
#[must_use]
pub fn ray_boundary_point(theta: f64, side: f64) -> Point2 {
    let c = side / 2.0;
    let (dy, dx) = theta.sin_cos();

    let mut nearest: Option<(f64, Point2)> = None;
    let mut consider = |t: f64, p: Point2| {
        if t > 0.0 && nearest.is_none_or(|(best, _)| t < best) {
            nearest = Some((t, p));
        }
    };

    if dx != 0.0 {
        for wall in [0.0, side] {
            let t = (wall - c) / dx;
            consider(t, Point2::new(wall, c + t * dy));
        }
    }
    if dy != 0.0 {
        for wall in [0.0, side] {
            let t = (wall - c) / dy;
            consider(t, Point2::new(c + t * dx, wall));
        }
    }

    match nearest {
        Some((_, p)) => Point2::new(p.x.clamp(0.0, side), p.y.clamp(0.0, side)),
        None => Point2::new(c, 0.0),
    }
}

/// Boundary point in direction `theta` from the center, by ratio of the
/// direction components.
#[must_use]
pub fn angle_boundary_point(theta: f64, side: f64) -> Point2 {
    let half = side / 2.0;
    let (sin_t, cos_t) = theta.sin_cos();
    let scale = half / cos_t.abs().max(sin_t.abs());
    Point2::new(
        (half + cos_t * scale).clamp(0.0, side),
        (half + sin_t * scale).clamp(0.0, side),
    )
}

/// Draws two angles in `[0, 2π)`, redrawing the second while the angles
/// or their boundary points coincide.
fn distinct_angles<R, F>(rng: &mut R, to_point: F) -> PointPair
where
    R: Rng + ?Sized,
    F: Fn(f64) -> Point2,
{
    let theta1 = rng.random_range(0.0..TAU);
    let p1 = to_point(theta1);
    loop {
        let theta2 = rng.random_range(0.0..TAU);
        let p2 = to_point(theta2);
        if (theta1 - theta2).abs() >= DISTINCT_TOLERANCE
            && are_distinct(&p1, &p2, DISTINCT_TOLERANCE)
        {
            return (p1, p2);
        }
    }
}
