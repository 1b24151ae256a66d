use rand::Rng;

use crate::error::Result;
use crate::geometry::{perimeter_to_xy, validate_side_length};
use crate::math::{are_distinct, Point2, PointPair, DISTINCT_TOLERANCE};

/// Samples two points by unrolling the perimeter into `[0, 4L)`.
///
/// Draws two perimeter coordinates uniformly and maps each onto its side.
/// The resulting points are uniform over arc length.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_parametric<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(parametric(side, rng))
}

/// Same draw as [`sample_parametric`], mapped through [`perimeter_to_xy`].
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_parametric_modular<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(parametric_modular(side, rng))
}

pub(super) fn parametric<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_coordinates(side, rng, |t| unrolled_point(t, side))
}

pub(super) fn parametric_modular<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_coordinates(side, rng, |t| perimeter_to_xy(t, side))
}

/// Direct mapping for `t ∈ [0, 4L)`, without modular reduction.
fn unrolled_point(t: f64, side: f64) -> Point2 {
    if t < side {
        Point2::new(t, 0.0)
    } else if t < 2.0 * side {
        Point2::new(side, t - side)
    } else if t < 3.0 * side {
        Point2::new((3.0 * side - t).max(0.0), side)
    } else {
        Point2::new(0.0, (4.0 * side - t).max(0.0))
    }
}

/// Draws two perimeter coordinates, redrawing the second until both the
/// coordinates and the mapped points are apart.
///
/// The point check matters only across the `4L → 0` seam, where nearly equal
/// points have very different coordinates.
fn distinct_coordinates<R, F>(side: f64, rng: &mut R, to_point: F) -> PointPair
where
    R: Rng + ?Sized,
    F: Fn(f64) -> Point2,
{
    let span = 4.0 * side;
    let t1 = rng.random_range(0.0..span);
    let p1 = to_point(t1);
    loop {
        let t2 = rng.random_range(0.0..span);
        let p2 = to_point(t2);
        if (t1 - t2).abs() >= DISTINCT_TOLERANCE && are_distinct(&p1, &p2, DISTINCT_TOLERANCE) {
            return (p1, p2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::create_rng;
    use crate::sampling::scripted_rng::ScriptedRng;

    const L: f64 = 10.0;

    #[test]
    fn unrolled_mapping_matches_modular_mapping() {
        for i in 0..400 {
            let t = f64::from(i) * 0.1;
            let a = unrolled_point(t, L);
            let b = perimeter_to_xy(t, L);
            assert!((a.x - b.x).abs() < 1e-12, "t={t}: {a:?} vs {b:?}");
            assert!((a.y - b.y).abs() < 1e-12, "t={t}: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn unrolled_corners() {
        assert_eq!(unrolled_point(0.0, L), Point2::new(0.0, 0.0));
        assert_eq!(unrolled_point(L, L), Point2::new(L, 0.0));
        assert_eq!(unrolled_point(2.0 * L, L), Point2::new(L, L));
        assert_eq!(unrolled_point(3.0 * L, L), Point2::new(0.0, L));
    }

    #[test]
    fn coordinates_across_the_seam_map_to_the_same_point() {
        let near_end = 4.0 * L - 1e-14;
        assert!(near_end >= DISTINCT_TOLERANCE);
        let origin = Point2::origin();
        assert!(!are_distinct(&origin, &unrolled_point(near_end, L), DISTINCT_TOLERANCE));
        assert!(!are_distinct(&origin, &perimeter_to_xy(near_end, L), DISTINCT_TOLERANCE));
    }

    fn assert_seam_redrawn(name: &str, rng: &ScriptedRng, (p1, p2): PointPair) {
        assert!(rng.calls() > 2, "{name} kept a pair straddling the seam");
        assert_eq!(p1, Point2::origin(), "{name}");
        assert!(are_distinct(&p1, &p2, DISTINCT_TOLERANCE), "{name}: p2={p2:?}");
    }

    #[test]
    fn seam_pair_is_redrawn() {
        // A zero word draws t = 0; an all-ones word draws the largest t
        // below 4L, a few ulps short of the seam.
        let mut rng = ScriptedRng::new([0, u64::MAX]);
        let pair = parametric(L, &mut rng);
        assert_seam_redrawn("parametric", &rng, pair);

        let mut rng = ScriptedRng::new([0, u64::MAX]);
        let pair = parametric_modular(L, &mut rng);
        assert_seam_redrawn("parametric_modular", &rng, pair);
    }

    #[test]
    fn both_variants_reject_bad_side() {
        let mut rng = create_rng(1);
        assert!(sample_parametric(0.0, &mut rng).is_err());
        assert!(sample_parametric_modular(-3.0, &mut rng).is_err());
    }
}
