use crate::math::Point2;

/// Maps an unrolled perimeter coordinate `t` to a boundary point.
///
/// `t` is reduced modulo `4L`, then the perimeter is walked counter-clockwise
/// from the bottom-left corner:
///
/// ```text
/// [0,  L)   bottom   (t, 0)
/// [L,  2L)  right    (L, t - L)
/// [2L, 3L)  top      (L - (t - 2L), L)
/// [3L, 4L)  left     (0, L - (t - 3L))
/// ```
///
/// Corners map exactly. Rounding near the end of a side never leaves
/// `[0, L]`, and `perimeter_to_xy(t, L) == perimeter_to_xy(t + 4L, L)`
/// up to the rounding of the reduction.
#[must_use]
pub fn perimeter_to_xy(t: f64, side: f64) -> Point2 {
    let t = t.rem_euclid(4.0 * side);
    if t < side {
        Point2::new(t, 0.0)
    } else if t < 2.0 * side {
        Point2::new(side, t - side)
    } else if t < 3.0 * side {
        Point2::new((side - (t - 2.0 * side)).max(0.0), side)
    } else {
        Point2::new(0.0, (side - (t - 3.0 * side)).max(0.0))
    }
}
