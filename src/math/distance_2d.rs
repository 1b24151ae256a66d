use super::Point2;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Returns `true` if the points differ by more than `tol` in at least one
/// coordinate.
#[must_use]
pub fn are_distinct(p1: &Point2, p2: &Point2, tol: f64) -> bool {
    (p1.x - p2.x).abs() > tol || (p1.y - p2.y).abs() > tol
}

/// Relative closeness test: `|a - b| <= rel_tol * max(|a|, |b|)`.
///
/// There is no absolute floor, so `0.0` is only close to `0.0`.
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
