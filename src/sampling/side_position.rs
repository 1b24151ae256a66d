use rand::Rng;

use crate::error::Result;
use crate::geometry::{validate_side_length, EdgeLabel, Side};
use crate::math::{PointPair, DISTINCT_TOLERANCE};

use super::distinct_points;

/// Samples two points by picking a side and a uniform position on it.
///
/// Each point gets an independent side, so both points share a side about a
/// quarter of the time. Only a geometric collision triggers a redraw.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_by_side<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(by_side(side, rng))
}

/// Like [`sample_by_side`], with sides named by the pinned coordinate
/// (`x = 0`, `x = L`, `y = 0`, `y = L`).
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_by_edge_label<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(by_edge_label(side, rng))
}

/// Draws `(side, position)` for both points up front.
///
/// The second point is redrawn only when both its side and its position
/// coincide with the first, within 1e-12.
///
/// # Errors
///
/// Returns an error if `side` is not positive and finite.
pub fn sample_side_pos<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<PointPair> {
    validate_side_length(side)?;
    Ok(side_pos(side, rng))
}

pub(super) fn by_side<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_points(rng, |rng| {
        let chosen = random_side(rng);
        chosen.point_at(rng.random_range(0.0..=side), side)
    })
}

pub(super) fn by_edge_label<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    distinct_points(rng, |rng| {
        let edge = EdgeLabel::ALL[rng.random_range(0..EdgeLabel::ALL.len())];
        edge.point_at(rng.random_range(0.0..=side), side)
    })
}

pub(super) fn side_pos<R: Rng + ?Sized>(side: f64, rng: &mut R) -> PointPair {
    let side1 = random_side(rng);
    let mut side2 = random_side(rng);
    let s1 = rng.random_range(0.0..=side);
    let mut s2 = rng.random_range(0.0..=side);

    while same_draw((side1, s1), (side2, s2)) {
        side2 = random_side(rng);
        s2 = rng.random_range(0.0..=side);
    }

    (side1.point_at(s1, side), side2.point_at(s2, side))
}

/// Same side and same position within 1e-12. Different sides never match,
/// even when both positions name the same corner.
fn same_draw(a: (Side, f64), b: (Side, f64)) -> bool {
    a.0 == b.0 && (a.1 - b.1).abs() < DISTINCT_TOLERANCE
}

fn random_side<R: Rng + ?Sized>(rng: &mut R) -> Side {
    Side::ALL[rng.random_range(0..Side::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{side_of, BoundarySide};
    use crate::math::{are_distinct, Point2, PERIMETER_TOLERANCE};
    use crate::sampling::create_rng;
    use crate::sampling::scripted_rng::ScriptedRng;

    /// Word whose high half is 2^31: picks index 2 of 4 (`Side::Left`).
    const LEFT_SIDE_WORD: u64 = 1 << 63;

    const L: f64 = 10.0;

    fn classify_pair((p1, p2): PointPair) -> (BoundarySide, BoundarySide) {
        (
            side_of(&p1, L, PERIMETER_TOLERANCE),
            side_of(&p2, L, PERIMETER_TOLERANCE),
        )
    }

    fn lands_on_same_side(pair: PointPair) -> bool {
        let (a, b) = classify_pair(pair);
        let proper = |s: BoundarySide| !matches!(s, BoundarySide::Corner | BoundarySide::Off);
        proper(a) && proper(b) && a == b
    }

    #[test]
    fn by_side_allows_same_side_pairs() {
        let mut rng = create_rng(7);
        let found = (0..2000).any(|_| lands_on_same_side(by_side(L, &mut rng)));
        assert!(found, "by_side never produced a same-side pair in 2000 draws");
    }

    #[test]
    fn by_side_same_side_rate_is_about_a_quarter() {
        let mut rng = create_rng(11);
        let n = 4000;
        let same = (0..n)
            .filter(|_| lands_on_same_side(by_side(L, &mut rng)))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let rate = same as f64 / f64::from(n);
        assert!((0.20..0.30).contains(&rate), "rate={rate}");
    }

    #[test]
    fn edge_label_allows_same_side_pairs() {
        let mut rng = create_rng(13);
        let found = (0..2000).any(|_| lands_on_same_side(by_edge_label(L, &mut rng)));
        assert!(found);
    }

    #[test]
    fn side_pos_allows_same_side_pairs() {
        let mut rng = create_rng(17);
        let found = (0..2000).any(|_| lands_on_same_side(side_pos(L, &mut rng)));
        assert!(found);
    }

    #[test]
    fn side_pos_matches_only_on_same_side_and_position() {
        assert!(same_draw((Side::Top, 3.0), (Side::Top, 3.0)));
        assert!(same_draw((Side::Top, 3.0), (Side::Top, 3.0 + 1e-13)));
        assert!(!same_draw((Side::Top, 3.0), (Side::Top, 3.0 + 1e-9)));
        assert!(!same_draw((Side::Top, 3.0), (Side::Bottom, 3.0)));
    }

    #[test]
    fn side_pos_rule_differs_from_point_distinctness() {
        // Bottom at 0 and Left at 0 are both the origin: the side/position
        // rule keeps the pair, the point rule used by `by_side` rejects it.
        let a = Side::Bottom.point_at(0.0, L);
        let b = Side::Left.point_at(0.0, L);
        assert_eq!(a, Point2::origin());
        assert_eq!(a, b);
        assert!(!same_draw((Side::Bottom, 0.0), (Side::Left, 0.0)));
        assert!(!are_distinct(&a, &b, DISTINCT_TOLERANCE));
    }

    #[test]
    fn side_pos_keeps_corner_pair_from_different_sides() {
        // Draw order: side1, side2, s1, s2.
        let mut rng = ScriptedRng::new([0, LEFT_SIDE_WORD, 0, 0]);
        let (p1, p2) = side_pos(L, &mut rng);
        assert_eq!(rng.calls(), 4, "side_pos redrew a pair on different sides");
        assert_eq!(p1, Point2::origin());
        assert_eq!(p2, Point2::origin());
    }

    #[test]
    fn side_pos_redraws_same_side_and_position() {
        let mut rng = ScriptedRng::zeros(10);
        let (p1, p2) = side_pos(L, &mut rng);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(p1, Point2::origin());
        assert!(are_distinct(&p1, &p2, DISTINCT_TOLERANCE), "p2={p2:?}");
    }

    #[test]
    fn by_side_redraws_corner_pair_from_different_sides() {
        // Same script as the side_pos case: (Bottom, 0) then (Left, 0).
        let mut rng = ScriptedRng::new([0, 0, LEFT_SIDE_WORD, 0]);
        let (p1, p2) = by_side(L, &mut rng);
        assert!(rng.calls() > 4, "by_side kept a coincident pair");
        assert_eq!(p1, Point2::origin());
        assert!(are_distinct(&p1, &p2, DISTINCT_TOLERANCE), "p2={p2:?}");
    }

    #[test]
    fn public_entry_points_validate_side() {
        let mut rng = create_rng(3);
        assert!(sample_by_side(0.0, &mut rng).is_err());
        assert!(sample_by_edge_label(f64::NAN, &mut rng).is_err());
        assert!(sample_side_pos(-1.0, &mut rng).is_err());
    }
}
