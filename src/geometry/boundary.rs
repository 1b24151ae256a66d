use std::fmt;

use crate::math::Point2;

/// One of the four sides of the square `[0, L] × [0, L]`, named geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `y = 0`.
    Bottom,
    /// `y = L`.
    Top,
    /// `x = 0`.
    Left,
    /// `x = L`.
    Right,
}

impl Side {
    /// All sides, in draw order.
    pub const ALL: [Side; 4] = [Side::Bottom, Side::Top, Side::Left, Side::Right];

    /// Returns the point at position `s ∈ [0, L]` along this side.
    ///
    /// Horizontal sides are parameterized by `x`, vertical sides by `y`.
    #[must_use]
    pub fn point_at(self, s: f64, side: f64) -> Point2 {
        match self {
            Side::Bottom => Point2::new(s, 0.0),
            Side::Top => Point2::new(s, side),
            Side::Left => Point2::new(0.0, s),
            Side::Right => Point2::new(side, s),
        }
    }
}

/// A side of the square, named by the coordinate it pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// `x = 0`.
    X0,
    /// `x = L`.
    XL,
    /// `y = 0`.
    Y0,
    /// `y = L`.
    YL,
}

impl EdgeLabel {
    /// All edge labels, in draw order.
    pub const ALL: [EdgeLabel; 4] = [EdgeLabel::X0, EdgeLabel::XL, EdgeLabel::Y0, EdgeLabel::YL];

    /// Returns the point at free-coordinate value `s ∈ [0, L]` on this edge.
    #[must_use]
    pub fn point_at(self, s: f64, side: f64) -> Point2 {
        match self {
            EdgeLabel::X0 => Point2::new(0.0, s),
            EdgeLabel::XL => Point2::new(side, s),
            EdgeLabel::Y0 => Point2::new(s, 0.0),
            EdgeLabel::YL => Point2::new(s, side),
        }
    }
}

/// Classification of a point relative to the square's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    Bottom,
    Top,
    Left,
    Right,
    /// Within tolerance of two sides at once.
    Corner,
    /// Not within tolerance of any side.
    Off,
}

impl BoundarySide {
    /// All classifications, in reporting order.
    pub const ALL: [BoundarySide; 6] = [
        BoundarySide::Bottom,
        BoundarySide::Top,
        BoundarySide::Left,
        BoundarySide::Right,
        BoundarySide::Corner,
        BoundarySide::Off,
    ];

    /// Returns the lowercase label of this classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundarySide::Bottom => "bottom",
            BoundarySide::Top => "top",
            BoundarySide::Left => "left",
            BoundarySide::Right => "right",
            BoundarySide::Corner => "corner",
            BoundarySide::Off => "off",
        }
    }
}

impl From<Side> for BoundarySide {
    fn from(side: Side) -> Self {
        match side {
            Side::Bottom => BoundarySide::Bottom,
            Side::Top => BoundarySide::Top,
            Side::Left => BoundarySide::Left,
            Side::Right => BoundarySide::Right,
        }
    }
}

impl fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `point` lies on the perimeter of `[0, L] × [0, L]`.
///
/// The point must be within `tol` of one of the side lines, with its other
/// coordinate inside the closed range `[0, L]`.
#[must_use]
pub fn on_perimeter(point: &Point2, side: f64, tol: f64) -> bool {
    let x_in = (0.0..=side).contains(&point.x);
    let y_in = (0.0..=side).contains(&point.y);

    let on_bottom = point.y.abs() < tol && x_in;
    let on_top = (point.y - side).abs() < tol && x_in;
    let on_left = point.x.abs() < tol && y_in;
    let on_right = (point.x - side).abs() < tol && y_in;

    on_bottom || on_top || on_left || on_right
}

/// Classifies `point` against the four side lines of the square.
///
/// A point within `tol` of two lines is a [`BoundarySide::Corner`]; a point
/// near none of them is [`BoundarySide::Off`].
#[must_use]
pub fn side_of(point: &Point2, side: f64, tol: f64) -> BoundarySide {
    let mut found = None;
    let mut matches = 0;

    for (hit, label) in [
        (point.y.abs() < tol, BoundarySide::Bottom),
        ((point.y - side).abs() < tol, BoundarySide::Top),
        (point.x.abs() < tol, BoundarySide::Left),
        ((point.x - side).abs() < tol, BoundarySide::Right),
    ] {
        if hit {
            matches += 1;
            found.get_or_insert(label);
        }
    }

    match (matches, found) {
        (0, _) | (_, None) => BoundarySide::Off,
        (1, Some(label)) => label,
        _ => BoundarySide::Corner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: f64 = 10.0;
    const TOL: f64 = 1e-9;

    // ── on_perimeter tests ──

    #[test]
    fn side_midpoints_are_on_perimeter() {
        for p in [
            Point2::new(5.0, 0.0),
            Point2::new(5.0, L),
            Point2::new(0.0, 5.0),
            Point2::new(L, 5.0),
        ] {
            assert!(on_perimeter(&p, L, TOL), "{p:?}");
        }
    }

    #[test]
    fn corners_are_on_perimeter() {
        for p in [
            Point2::new(0.0, 0.0),
            Point2::new(L, 0.0),
            Point2::new(L, L),
            Point2::new(0.0, L),
        ] {
            assert!(on_perimeter(&p, L, TOL), "{p:?}");
        }
    }

    #[test]
    fn center_is_not_on_perimeter() {
        assert!(!on_perimeter(&Point2::new(5.0, 5.0), L, TOL));
    }

    #[test]
    fn point_on_extended_side_line_is_not_on_perimeter() {
        // On the line y = 0 but past the right corner.
        assert!(!on_perimeter(&Point2::new(L + 1.0, 0.0), L, TOL));
    }

    #[test]
    fn near_side_within_tolerance() {
        assert!(on_perimeter(&Point2::new(3.0, 1e-10), L, TOL));
        assert!(!on_perimeter(&Point2::new(3.0, 1e-6), L, TOL));
    }

    // ── side_of tests ──

    #[test]
    fn side_of_each_side() {
        assert_eq!(side_of(&Point2::new(3.0, 0.0), L, TOL), BoundarySide::Bottom);
        assert_eq!(side_of(&Point2::new(3.0, L), L, TOL), BoundarySide::Top);
        assert_eq!(side_of(&Point2::new(0.0, 3.0), L, TOL), BoundarySide::Left);
        assert_eq!(side_of(&Point2::new(L, 3.0), L, TOL), BoundarySide::Right);
    }

    #[test]
    fn side_of_corner_takes_precedence() {
        for p in [
            Point2::new(0.0, 0.0),
            Point2::new(L, 0.0),
            Point2::new(L, L),
            Point2::new(0.0, L),
        ] {
            assert_eq!(side_of(&p, L, TOL), BoundarySide::Corner, "{p:?}");
        }
    }

    #[test]
    fn side_of_interior_is_off() {
        assert_eq!(side_of(&Point2::new(4.0, 6.0), L, TOL), BoundarySide::Off);
    }

    // ── Side / EdgeLabel tests ──

    #[test]
    fn side_and_edge_label_agree() {
        let s = 2.5;
        assert_eq!(Side::Bottom.point_at(s, L), EdgeLabel::Y0.point_at(s, L));
        assert_eq!(Side::Top.point_at(s, L), EdgeLabel::YL.point_at(s, L));
        assert_eq!(Side::Left.point_at(s, L), EdgeLabel::X0.point_at(s, L));
        assert_eq!(Side::Right.point_at(s, L), EdgeLabel::XL.point_at(s, L));
    }

    #[test]
    fn side_point_classifies_as_that_side() {
        for side in Side::ALL {
            let p = side.point_at(4.0, L);
            assert_eq!(side_of(&p, L, TOL), BoundarySide::from(side));
        }
    }
}
