use std::fmt;

use crate::error::Result;
use crate::math::{distance, is_close, Point2};

use super::boundary::{self, BoundarySide};
use super::validate_side_length;

/// Axis-aligned square `[0, L] × [0, L]`.
#[derive(Debug, Clone, Copy)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Creates a square with side length `side`.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not a positive finite number.
    pub fn new(side: f64) -> Result<Self> {
        validate_side_length(side)?;
        Ok(Self { side })
    }

    /// Returns the side length `L`.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Total boundary length, `4L`.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    /// Area, `L²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    /// Diagonal length, `L·√2`. This is the largest possible distance
    /// between two perimeter points.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.side * std::f64::consts::SQRT_2
    }

    /// Center point, `(L/2, L/2)`.
    #[must_use]
    pub fn center(&self) -> Point2 {
        let half = self.side / 2.0;
        Point2::new(half, half)
    }

    /// Returns `true` if `point` is inside the square or on its boundary,
    /// allowing `tol` of slack on every side.
    #[must_use]
    pub fn contains(&self, point: &Point2, tol: f64) -> bool {
        let range = -tol..=self.side + tol;
        range.contains(&point.x) && range.contains(&point.y)
    }

    /// See [`boundary::on_perimeter`].
    #[must_use]
    pub fn on_perimeter(&self, point: &Point2, tol: f64) -> bool {
        boundary::on_perimeter(point, self.side, tol)
    }

    /// See [`boundary::side_of`].
    #[must_use]
    pub fn side_of(&self, point: &Point2, tol: f64) -> BoundarySide {
        boundary::side_of(point, self.side, tol)
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
        distance(p1, p2)
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        is_close(self.side, other.side, 1e-9)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(L={})", self.side)
    }
}
