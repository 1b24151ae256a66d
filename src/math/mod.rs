pub mod distance_2d;

pub use distance_2d::{are_distinct, distance, is_close};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// An ordered pair of sampled boundary points.
pub type PointPair = (Point2, Point2);

/// Default tolerance for perimeter membership tests.
pub const PERIMETER_TOLERANCE: f64 = 1e-9;

/// Looser perimeter tolerance for very small or very large side lengths.
pub const EXTREME_PERIMETER_TOLERANCE: f64 = 1e-7;

/// Coordinate difference above which two points count as distinct.
pub const DISTINCT_TOLERANCE: f64 = 1e-12;

/// Relative tolerance used when crediting shortest/longest wins.
pub const WIN_TOLERANCE: f64 = 1e-9;
