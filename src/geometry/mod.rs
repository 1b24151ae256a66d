pub mod boundary;
pub mod perimeter;
pub mod square;

pub use boundary::{on_perimeter, side_of, BoundarySide, EdgeLabel, Side};
pub use perimeter::perimeter_to_xy;
pub use square::Square;

use crate::error::{GeometryError, Result};

/// Checks that `side` is a usable square side length.
///
/// The perimeter `4L` must also be finite, so sides above `f64::MAX / 4`
/// are rejected.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidSideLength`] if `side` is not positive
/// and finite, or its perimeter overflows.
pub fn validate_side_length(side: f64) -> Result<()> {
    if side > 0.0 && (4.0 * side).is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidSideLength { value: side }.into())
    }
}
