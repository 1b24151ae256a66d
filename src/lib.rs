pub mod analysis;
pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;

pub use error::{PerisquareError, Result};
