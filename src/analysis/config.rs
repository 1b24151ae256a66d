use crate::error::{AnalysisError, Result};
use crate::geometry::validate_side_length;
use crate::math::WIN_TOLERANCE;

/// Parameters for a distance analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Side length `L` of the square.
    pub side_length: f64,
    /// Number of trials. Each trial samples every strategy once.
    pub iterations: usize,
    /// Relative tolerance for crediting shortest/longest wins.
    pub win_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            side_length: 10.0,
            iterations: 100,
            win_tolerance: WIN_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Creates a config for `iterations` trials on a square of side `side_length`.
    #[must_use]
    pub fn new(side_length: f64, iterations: usize) -> Self {
        Self {
            side_length,
            iterations,
            ..Self::default()
        }
    }

    /// Checks the side length and win tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the side length is not positive and finite, or the
    /// win tolerance is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        validate_side_length(self.side_length)?;
        if !self.win_tolerance.is_finite() || self.win_tolerance < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "win tolerance must be finite and non-negative, got {}",
                self.win_tolerance
            ))
            .into());
        }
        Ok(())
    }
}
