use thiserror::Error;

/// Top-level error type for perimeter sampling and analysis.
#[derive(Debug, Error)]
pub enum PerisquareError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Errors related to the square itself.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("side length must be positive and finite, got {value}")]
    InvalidSideLength { value: f64 },
}

/// Errors a sampling strategy may report for a single draw.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("sampling failed: {0}")]
    Failed(String),
}

/// Errors related to configuring an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PerisquareError`].
pub type Result<T> = std::result::Result<T, PerisquareError>;
