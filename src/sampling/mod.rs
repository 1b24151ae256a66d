//! Strategies for drawing two distinct points on the perimeter of a square.
//!
//! Every strategy takes the side length `L` and an explicit random source.
//! Use [`rand::rng`] for process randomness or [`create_rng`] for a seeded,
//! reproducible sequence.

mod cartesian;
mod parametric;
mod polar;
mod projection;
#[cfg(test)]
mod scripted_rng;
mod side_position;

pub use cartesian::sample_cartesian;
pub use parametric::{sample_parametric, sample_parametric_modular};
pub use polar::{angle_boundary_point, ray_boundary_point, sample_polar_angle, sample_polar_ray};
pub use projection::{project_to_boundary, sample_interior_projection};
pub use side_position::{sample_by_edge_label, sample_by_side, sample_side_pos};

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::Result;
use crate::geometry::validate_side_length;
use crate::math::{are_distinct, Point2, PointPair, DISTINCT_TOLERANCE};

/// Creates a fast, seeded random number generator.
///
/// The sequence is deterministic for a given seed on the same platform.
#[must_use]
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// How a strategy's points are distributed along the perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform over arc length.
    Uniform,
    /// Uniform over the angle seen from the center.
    AngleUniform,
    /// Neither; biased toward some region of the boundary.
    NonUniform,
}

/// The nine perimeter sampling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingMethod {
    Parametric,
    BySide,
    ByEdgeLabel,
    PolarRay,
    SidePosition,
    ParametricModular,
    Cartesian,
    PolarAngle,
    InteriorProjection,
}

impl SamplingMethod {
    /// All strategies, in their numbered order.
    pub const ALL: [SamplingMethod; 9] = [
        SamplingMethod::Parametric,
        SamplingMethod::BySide,
        SamplingMethod::ByEdgeLabel,
        SamplingMethod::PolarRay,
        SamplingMethod::SidePosition,
        SamplingMethod::ParametricModular,
        SamplingMethod::Cartesian,
        SamplingMethod::PolarAngle,
        SamplingMethod::InteriorProjection,
    ];

    /// One-based strategy number.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SamplingMethod::Parametric => 1,
            SamplingMethod::BySide => 2,
            SamplingMethod::ByEdgeLabel => 3,
            SamplingMethod::PolarRay => 4,
            SamplingMethod::SidePosition => 5,
            SamplingMethod::ParametricModular => 6,
            SamplingMethod::Cartesian => 7,
            SamplingMethod::PolarAngle => 8,
            SamplingMethod::InteriorProjection => 9,
        }
    }

    /// Returns the strategy with one-based number `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Stable identifier, matching the free function that implements it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SamplingMethod::Parametric => "sample_parametric",
            SamplingMethod::BySide => "sample_by_side",
            SamplingMethod::ByEdgeLabel => "sample_by_edge_label",
            SamplingMethod::PolarRay => "sample_polar_ray",
            SamplingMethod::SidePosition => "sample_side_pos",
            SamplingMethod::ParametricModular => "sample_parametric_modular",
            SamplingMethod::Cartesian => "sample_cartesian",
            SamplingMethod::PolarAngle => "sample_polar_angle",
            SamplingMethod::InteriorProjection => "sample_interior_projection",
        }
    }

    /// Human-readable label, e.g. `"4. Polar Ray"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SamplingMethod::Parametric => "1. Parametric",
            SamplingMethod::BySide => "2. Side Selection",
            SamplingMethod::ByEdgeLabel => "3. Edge Label",
            SamplingMethod::PolarRay => "4. Polar Ray",
            SamplingMethod::SidePosition => "5. Side + Position",
            SamplingMethod::ParametricModular => "6. Parametric (Modular)",
            SamplingMethod::Cartesian => "7. Cartesian",
            SamplingMethod::PolarAngle => "8. Polar Angle",
            SamplingMethod::InteriorProjection => "9. Interior Projection",
        }
    }

    #[must_use]
    pub fn distribution(self) -> Distribution {
        match self {
            SamplingMethod::PolarRay | SamplingMethod::PolarAngle => Distribution::AngleUniform,
            SamplingMethod::InteriorProjection => Distribution::NonUniform,
            _ => Distribution::Uniform,
        }
    }

    /// Returns `true` if points are uniform over arc length.
    #[must_use]
    pub fn is_uniform(self) -> bool {
        self.distribution() == Distribution::Uniform
    }

    /// Draws two distinct perimeter points for a square of side `side`.
    ///
    /// Retries are unbounded. Below `L ≈ 1e-12` no two boundary points are
    /// more than [`DISTINCT_TOLERANCE`] apart, so every strategy except
    /// [`SamplingMethod::SidePosition`] never returns.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not positive and finite, or `4L`
    /// overflows.
    pub fn sample<R: Rng + ?Sized>(self, side: f64, rng: &mut R) -> Result<PointPair> {
        validate_side_length(side)?;
        Ok(self.draw(side, rng))
    }

    /// Dispatches without validating `side`.
    fn draw<R: Rng + ?Sized>(self, side: f64, rng: &mut R) -> PointPair {
        match self {
            SamplingMethod::Parametric => parametric::parametric(side, rng),
            SamplingMethod::BySide => side_position::by_side(side, rng),
            SamplingMethod::ByEdgeLabel => side_position::by_edge_label(side, rng),
            SamplingMethod::PolarRay => polar::polar_ray(side, rng),
            SamplingMethod::SidePosition => side_position::side_pos(side, rng),
            SamplingMethod::ParametricModular => parametric::parametric_modular(side, rng),
            SamplingMethod::Cartesian => cartesian::cartesian(side, rng),
            SamplingMethod::PolarAngle => polar::polar_angle(side, rng),
            SamplingMethod::InteriorProjection => projection::interior_projection(side, rng),
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability of producing two distinct perimeter points.
///
/// Implemented by every [`SamplingMethod`]; other implementors may fail on
/// individual draws, which an analysis run records as a missed attempt.
pub trait PerimeterStrategy {
    /// Identifier used to key analysis results.
    fn name(&self) -> &str;

    /// Draws two distinct points on the perimeter of `[0, side]²`.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is invalid or the draw fails.
    fn sample(&self, side: f64, rng: &mut dyn RngCore) -> Result<PointPair>;
}

impl PerimeterStrategy for SamplingMethod {
    fn name(&self) -> &str {
        SamplingMethod::name(*self)
    }

    fn sample(&self, side: f64, rng: &mut dyn RngCore) -> Result<PointPair> {
        SamplingMethod::sample(*self, side, rng)
    }
}

/// A strategy bound to a validated side length.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    method: SamplingMethod,
    side: f64,
}

impl Sampler {
    /// Creates a sampler for squares of side `side`.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not positive and finite.
    pub fn new(method: SamplingMethod, side: f64) -> Result<Self> {
        validate_side_length(side)?;
        Ok(Self { method, side })
    }

    #[must_use]
    pub fn method(&self) -> SamplingMethod {
        self.method
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Draws two distinct perimeter points.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PointPair {
        self.method.draw(self.side, rng)
    }
}

/// Draws `p1`, then redraws `p2` until the two are geometrically distinct.
fn distinct_points<R, F>(rng: &mut R, mut draw: F) -> PointPair
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Point2,
{
    let p1 = draw(rng);
    loop {
        let p2 = draw(rng);
        if are_distinct(&p1, &p2, DISTINCT_TOLERANCE) {
            return (p1, p2);
        }
    }
}
