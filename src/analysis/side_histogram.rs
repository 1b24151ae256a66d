use rand::RngCore;

use crate::error::{AnalysisError, Result};
use crate::geometry::{side_of, validate_side_length, BoundarySide};
use crate::math::{distance, PERIMETER_TOLERANCE};
use crate::sampling::PerimeterStrategy;

/// Theoretical `P(d > L)` for two points uniform on the perimeter.
///
/// Same-side pairs never exceed `L`, opposite-side pairs always do, and
/// adjacent-side pairs exceed it with probability `1 - π/4`, which gives
/// `1/2 · (1 - π/4) + 1/4 = 3/4 - π/8 ≈ 0.3573`.
pub const THEORETICAL_EXCEEDANCE: f64 = 0.75 - std::f64::consts::PI / 8.0;

/// Counts of sampled points by boundary classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideHistogram {
    counts: [u64; 6],
}

impl SideHistogram {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one classified point.
    pub fn record(&mut self, label: BoundarySide) {
        self.counts[slot(label)] += 1;
    }

    #[must_use]
    pub fn count(&self, label: BoundarySide) -> u64 {
        self.counts[slot(label)]
    }

    /// Total number of recorded points.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Points recorded on one of the four sides, excluding corners and
    /// off-boundary points.
    #[must_use]
    pub fn side_total(&self) -> u64 {
        [
            BoundarySide::Bottom,
            BoundarySide::Top,
            BoundarySide::Left,
            BoundarySide::Right,
        ]
        .into_iter()
        .map(|label| self.count(label))
        .sum()
    }

    /// Share of all recorded points with classification `label`.
    #[must_use]
    pub fn fraction(&self, label: BoundarySide) -> f64 {
        ratio(self.count(label), self.total())
    }

    /// Share of side points (see [`side_total`](Self::side_total)) that
    /// landed on `label`.
    #[must_use]
    pub fn side_fraction(&self, label: BoundarySide) -> f64 {
        ratio(self.count(label), self.side_total())
    }

    /// Iterates over every classification with its count.
    pub fn iter(&self) -> impl Iterator<Item = (BoundarySide, u64)> + '_ {
        BoundarySide::ALL
            .into_iter()
            .map(|label| (label, self.count(label)))
    }
}

fn slot(label: BoundarySide) -> usize {
    match label {
        BoundarySide::Bottom => 0,
        BoundarySide::Top => 1,
        BoundarySide::Left => 2,
        BoundarySide::Right => 3,
        BoundarySide::Corner => 4,
        BoundarySide::Off => 5,
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn require_trials(trials: usize) -> Result<()> {
    if trials == 0 {
        return Err(AnalysisError::InvalidInput("trial count must be positive".into()).into());
    }
    Ok(())
}

/// Classifies both points of `trials` draws by the side they land on.
///
/// # Errors
///
/// Returns an error if `side` is invalid, `trials` is zero, or a draw fails.
pub fn side_histogram(
    strategy: &dyn PerimeterStrategy,
    side: f64,
    trials: usize,
    rng: &mut dyn RngCore,
) -> Result<SideHistogram> {
    validate_side_length(side)?;
    require_trials(trials)?;

    let mut histogram = SideHistogram::new();
    for _ in 0..trials {
        let (p1, p2) = strategy.sample(side, rng)?;
        histogram.record(side_of(&p1, side, PERIMETER_TOLERANCE));
        histogram.record(side_of(&p2, side, PERIMETER_TOLERANCE));
    }

    tracing::debug!(
        strategy = strategy.name(),
        trials,
        corners = histogram.count(BoundarySide::Corner),
        off = histogram.count(BoundarySide::Off),
        "side histogram complete"
    );
    Ok(histogram)
}

/// Estimates `P(d > L)` for one strategy from `trials` draws.
///
/// # Errors
///
/// Returns an error if `side` is invalid, `trials` is zero, or a draw fails.
pub fn estimate_exceedance(
    strategy: &dyn PerimeterStrategy,
    side: f64,
    trials: usize,
    rng: &mut dyn RngCore,
) -> Result<f64> {
    validate_side_length(side)?;
    require_trials(trials)?;

    let mut hits = 0_u64;
    for _ in 0..trials {
        let (p1, p2) = strategy.sample(side, rng)?;
        if distance(&p1, &p2) > side {
            hits += 1;
        }
    }
    Ok(ratio(hits, trials as u64))
}
