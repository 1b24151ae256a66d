use rand::RngCore;

use crate::error::{AnalysisError, Result, SamplingError};
use crate::math::{distance, is_close};
use crate::sampling::{PerimeterStrategy, SamplingMethod};

use super::config::AnalysisConfig;
use super::running_stats::RunningStats;

/// Summary of one strategy's distances over an analysis run.
///
/// With no successful attempts every field is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MethodStats {
    /// Trials whose distance exceeded the side length.
    pub count_gt_side: u64,
    /// Trials in which the strategy produced a pair.
    pub attempts: u64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Trials in which this strategy tied for the shortest distance.
    pub shortest_wins: u64,
    /// Trials in which this strategy tied for the longest distance.
    pub longest_wins: u64,
}

impl MethodStats {
    /// Empirical `P(d > L)`, or `0.0` with no attempts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn exceed_fraction(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.count_gt_side as f64 / self.attempts as f64
        }
    }
}

/// A strategy's name paired with its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub name: String,
    pub stats: MethodStats,
}

/// Result of a [`DistanceAnalysis`] run, one summary per strategy in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub side_length: f64,
    pub iterations: usize,
    pub summaries: Vec<MethodSummary>,
}

impl AnalysisReport {
    /// Looks up a strategy's statistics by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MethodStats> {
        self.summaries
            .iter()
            .find(|summary| summary.name == name)
            .map(|summary| &summary.stats)
    }

    /// Iterates over `(name, stats)` in strategy order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodStats)> {
        self.summaries
            .iter()
            .map(|summary| (summary.name.as_str(), &summary.stats))
    }
}

/// Per-strategy accumulators for one run.
#[derive(Debug, Default)]
struct MethodAccumulator {
    distances: RunningStats,
    count_gt_side: u64,
    shortest_wins: u64,
    longest_wins: u64,
}

impl MethodAccumulator {
    fn record(&mut self, d: f64, side: f64) {
        self.distances.update(d);
        if d > side {
            self.count_gt_side += 1;
        }
    }

    fn finish(&self) -> MethodStats {
        MethodStats {
            count_gt_side: self.count_gt_side,
            attempts: self.distances.count(),
            mean: self.distances.mean().unwrap_or(0.0),
            std_dev: self.distances.population_std_dev().unwrap_or(0.0),
            min: self.distances.min().unwrap_or(0.0),
            max: self.distances.max().unwrap_or(0.0),
            shortest_wins: self.shortest_wins,
            longest_wins: self.longest_wins,
        }
    }
}

/// Compares strategies by running them in lockstep.
///
/// Each trial samples every strategy once and measures the distance between
/// the two returned points. A strategy that fails in a trial sits that trial
/// out; the run continues.
pub struct DistanceAnalysis {
    strategies: Vec<Box<dyn PerimeterStrategy>>,
    config: AnalysisConfig,
}

impl DistanceAnalysis {
    /// Creates a new `DistanceAnalysis` over arbitrary strategies.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn PerimeterStrategy>>, config: AnalysisConfig) -> Self {
        Self { strategies, config }
    }

    /// Creates a new `DistanceAnalysis` over built-in methods.
    #[must_use]
    pub fn with_methods(methods: &[SamplingMethod], config: AnalysisConfig) -> Self {
        let strategies = methods
            .iter()
            .map(|&method| Box::new(method) as Box<dyn PerimeterStrategy>)
            .collect();
        Self::new(strategies, config)
    }

    /// Creates a new `DistanceAnalysis` over all nine built-in methods.
    #[must_use]
    pub fn all_methods(config: AnalysisConfig) -> Self {
        Self::with_methods(&SamplingMethod::ALL, config)
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Executes the run, returning one summary per strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or no strategies were given.
    /// Failures of individual draws are absorbed, not returned.
    pub fn execute<R: RngCore>(&self, rng: &mut R) -> Result<AnalysisReport> {
        self.config.validate()?;
        if self.strategies.is_empty() {
            return Err(AnalysisError::InvalidInput("no sampling strategies given".into()).into());
        }

        let side = self.config.side_length;
        let _span = tracing::debug_span!(
            "distance_analysis",
            side,
            iterations = self.config.iterations,
            strategies = self.strategies.len()
        )
        .entered();

        let mut accumulators: Vec<MethodAccumulator> = self
            .strategies
            .iter()
            .map(|_| MethodAccumulator::default())
            .collect();
        let mut failures = 0_u64;

        for trial in 0..self.config.iterations {
            let row = self.sample_row(trial, rng);
            failures += row.iter().filter(|d| d.is_none()).count() as u64;
            credit_extremes(&row, self.config.win_tolerance, &mut accumulators);
            for (acc, d) in accumulators.iter_mut().zip(&row) {
                if let Some(d) = *d {
                    acc.record(d, side);
                }
            }
        }

        tracing::info!(
            trials = self.config.iterations,
            failures,
            "distance analysis complete"
        );

        let summaries = self
            .strategies
            .iter()
            .zip(&accumulators)
            .map(|(strategy, acc)| MethodSummary {
                name: strategy.name().to_owned(),
                stats: acc.finish(),
            })
            .collect();

        Ok(AnalysisReport {
            side_length: side,
            iterations: self.config.iterations,
            summaries,
        })
    }

    /// Samples every strategy once. `None` marks a failed draw.
    fn sample_row<R: RngCore>(&self, trial: usize, rng: &mut R) -> Vec<Option<f64>> {
        let side = self.config.side_length;
        self.strategies
            .iter()
            .map(|strategy| match measure(strategy.as_ref(), side, &mut *rng) {
                Ok(d) => Some(d),
                Err(err) => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        trial,
                        error = %err,
                        "draw failed; excluded from trial"
                    );
                    None
                }
            })
            .collect()
    }
}

fn measure(strategy: &dyn PerimeterStrategy, side: f64, rng: &mut dyn RngCore) -> Result<f64> {
    let (p1, p2) = strategy.sample(side, rng)?;
    let d = distance(&p1, &p2);
    if d.is_finite() {
        Ok(d)
    } else {
        Err(SamplingError::Failed(format!("non-finite distance between {p1} and {p2}")).into())
    }
}

/// Credits every successful strategy within `tol` of the row's minimum or
/// maximum distance.
fn credit_extremes(row: &[Option<f64>], tol: f64, accumulators: &mut [MethodAccumulator]) {
    let Some((min, max)) = row.iter().flatten().fold(None, |range, &d| match range {
        None => Some((d, d)),
        Some((lo, hi)) => Some((f64::min(lo, d), f64::max(hi, d))),
    }) else {
        return;
    };

    for (acc, d) in accumulators.iter_mut().zip(row) {
        let Some(d) = *d else { continue };
        if is_close(d, min, tol) {
            acc.shortest_wins += 1;
        }
        if is_close(d, max, tol) {
            acc.longest_wins += 1;
        }
    }
}
