//! Distance statistics over repeated perimeter draws.

mod config;
mod distance_analysis;
mod running_stats;
mod side_histogram;

pub use config::AnalysisConfig;
pub use distance_analysis::{AnalysisReport, DistanceAnalysis, MethodStats, MethodSummary};
pub use running_stats::RunningStats;
pub use side_histogram::{
    estimate_exceedance, side_histogram, SideHistogram, THEORETICAL_EXCEEDANCE,
};
