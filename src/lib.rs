//! Segment-level ranking quality metrics.
//!
//! Scored examples are bucketed into rank segments by score quantile
//! (segment 0 = highest scores) and the per-segment event rates are checked
//! for monotonic decrease. Two scores summarise the result: RankFit-V
//! (violation mass against the event-rate spread) and RankFit-T (Kendall
//! trend between segment rank and event rate).
//!
//! ```no_run
//! let scores = [0.91, 0.85, 0.40, 0.33, 0.12, 0.05];
//! let outcomes = [1, 1, 0, 1, 0, 0];
//! let result = rankfit::analyze(&scores, &outcomes, 3)?;
//! println!("RankFit-V {:.3} RankFit-T {:.3}", result.rankfit_v, result.rankfit_t);
//! # Ok::<(), rankfit::RankFitError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod input;
pub mod report;
pub mod scoring;
pub mod segment;

pub use analyzer::{analyze, AnalysisResult, RankFitAnalyzer, DEFAULT_N_BINS};
pub use errors::{RankFitError, RankFitResult};
pub use report::{RankingReport, TrendLabel};
pub use scoring::{detect_violations, rankfit_t, rankfit_v, Violation};
pub use segment::{segment, SegmentStats};
