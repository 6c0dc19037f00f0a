use crate::errors::RankFitResult;
use crate::report::RankingReport;
use crate::scoring::{detect_violations, rankfit_t, rankfit_v, Violations};
use crate::segment::{segment, SegmentStats};

/// Deciles.
pub const DEFAULT_N_BINS: usize = 10;

/// Outcome of one analysis call. Owns its data, no reference back to the input.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisResult {
    pub segment_stats: Vec<SegmentStats>,
    pub violations: Violations,
    pub rankfit_v: f64,
    pub rankfit_t: f64,
}

impl AnalysisResult {
    /// Event rate per segment, best-ranked first.
    pub fn event_rates(&self) -> Vec<f64> {
        self.segment_stats.iter().map(|s| s.mean_outcome).collect()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_stats.len()
    }

    #[inline]
    pub fn is_monotonic(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.segment_stats.iter().map(|s| s.count).sum()
    }
}

/// Segment the scored examples and score how well event rates follow rank.
///
/// Fails with `InvalidInput` on empty input, a length mismatch, `n_bins < 1`,
/// a non-binary outcome or a non-finite score. Pure function of its inputs.
pub fn analyze(scores: &[f64], outcomes: &[u8], n_bins: usize) -> RankFitResult<AnalysisResult> {
    let segment_stats = segment(scores, outcomes, n_bins)?;
    let event_rates: Vec<f64> = segment_stats.iter().map(|s| s.mean_outcome).collect();

    let violations = detect_violations(&event_rates);
    let rankfit_v = rankfit_v(&event_rates, &violations);
    let rankfit_t = rankfit_t(&event_rates);

    tracing::debug!(
        segments = segment_stats.len(),
        violations = violations.len(),
        rankfit_v,
        rankfit_t,
        "ranking analysis complete"
    );

    Ok(AnalysisResult {
        segment_stats,
        violations,
        rankfit_v,
        rankfit_t,
    })
}

/// Holds the segment count so repeated analyses share one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankFitAnalyzer {
    pub n_bins: usize,
}

impl Default for RankFitAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_N_BINS)
    }
}

impl RankFitAnalyzer {
    /// Common choices: 5 for small datasets, 10 (deciles), 20, 100 for large ones.
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }

    pub fn calculate_metrics(&self, scores: &[f64], outcomes: &[u8]) -> RankFitResult<AnalysisResult> {
        analyze(scores, outcomes, self.n_bins)
    }

    /// Renderer-facing view of a result. `auc` is display only.
    pub fn report(&self, result: &AnalysisResult, auc: Option<f64>, title: &str) -> RankingReport {
        RankingReport::new(result, auc, title)
    }
}
