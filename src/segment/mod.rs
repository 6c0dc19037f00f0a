pub mod aggregate;
pub mod binning;

use crate::errors::{RankFitError, RankFitResult};
use crate::segment::aggregate::aggregate_segments;
use crate::segment::binning::Binning;

/// Per-segment statistics. Segment 0 = highest scores.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SegmentStats {
    pub segment_index: usize,
    /// Event rate in [0, 1]
    pub mean_outcome: f64,
    pub count: usize,
    /// Diagnostic only, not used in scoring
    pub mean_score: f64,
}

/// Precondition check shared by `segment` and `analyze`. Fails fast.
pub fn validate_inputs(scores: &[f64], outcomes: &[u8], n_bins: usize) -> RankFitResult<()> {
    if scores.is_empty() {
        return Err(RankFitError::InvalidInput("no scored examples".to_string()));
    }
    if scores.len() != outcomes.len() {
        return Err(RankFitError::InvalidInput(format!(
            "length mismatch: {} scores vs {} outcomes",
            scores.len(),
            outcomes.len()
        )));
    }
    if n_bins < 1 {
        return Err(RankFitError::InvalidInput("n_bins must be >= 1".to_string()));
    }
    if let Some((i, &o)) = outcomes.iter().enumerate().find(|&(_, &o)| o > 1) {
        return Err(RankFitError::InvalidInput(format!(
            "outcome at position {i} is {o}, expected 0 or 1"
        )));
    }
    if let Some((i, &s)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(RankFitError::InvalidInput(format!(
            "score at position {i} is not finite: {s}"
        )));
    }
    Ok(())
}

/// Assign every example to a rank segment and aggregate per-segment stats.
/// Output is ordered by `segment_index`, contiguous from 0.
pub fn segment(scores: &[f64], outcomes: &[u8], n_bins: usize) -> RankFitResult<Vec<SegmentStats>> {
    validate_inputs(scores, outcomes, n_bins)?;

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let binning = Binning::from_sorted(&sorted, n_bins);
    let raw_bins: Vec<usize> = scores.iter().map(|&s| binning.assign(s)).collect();

    let stats = aggregate_segments(scores, outcomes, &raw_bins, binning.bin_count());
    tracing::debug!(
        strategy = %binning.strategy,
        requested = n_bins,
        realized = stats.len(),
        "segmented {} examples",
        scores.len()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deciles_partition_input() {
        let scores: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let outcomes: Vec<u8> = (0..100).map(|i| u8::from(i % 3 == 0)).collect();
        let segs = segment(&scores, &outcomes, 10).unwrap();
        assert_eq!(segs.len(), 10);
        assert!(segs.iter().all(|s| s.count == 10), "deciles of 100 distinct scores hold 10 each");
        assert_eq!(segs.iter().map(|s| s.count).sum::<usize>(), 100);
    }

    #[test]
    fn test_segment_zero_holds_top_scores() {
        let scores = [0.05, 0.95, 0.5, 0.15, 0.85, 0.45];
        let outcomes = [0, 1, 0, 0, 1, 1];
        let segs = segment(&scores, &outcomes, 3).unwrap();
        for w in segs.windows(2) {
            assert!(w[0].mean_score > w[1].mean_score, "mean score must fall with segment index");
        }
        assert_eq!(segs[0].mean_outcome, 1.0);
    }

    #[test]
    fn test_heavy_ties_shrink_segment_count() {
        let mut scores = vec![0.5; 95];
        scores.extend([0.1, 0.2, 0.8, 0.9, 1.0]);
        let outcomes = vec![0u8; scores.len()];
        let segs = segment(&scores, &outcomes, 10).unwrap();
        assert!(segs.len() < 10, "ties should collapse bins, got {}", segs.len());
        assert_eq!(segs.iter().map(|s| s.count).sum::<usize>(), 100);
        for (i, s) in segs.iter().enumerate() {
            assert_eq!(s.segment_index, i);
        }
    }

    #[test]
    fn test_identical_scores_single_segment() {
        let scores = [0.7; 20];
        let outcomes: Vec<u8> = (0..20).map(|i| u8::from(i < 5)).collect();
        let segs = segment(&scores, &outcomes, 10).unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].count, 20);
        assert_eq!(segs[0].mean_outcome, 0.25);
    }

    #[test]
    fn test_empty_quantile_bin_compacted() {
        // Edges 0, 3.33, 6.67, 10: the middle bin holds nothing
        let segs = segment(&[0.0, 10.0], &[0, 1], 3).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].segment_index, 0);
        assert_eq!(segs[0].mean_score, 10.0);
        assert_eq!(segs[1].segment_index, 1);
        assert_eq!(segs[1].mean_score, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(segment(&[], &[], 10), Err(RankFitError::InvalidInput(_))));
        assert!(matches!(segment(&[0.1, 0.2], &[1], 10), Err(RankFitError::InvalidInput(_))));
        assert!(matches!(segment(&[0.1], &[1], 0), Err(RankFitError::InvalidInput(_))));
        assert!(matches!(segment(&[0.1, 0.2], &[1, 2], 2), Err(RankFitError::InvalidInput(_))));
        assert!(matches!(segment(&[f64::NAN], &[1], 2), Err(RankFitError::InvalidInput(_))));
    }
}
