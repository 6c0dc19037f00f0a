use crate::segment::SegmentStats;

/// Running sums for one raw bin. Finalized into `SegmentStats`.
#[derive(Debug, Clone, Copy, Default)]
struct SegmentAccumulator {
    outcome_sum: u64,
    score_sum: f64,
    count: usize,
}

/// Single aggregation pass over (score, outcome, raw bin) triples.
///
/// Raw bins run 0 = lowest scores; output is reoriented so segment 0 holds
/// the highest scores, empty bins are dropped and the remaining segments are
/// re-indexed contiguously from 0.
pub fn aggregate_segments(
    scores: &[f64],
    outcomes: &[u8],
    raw_bins: &[usize],
    bin_count: usize,
) -> Vec<SegmentStats> {
    let mut accumulators = vec![SegmentAccumulator::default(); bin_count];

    for ((&score, &outcome), &raw) in scores.iter().zip(outcomes).zip(raw_bins) {
        let acc = &mut accumulators[raw];
        acc.outcome_sum += u64::from(outcome);
        acc.score_sum += score;
        acc.count += 1;
    }

    accumulators
        .iter()
        .rev()
        .filter(|acc| acc.count > 0)
        .enumerate()
        .map(|(segment_index, acc)| {
            let n = acc.count as f64;
            SegmentStats {
                segment_index,
                mean_outcome: acc.outcome_sum as f64 / n,
                count: acc.count,
                mean_score: acc.score_sum / n,
            }
        })
        .collect()
}
