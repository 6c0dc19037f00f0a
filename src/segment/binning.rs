/// Score binning.
///
/// Equal-frequency edges are score quantiles at q = i / n_bins, i = 0..=n_bins,
/// linearly interpolated between order statistics:
///
///   pos = q * (n - 1)
///   edge = s[floor(pos)] + (s[ceil(pos)] - s[floor(pos)]) * frac(pos)
///
/// Coinciding edges (tied scores) are dropped, so the realized bin count can
/// be smaller than requested. When fewer than two distinct edges survive the
/// binning is degenerate and the equal-width split of [min, max] is used.
///
/// Bins are right-closed with the lowest edge inclusive:
///   bin 0 = [e0, e1], bin i = (e_i, e_{i+1}]
use crate::errors::{RankFitError, RankFitResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinStrategy {
    EqualFrequency,
    EqualWidth,
}

impl std::fmt::Display for BinStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EqualFrequency => write!(f, "equal-frequency"),
            Self::EqualWidth => write!(f, "equal-width"),
        }
    }
}

/// Ascending bin edges. `edges.len() - 1` bins, always at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Binning {
    pub edges: Vec<f64>,
    pub strategy: BinStrategy,
}

impl Binning {
    /// Quantile binning with automatic equal-width fallback.
    /// `sorted` must be non-empty, finite and ascending.
    pub fn from_sorted(sorted: &[f64], n_bins: usize) -> Self {
        match quantile_edges(sorted, n_bins) {
            Ok(edges) => Self { edges, strategy: BinStrategy::EqualFrequency },
            Err(e) => {
                tracing::debug!("{e}, falling back to equal-width bins");
                Self {
                    edges: equal_width_edges(sorted[0], sorted[sorted.len() - 1], n_bins),
                    strategy: BinStrategy::EqualWidth,
                }
            }
        }
    }

    #[inline]
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1).max(1)
    }

    /// Raw bin of a score, 0 = lowest scores.
    #[inline]
    pub fn assign(&self, score: f64) -> usize {
        let interior = self.interior();
        interior.partition_point(|&edge| edge < score)
    }

    fn interior(&self) -> &[f64] {
        if self.edges.len() <= 2 {
            &[]
        } else {
            &self.edges[1..self.edges.len() - 1]
        }
    }
}

/// Linear-interpolated quantile of an ascending slice.
#[inline]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Unique quantile edges, or `DegenerateBinning` when no split survives.
pub fn quantile_edges(sorted: &[f64], n_bins: usize) -> RankFitResult<Vec<f64>> {
    if sorted.is_empty() || n_bins == 0 {
        return Err(RankFitError::DegenerateBinning("no scores to split".to_string()));
    }

    let mut edges: Vec<f64> = Vec::with_capacity(n_bins + 1);
    for i in 0..=n_bins {
        let edge = quantile_sorted(sorted, i as f64 / n_bins as f64);
        match edges.last() {
            Some(&last) if edge <= last => {}
            _ => edges.push(edge),
        }
    }

    if edges.len() < 2 {
        return Err(RankFitError::DegenerateBinning(format!(
            "{} quantile boundaries collapsed to {}",
            n_bins + 1,
            edges.len()
        )));
    }
    Ok(edges)
}

/// `n_bins` equal-width intervals over [min, max]. A zero-width range is a single bin.
pub fn equal_width_edges(min: f64, max: f64, n_bins: usize) -> Vec<f64> {
    if max <= min || n_bins <= 1 {
        return vec![min, max];
    }
    let width = (max - min) / n_bins as f64;
    let mut edges: Vec<f64> = (0..n_bins).map(|i| min + width * i as f64).collect();
    edges.push(max);
    edges
}
