/// Read-only presentation model for chart renderers.
///
/// Two panels: event rate by segment (violations highlighted) and mean score
/// by segment. Nothing here feeds back into the analysis.
use crate::analyzer::AnalysisResult;
use crate::errors::RankFitResult;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    PerfectlyDecreasing,
    StronglyDecreasing,
    WeaklyDecreasing,
    NonDecreasing,
}

impl TrendLabel {
    pub fn from_rankfit_t(rankfit_t: f64) -> Self {
        if rankfit_t > 0.95 {
            Self::PerfectlyDecreasing
        } else if rankfit_t > 0.7 {
            Self::StronglyDecreasing
        } else if rankfit_t > 0.5 {
            Self::WeaklyDecreasing
        } else {
            Self::NonDecreasing
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerfectlyDecreasing => write!(f, "Perfectly Decreasing"),
            Self::StronglyDecreasing => write!(f, "Strongly Decreasing"),
            Self::WeaklyDecreasing => write!(f, "Weakly Decreasing"),
            Self::NonDecreasing => write!(f, "Non-Decreasing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PanelPoint {
    pub segment_index: usize,
    pub value: f64,
}

/// A violation drawn as a line between two event-rate points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct HighlightSegment {
    pub from: PanelPoint,
    pub to: PanelPoint,
    pub severity: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankingReport {
    pub title: String,
    pub auc: Option<f64>,
    pub trend: TrendLabel,
    pub non_monotonic: bool,
    pub violation_count: usize,
    pub rankfit_v: f64,
    pub rankfit_t: f64,
    /// Two display lines summarising the scores
    pub headline: [String; 2],
    pub event_rate_panel: Vec<PanelPoint>,
    pub highlighted: Vec<HighlightSegment>,
    pub mean_score_panel: Vec<PanelPoint>,
    pub counts: Vec<usize>,
}

impl RankingReport {
    pub fn new(result: &AnalysisResult, auc: Option<f64>, title: &str) -> Self {
        let trend = TrendLabel::from_rankfit_t(result.rankfit_t);
        let non_monotonic = !result.violations.is_empty();

        let trend_desc = if non_monotonic {
            format!("{trend} (non-monotonic)")
        } else {
            trend.to_string()
        };

        let mut parts: Vec<String> = Vec::with_capacity(5);
        if let Some(auc) = auc {
            parts.push(format!("AUC: {auc:.3}"));
        }
        parts.push(format!("Violations: {}", result.violations.len()));
        parts.push(format!("RankFit-V: {:.3}", result.rankfit_v));
        parts.push(format!("RankFit-T: {:.3}", result.rankfit_t));
        parts.push(format!("Trend: {trend_desc}"));
        let headline = [parts[..2].join(" | "), parts[2..].join(" | ")];

        let event_rate_panel = result
            .segment_stats
            .iter()
            .map(|s| PanelPoint { segment_index: s.segment_index, value: s.mean_outcome })
            .collect();
        let mean_score_panel = result
            .segment_stats
            .iter()
            .map(|s| PanelPoint { segment_index: s.segment_index, value: s.mean_score })
            .collect();
        let highlighted = result
            .violations
            .iter()
            .map(|v| HighlightSegment {
                from: PanelPoint { segment_index: v.segment, value: v.rate },
                to: PanelPoint { segment_index: v.next_segment, value: v.next_rate },
                severity: v.severity,
            })
            .collect();

        Self {
            title: title.to_string(),
            auc,
            trend,
            non_monotonic,
            violation_count: result.violations.len(),
            rankfit_v: result.rankfit_v,
            rankfit_t: result.rankfit_t,
            headline,
            event_rate_panel,
            highlighted,
            mean_score_panel,
            counts: result.segment_stats.iter().map(|s| s.count).collect(),
        }
    }

    pub fn to_json(&self) -> RankFitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RankingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.headline[0])?;
        writeln!(f, "{}", self.headline[1])?;
        writeln!(f)?;
        writeln!(f, "{:>7}  {:>8}  {:>10}  {:>10}", "segment", "count", "event_rate", "mean_score")?;

        let rows = self
            .event_rate_panel
            .iter()
            .zip(&self.mean_score_panel)
            .zip(&self.counts);
        for ((rate, score), count) in rows {
            let flag = if self.highlighted.iter().any(|h| h.to.segment_index == rate.segment_index) {
                "  <- violation"
            } else {
                ""
            };
            writeln!(
                f,
                "{:>7}  {:>8}  {:>10.4}  {:>10.4}{flag}",
                rate.segment_index, count, rate.value, score.value
            )?;
        }
        Ok(())
    }
}
