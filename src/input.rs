/// `score,outcome` row parsing for the command-line front end.
/// Comma or tab separated. Blank lines and `#` comments are skipped, and a
/// first row whose score field is not numeric is taken as a header.
use crate::errors::{RankFitError, RankFitResult};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredRows {
    pub scores: Vec<f64>,
    pub outcomes: Vec<u8>,
}

impl ScoredRows {
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

pub fn read_rows(path: &Path) -> RankFitResult<ScoredRows> {
    let text = std::fs::read_to_string(path)?;
    let rows = parse_rows(&text)?;
    tracing::info!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_rows(text: &str) -> RankFitResult<ScoredRows> {
    let mut rows = ScoredRows::default();
    let mut seen_data = false;

    for (line_no, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split([',', '\t']).map(str::trim);
        let (score_raw, outcome_raw) = match (fields.next(), fields.next(), fields.next()) {
            (Some(s), Some(o), None) => (s, o),
            _ => {
                return Err(RankFitError::Parse(format!(
                    "line {line_no}: expected 2 fields: {line:?}"
                )))
            }
        };

        let score = match score_raw.parse::<f64>() {
            Ok(s) => s,
            Err(_) if !seen_data => {
                tracing::debug!("skipping header on line {line_no}");
                seen_data = true;
                continue;
            }
            Err(e) => return Err(RankFitError::Parse(format!("line {line_no}: score: {e}"))),
        };
        let outcome = outcome_raw
            .parse::<u8>()
            .map_err(|e| RankFitError::Parse(format!("line {line_no}: outcome: {e}")))?;

        seen_data = true;
        rows.scores.push(score);
        rows.outcomes.push(outcome);
    }

    Ok(rows)
}
