use crate::analyzer::DEFAULT_N_BINS;
use crate::errors::{RankFitError, RankFitResult};
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Ranking Quality Analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub n_bins: usize,
    pub input_path: Option<PathBuf>,
    /// Externally computed discrimination score, display only.
    pub auc: Option<f64>,
    pub title: String,
    pub format: OutputFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            n_bins: DEFAULT_N_BINS,
            input_path: None,
            auc: None,
            title: DEFAULT_TITLE.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> RankFitResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` goes through here.
    pub fn from_lookup<F>(lookup: F) -> RankFitResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let n_bins = match lookup("RANKFIT_N_BINS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| RankFitError::Config(format!("RANKFIT_N_BINS: {e}")))?,
            None => DEFAULT_N_BINS,
        };
        if n_bins < 1 {
            return Err(RankFitError::Config("RANKFIT_N_BINS must be >= 1".to_string()));
        }

        let auc = match lookup("RANKFIT_AUC") {
            Some(raw) => {
                let v = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| RankFitError::Config(format!("RANKFIT_AUC: {e}")))?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(RankFitError::Config(format!(
                        "RANKFIT_AUC must be in [0, 1], got {v}"
                    )));
                }
                Some(v)
            }
            None => None,
        };

        let format = match lookup("RANKFIT_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(RankFitError::Config(format!(
                    "RANKFIT_FORMAT: unknown format {other:?}"
                )))
            }
        };

        Ok(Self {
            n_bins,
            input_path: lookup("RANKFIT_INPUT")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            auc,
            title: lookup("RANKFIT_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            format,
        })
    }
}
