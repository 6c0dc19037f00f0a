/// Error types for ranking analysis.
/// `analyze` either returns a complete result or fails with `InvalidInput`.
/// `DegenerateBinning` never leaves the segmenter: it is recovered by the
/// equal-width fallback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankFitError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate binning: {0}")]
    DegenerateBinning(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RankFitError {
    fn from(e: std::io::Error) -> Self {
        RankFitError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RankFitError {
    fn from(e: serde_json::Error) -> Self {
        RankFitError::Parse(e.to_string())
    }
}

pub type RankFitResult<T> = Result<T, RankFitError>;
