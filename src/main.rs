use rankfit::config::{AnalyzerConfig, OutputFormat};
use rankfit::input;
use rankfit::{RankFitAnalyzer, RankFitError, RankFitResult};
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AnalyzerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cfg, std::env::args().nth(1).map(PathBuf::from)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cfg: AnalyzerConfig, path_arg: Option<PathBuf>) -> RankFitResult<()> {
    let path = path_arg
        .or_else(|| cfg.input_path.clone())
        .ok_or_else(|| RankFitError::Config("no input: pass a path or set RANKFIT_INPUT".to_string()))?;

    let rows = input::read_rows(&path)?;
    let analyzer = RankFitAnalyzer::new(cfg.n_bins);
    let result = analyzer.calculate_metrics(&rows.scores, &rows.outcomes)?;

    tracing::info!(
        segments = result.segment_count(),
        violations = result.violations.len(),
        "rankfit_v={:.3} rankfit_t={:.3}",
        result.rankfit_v,
        result.rankfit_t
    );

    let report = analyzer.report(&result, cfg.auc, &cfg.title);
    match cfg.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
