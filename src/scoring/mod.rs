pub mod metrics;
pub mod violations;

pub use metrics::{kendall_tau, rankfit_t, rankfit_v, NEUTRAL_TREND};
pub use violations::{detect_violations, Violation, Violations};
