/// Summary scores over the ordered segment event rates.
///
/// RankFit-V (violation mass relative to the achieved spread):
///
///   V = max(0, 1 - sum(severity) / (max(rate) - min(rate)))
///
/// RankFit-T (global trend), with tau = Kendall's tau-b between the negated
/// segment indices (0, -1, -2, ...) and the event rates:
///
///   T = (tau + 1) / 2
///
/// Both are in [0, 1], 1 = perfect. Fewer than two segments scores 1.0 on
/// both. A flat rate sequence scores V = 1.0 (nothing is out of order) and
/// T = 0.5 (tau undefined).
use crate::scoring::violations::Violation;
use statrs::statistics::Statistics;

/// Neutral trend score used when the rank correlation is undefined.
pub const NEUTRAL_TREND: f64 = 0.5;

pub fn rankfit_v(event_rates: &[f64], violations: &[Violation]) -> f64 {
    if event_rates.len() < 2 {
        return 1.0;
    }

    let total_range = Statistics::max(event_rates) - Statistics::min(event_rates);
    if total_range == 0.0 {
        return 1.0;
    }

    let violation_mass: f64 = violations.iter().map(|v| v.severity).sum();
    (1.0 - violation_mass / total_range).clamp(0.0, 1.0)
}

pub fn rankfit_t(event_rates: &[f64]) -> f64 {
    if event_rates.len() < 2 {
        return 1.0;
    }

    let expected_order: Vec<f64> = (0..event_rates.len()).map(|i| -(i as f64)).collect();
    match kendall_tau(&expected_order, event_rates) {
        Some(tau) => ((tau + 1.0) / 2.0).clamp(0.0, 1.0),
        None => {
            tracing::debug!(
                segments = event_rates.len(),
                "rank correlation undefined, using neutral trend"
            );
            NEUTRAL_TREND
        }
    }
}

/// Kendall's tau-b. `None` when either sequence has no variation
/// (every pair tied) or the lengths disagree.
pub fn kendall_tau(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }

    let mut concordant = 0u64;
    let mut discordant = 0u64;
    let mut ties_x = 0u64;
    let mut ties_y = 0u64;

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];

            if dx == 0.0 && dy == 0.0 {
                continue;
            } else if dx == 0.0 {
                ties_x += 1;
            } else if dy == 0.0 {
                ties_y += 1;
            } else if (dx > 0.0) == (dy > 0.0) {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let untied_x = (concordant + discordant + ties_y) as f64;
    let untied_y = (concordant + discordant + ties_x) as f64;
    let denom = (untied_x * untied_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some((concordant as f64 - discordant as f64) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::violations::detect_violations;

    fn scores_for(rates: &[f64]) -> (f64, f64) {
        let v = detect_violations(rates);
        (rankfit_v(rates, &v), rankfit_t(rates))
    }

    #[test]
    fn test_perfectly_decreasing() {
        let (v, t) = scores_for(&[0.9, 0.7, 0.5, 0.3, 0.1]);
        assert_eq!(v, 1.0);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_perfectly_inverted_trend() {
        let (v, t) = scores_for(&[0.1, 0.3, 0.5, 0.7, 0.9]);
        assert_eq!(t, 0.0, "strictly increasing rates invert the trend");
        assert!(v.abs() < 1e-9, "violation mass equals the range: {v}");
    }

    #[test]
    fn test_constant_rates() {
        let (v, t) = scores_for(&[0.4, 0.4, 0.4, 0.4]);
        assert_eq!(v, 1.0, "zero range scores perfect by policy");
        assert_eq!(t, NEUTRAL_TREND, "undefined tau is neutral");
    }

    #[test]
    fn test_single_local_violation() {
        let (v, t) = scores_for(&[0.2, 0.5, 0.3, 0.1]);
        assert!((v - 0.25).abs() < 1e-9, "rankfit_v={v}");
        // 4 concordant, 2 discordant pairs: tau = 1/3
        assert!((t - 2.0 / 3.0).abs() < 1e-9, "rankfit_t={t}");
    }

    #[test]
    fn test_violation_mass_saturates_at_zero() {
        // Range 0.2, violation mass 0.15 + 0.15 = 0.3
        let (v, _) = scores_for(&[0.3, 0.45, 0.3, 0.45, 0.25]);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_fewer_than_two_segments() {
        assert_eq!(rankfit_v(&[0.3], &[]), 1.0);
        assert_eq!(rankfit_t(&[0.3]), 1.0);
        assert_eq!(rankfit_v(&[], &[]), 1.0);
        assert_eq!(rankfit_t(&[]), 1.0);
    }

    #[test]
    fn test_kendall_tau_with_ties() {
        let x = [0.0, -1.0, -2.0, -3.0];
        let y = [0.5, 0.5, 0.2, 0.1];
        // 5 concordant, 1 tied in y: tau_b = 5 / sqrt(6 * 5)
        let tau = kendall_tau(&x, &y).unwrap();
        assert!((tau - 5.0 / 30f64.sqrt()).abs() < 1e-12, "tau={tau}");
        assert!(kendall_tau(&x, &[0.2; 4]).is_none());
        assert!(kendall_tau(&x, &[0.2; 3]).is_none());
    }

    #[test]
    fn test_scores_can_disagree() {
        // Locally sharp but globally decreasing
        let (v, t) = scores_for(&[0.9, 0.2, 0.6, 0.1, 0.05]);
        assert!(t > 0.7, "trend still mostly decreasing: {t}");
        assert!(v < 0.6, "sharp local violation penalised: {v}");
    }
}
