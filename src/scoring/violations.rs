use smallvec::SmallVec;

/// An adjacent pair where the worse-ranked segment has the higher event rate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Violation {
    /// Better-ranked segment (i)
    pub segment: usize,
    /// Worse-ranked segment (i + 1)
    pub next_segment: usize,
    pub rate: f64,
    pub next_rate: f64,
    /// next_rate - rate, always > 0
    pub severity: f64,
}

/// Violations in ascending segment order. Deciles yield at most 9.
pub type Violations = SmallVec<[Violation; 8]>;

/// Single left-to-right scan over adjacent segments, best to worst.
/// Any positive increase counts, there is no tolerance.
pub fn detect_violations(event_rates: &[f64]) -> Violations {
    event_rates
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1] > pair[0])
        .map(|(i, pair)| Violation {
            segment: i,
            next_segment: i + 1,
            rate: pair[0],
            next_rate: pair[1],
            severity: pair[1] - pair[0],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decreasing_has_no_violations() {
        assert!(detect_violations(&[0.9, 0.7, 0.5, 0.3, 0.1]).is_empty());
    }

    #[test]
    fn test_single_violation() {
        let v = detect_violations(&[0.2, 0.5, 0.3, 0.1]);
        assert_eq!(v.len(), 1);
        assert_eq!((v[0].segment, v[0].next_segment), (0, 1));
        assert_eq!(v[0].rate, 0.2);
        assert_eq!(v[0].next_rate, 0.5);
        assert!((v[0].severity - 0.3).abs() < 1e-12, "severity={}", v[0].severity);
    }

    #[test]
    fn test_ties_are_not_violations() {
        assert!(detect_violations(&[0.4, 0.4, 0.4]).is_empty());
    }

    #[test]
    fn test_tiny_increase_counts() {
        let v = detect_violations(&[0.5, 0.5 + 1e-12, 0.1]);
        assert_eq!(v.len(), 1);
        assert!(v[0].severity > 0.0);
    }

    #[test]
    fn test_multiple_violations_ordered() {
        let v = detect_violations(&[0.1, 0.3, 0.2, 0.6, 0.5]);
        let pairs: Vec<(usize, usize)> = v.iter().map(|x| (x.segment, x.next_segment)).collect();
        assert_eq!(pairs, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_short_sequences() {
        assert!(detect_violations(&[]).is_empty());
        assert!(detect_violations(&[0.3]).is_empty());
    }
}
