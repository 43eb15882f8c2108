// Candidate decision thresholds.

use crate::error::{BardError, Result};

/// Number of steps in the reference sweep.
const REFERENCE_STEPS: u32 = 4;
/// The reference sweep moves in twentieths.
const REFERENCE_DENOMINATOR: f64 = 20.0;

/// The reference sweep: 0.00, 0.05, 0.10, 0.15.
pub fn reference_thresholds() -> Vec<f64> {
    fractions(REFERENCE_DENOMINATOR, REFERENCE_STEPS)
}

/// `count` thresholds `0/d, 1/d, 2/d, ...`.
///
/// Dividing instead of accumulating a step keeps values like 3/20 exact
/// to the nearest double.
pub fn fractions(denominator: f64, count: u32) -> Vec<f64> {
    (0..count).map(|i| f64::from(i) / denominator).collect()
}

/// Parse a comma-separated threshold list such as `0.0, 0.25,0.5`.
///
/// An empty (or all-whitespace) string is an empty list. Order is kept.
pub fn parse_thresholds(input: &str) -> Result<Vec<f64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|raw| {
            let raw = raw.trim();
            raw.parse::<f64>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or_else(|| BardError::InvalidThreshold(raw.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sweep() {
        let ts = reference_thresholds();
        assert_eq!(ts.len(), 4);
        assert_eq!(ts, vec![0.0, 0.05, 0.10, 0.15]);
    }

    #[test]
    fn test_parse_keeps_order() {
        let ts = parse_thresholds("0.5, 0.1,0.3").unwrap();
        assert_eq!(ts, vec![0.5, 0.1, 0.3]);
    }

    #[test]
    fn test_parse_empty_is_empty_list() {
        assert!(parse_thresholds("").unwrap().is_empty());
        assert!(parse_thresholds("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_thresholds("0.1,abc").unwrap_err();
        assert!(matches!(err, BardError::InvalidThreshold(ref s) if s == "abc"));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_thresholds("NaN").is_err());
        assert!(parse_thresholds("0.1,inf").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_item() {
        assert!(parse_thresholds("0.1,,0.2").is_err());
    }
}
