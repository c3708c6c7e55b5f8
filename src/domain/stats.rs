//! Derived reduction statistics for a completed summary.
//!
//! Given the original and summary lengths reported by the service, this module
//! computes how much shorter the summary is as a rounded percentage. The
//! computation is pure and exists only while a successful result is displayed.

use crate::domain::error::{PrecisError, Result};

/// Length statistics derived from a completed summarization.
///
/// Produced once per successful request and replaced wholesale on the next
/// submission. The lengths come from the service response; the reduction
/// percentage is computed client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    /// Character count of the submitted text, as reported by the service.
    pub original_length: usize,

    /// Character count of the returned summary, as reported by the service.
    pub summary_length: usize,

    /// Percentage decrease in length from original to summary, rounded
    /// half-up. Negative if the service returned a summary longer than the
    /// original, which is unexpected but not rejected.
    pub reduction_percent: i64,
}

/// Computes reduction statistics from the reported lengths.
///
/// `reduction_percent` is `round((1 - summary / original) * 100)` with
/// half-up rounding.
///
/// # Errors
///
/// Returns [`PrecisError::Stats`] when `original_length` is zero, which makes
/// the percentage undefined. Input validation keeps empty text from reaching
/// the service, so this only occurs on a malformed response.
///
/// # Example
///
/// ```rust
/// use precis::domain::stats::compute_stats;
///
/// let stats = compute_stats(100, 25).unwrap();
/// assert_eq!(stats.reduction_percent, 75);
/// ```
pub fn compute_stats(original_length: usize, summary_length: usize) -> Result<SummaryStats> {
    if original_length == 0 {
        return Err(PrecisError::Stats(
            "original length must be greater than zero".to_string(),
        ));
    }

    let ratio = summary_length as f64 / original_length as f64;
    let reduction_percent = ((1.0 - ratio) * 100.0).round() as i64;

    Ok(SummaryStats {
        original_length,
        summary_length,
        reduction_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_length_summary_is_seventy_five_percent() {
        let stats = compute_stats(100, 25).unwrap();
        assert_eq!(stats.original_length, 100);
        assert_eq!(stats.summary_length, 25);
        assert_eq!(stats.reduction_percent, 75);
    }

    #[test]
    fn unchanged_length_is_zero_percent() {
        assert_eq!(compute_stats(100, 100).unwrap().reduction_percent, 0);
    }

    #[test]
    fn fractional_results_round_half_up() {
        // 1 - 1/3 = 66.67%
        assert_eq!(compute_stats(3, 1).unwrap().reduction_percent, 67);
        // 1 - 7/8 = 12.5%
        assert_eq!(compute_stats(8, 7).unwrap().reduction_percent, 13);
    }

    #[test]
    fn longer_summary_yields_negative_reduction() {
        assert_eq!(compute_stats(100, 150).unwrap().reduction_percent, -50);
    }

    #[test]
    fn zero_original_length_is_an_error() {
        assert!(compute_stats(0, 5).is_err());
    }
}
