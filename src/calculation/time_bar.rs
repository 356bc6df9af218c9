//! Claim time-bar.
//!
//! This module computes the deadline for submitting a demurrage or despatch
//! claim, counted in calendar days from completion of cargo operations.

use chrono::{Duration, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Calculates the claim deadline as `completed_at + time_bar_days` days.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the deadline falls outside the
/// representable date range.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::calculate_time_bar;
/// use chrono::NaiveDateTime;
///
/// let completed = NaiveDateTime::parse_from_str("2026-01-12 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let deadline = calculate_time_bar(completed, 90).unwrap();
/// assert_eq!(deadline.to_string(), "2026-04-12 20:00:00");
/// ```
pub fn calculate_time_bar(
    completed_at: NaiveDateTime,
    time_bar_days: u32,
) -> EngineResult<NaiveDateTime> {
    Duration::try_days(i64::from(time_bar_days))
        .and_then(|period| completed_at.checked_add_signed(period))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "time bar of {} days cannot be applied to completion at {}",
                time_bar_days, completed_at
            ),
        })
}
