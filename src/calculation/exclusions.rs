//! Laytime exclusion walk.
//!
//! This module walks a laytime span hour by hour, classifies each slice under
//! the exception clause, and merges consecutive excluded slices that share a
//! reason into [`ExclusionDetail`] runs.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{ExceptionRule, ExclusionDetail, ExclusionSummary, PortHoliday};

use super::day_detection::{exclusion_reason, slice_by_hour};

/// An exclusion run that has not been flushed yet.
struct OpenBlock {
    start_time: NaiveDateTime,
    reason: String,
    hours: Decimal,
}

impl OpenBlock {
    fn close(self, end_time: NaiveDateTime) -> ExclusionDetail {
        ExclusionDetail {
            start_time: self.start_time,
            end_time,
            reason: self.reason,
            hours: self.hours,
        }
    }
}

/// Calculates the excluded hours over `[commenced_at, completed_at)`.
///
/// Each one-hour slice (the last may be shorter) is classified at its start
/// instant. Consecutive excluded slices with the same reason are merged; a
/// change of reason or a counted slice closes the run at the start of that
/// slice, and a run still open at the end is closed at `completed_at`.
///
/// Under SHINC nothing is excluded. An empty or inverted span excludes nothing.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::calculate_exclusions;
/// use charter_engine::models::ExceptionRule;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Thursday 2026-03-05 00:00 to Thursday 2026-03-12 00:00 contains one Sunday
/// let commenced = NaiveDateTime::parse_from_str("2026-03-05 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let completed = NaiveDateTime::parse_from_str("2026-03-12 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let summary = calculate_exclusions(commenced, completed, ExceptionRule::Shex, &[]);
/// assert_eq!(summary.excluded_hours, Decimal::new(24, 0));
/// assert_eq!(summary.details.len(), 1);
/// assert!(summary.details[0].reason.contains("Sunday"));
/// ```
pub fn calculate_exclusions(
    commenced_at: NaiveDateTime,
    completed_at: NaiveDateTime,
    rule: ExceptionRule,
    holidays: &[PortHoliday],
) -> ExclusionSummary {
    if rule == ExceptionRule::Shinc {
        return ExclusionSummary::default();
    }

    let mut excluded_hours = Decimal::ZERO;
    let mut details = Vec::new();
    let mut open: Option<OpenBlock> = None;

    for slice in slice_by_hour(commenced_at, completed_at) {
        match exclusion_reason(slice.start_time, rule, holidays) {
            Some(reason) => {
                excluded_hours += slice.hours;
                match open.as_mut() {
                    Some(block) if block.reason == reason => block.hours += slice.hours,
                    Some(_) | None => {
                        if let Some(block) = open.take() {
                            details.push(block.close(slice.start_time));
                        }
                        open = Some(OpenBlock {
                            start_time: slice.start_time,
                            reason,
                            hours: slice.hours,
                        });
                    }
                }
            }
            None => {
                if let Some(block) = open.take() {
                    details.push(block.close(slice.start_time));
                }
            }
        }
    }

    if let Some(block) = open.take() {
        details.push(block.close(completed_at));
    }

    ExclusionSummary {
        excluded_hours,
        details,
    }
}

/// Calculates exclusions for an exception clause given as a contract string.
///
/// The clause is resolved lazily, the way the hour walk would meet it: "shinc"
/// returns immediately, a span with no slices returns zero without looking at
/// the clause, and only otherwise is an unknown clause reported as
/// [`EngineError::InvalidRule`](crate::error::EngineError::InvalidRule).
///
/// # Example
///
/// ```
/// use charter_engine::calculation::calculate_exclusions_for_clause;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2026-03-08 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // An empty span never surfaces the unknown clause
/// assert!(calculate_exclusions_for_clause(t, t, "sundays-off", &[]).is_ok());
///
/// let later = t + chrono::Duration::hours(2);
/// assert!(calculate_exclusions_for_clause(t, later, "sundays-off", &[]).is_err());
/// ```
pub fn calculate_exclusions_for_clause(
    commenced_at: NaiveDateTime,
    completed_at: NaiveDateTime,
    clause: &str,
    holidays: &[PortHoliday],
) -> EngineResult<ExclusionSummary> {
    if clause.trim().eq_ignore_ascii_case("shinc") || completed_at <= commenced_at {
        return Ok(ExclusionSummary::default());
    }

    let rule: ExceptionRule = clause.parse()?;
    Ok(calculate_exclusions(commenced_at, completed_at, rule, holidays))
}
