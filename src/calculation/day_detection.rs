//! Hour slicing and exclusion classification.
//!
//! This module splits a laytime span into one-hour slices and decides, for the
//! start instant of each slice, whether the exception clause excludes it and why.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ExceptionRule, PortHoliday, is_laytime_holiday};

/// A slice of a laytime span, at most one hour long.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::HourSlice;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let slice = HourSlice {
///     start_time: NaiveDateTime::parse_from_str("2026-03-08 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-03-08 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::new(5, 1),
/// };
/// assert_eq!(slice.hours, Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlice {
    /// The start of the slice; classification is evaluated at this instant.
    pub start_time: NaiveDateTime,
    /// The end of the slice, capped at the end of the span.
    pub end_time: NaiveDateTime,
    /// The length of the slice in hours (1 except possibly for the last slice).
    pub hours: Decimal,
}

/// Splits `[start, end)` into consecutive one-hour slices.
///
/// The trailing slice is shorter when the span is not a whole number of hours.
/// An empty or inverted span yields no slices.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::slice_by_hour;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-08 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-08 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let slices = slice_by_hour(start, end);
/// assert_eq!(slices.len(), 3);
/// assert_eq!(slices[2].hours, Decimal::new(5, 1));
/// assert_eq!(slices[2].end_time, end);
/// ```
pub fn slice_by_hour(start: NaiveDateTime, end: NaiveDateTime) -> Vec<HourSlice> {
    let mut slices = Vec::new();
    let mut cursor = start;

    while cursor < end {
        // Within an hour of the maximum timestamp the slice simply runs to `end`
        let slice_end = cursor
            .checked_add_signed(Duration::hours(1))
            .map_or(end, |next| next.min(end));
        slices.push(HourSlice {
            start_time: cursor,
            end_time: slice_end,
            hours: hours_between(cursor, slice_end),
        });
        cursor = slice_end;
    }

    slices
}

/// Returns the exclusion reason for the hour starting at `instant`, if any.
///
/// - SHINC never excludes.
/// - SHEX, EIU and UU exclude Sundays and laytime-affecting holidays.
/// - FHEX excludes Fridays and laytime-affecting holidays.
///
/// The reason names the clause and only the grounds that actually apply, e.g.
/// "SHEX — Sunday excluded" or "FHEX — Friday & Holiday excluded".
///
/// # Example
///
/// ```
/// use charter_engine::calculation::exclusion_reason;
/// use charter_engine::models::ExceptionRule;
/// use chrono::NaiveDateTime;
///
/// // 2026-03-08 is a Sunday
/// let sunday = NaiveDateTime::parse_from_str("2026-03-08 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     exclusion_reason(sunday, ExceptionRule::Shex, &[]).as_deref(),
///     Some("SHEX — Sunday excluded")
/// );
/// assert_eq!(exclusion_reason(sunday, ExceptionRule::Fhex, &[]), None);
/// assert_eq!(exclusion_reason(sunday, ExceptionRule::Shinc, &[]), None);
/// ```
pub fn exclusion_reason(
    instant: NaiveDateTime,
    rule: ExceptionRule,
    holidays: &[PortHoliday],
) -> Option<String> {
    let (excepted_day, day_name) = match rule {
        ExceptionRule::Shinc => return None,
        ExceptionRule::Fhex => (Weekday::Fri, "Friday"),
        ExceptionRule::Shex | ExceptionRule::Eiu | ExceptionRule::Uu => (Weekday::Sun, "Sunday"),
    };

    let on_excepted_day = instant.weekday() == excepted_day;
    let on_holiday = is_laytime_holiday(holidays, instant.date());

    let grounds = match (on_excepted_day, on_holiday) {
        (true, true) => format!("{} & Holiday", day_name),
        (true, false) => day_name.to_string(),
        (false, true) => "Holiday".to_string(),
        (false, false) => return None,
    };

    Some(format!("{} — {} excluded", rule.label(), grounds))
}

/// Calculates the number of hours between two datetimes.
///
/// Negative when `end` precedes `start`.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::from(seconds) / Decimal::from(3600)
}
