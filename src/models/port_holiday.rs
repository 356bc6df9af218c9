//! Port holiday model.
//!
//! This module contains the [`PortHoliday`] type supplied by the port
//! reference-data calendar, and the lookup used when classifying laytime hours.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A holiday observed at the port of loading or discharge.
///
/// Only holidays flagged `affects_laytime` interrupt laytime under the
/// excepting clauses; the others are carried for display.
///
/// # Example
///
/// ```
/// use charter_engine::models::PortHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PortHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     affects_laytime: true,
///     name: Some("Republic Day".to_string()),
/// };
/// assert!(holiday.affects_laytime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortHoliday {
    /// The civil date of the holiday, in the laytime timezone.
    pub date: NaiveDate,
    /// Whether the holiday interrupts laytime.
    pub affects_laytime: bool,
    /// The name of the holiday, if the calendar provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Checks whether `date` is a laytime-affecting holiday in the given calendar.
///
/// # Example
///
/// ```
/// use charter_engine::models::{PortHoliday, is_laytime_holiday};
/// use chrono::NaiveDate;
///
/// let calendar = vec![
///     PortHoliday { date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(), affects_laytime: true, name: None },
///     PortHoliday { date: NaiveDate::from_ymd_opt(2026, 1, 27).unwrap(), affects_laytime: false, name: None },
/// ];
///
/// assert!(is_laytime_holiday(&calendar, NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// assert!(!is_laytime_holiday(&calendar, NaiveDate::from_ymd_opt(2026, 1, 27).unwrap()));
/// ```
pub fn is_laytime_holiday(holidays: &[PortHoliday], date: NaiveDate) -> bool {
    holidays.iter().any(|h| h.affects_laytime && h.date == date)
}
