//! Laytime commencement.
//!
//! This module computes when laytime starts to count from the time Notice of
//! Readiness was tendered and the contractual notice period.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::CommencementRule;

/// Calculates laytime commencement as `nor_tendered + notice_time_hours`.
///
/// All four NOR-validity clauses produce the same offset; the rule documents
/// which clause governed the NOR. The notice period is applied to the second.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the offset falls outside the
/// representable date range.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::calculate_commencement;
/// use charter_engine::models::CommencementRule;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let nor = NaiveDateTime::parse_from_str("2026-01-09 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let commenced = calculate_commencement(nor, CommencementRule::Wibon, Decimal::new(6, 0)).unwrap();
/// assert_eq!(commenced.to_string(), "2026-01-09 18:00:00");
/// ```
pub fn calculate_commencement(
    nor_tendered: NaiveDateTime,
    rule: CommencementRule,
    notice_time_hours: Decimal,
) -> EngineResult<NaiveDateTime> {
    let offset_error = || EngineError::CalculationError {
        message: format!(
            "notice time of {} hours under {} cannot be applied to NOR tendered at {}",
            notice_time_hours.normalize(),
            rule.label(),
            nor_tendered
        ),
    };

    let seconds = notice_time_hours
        .checked_mul(Decimal::from(3600))
        .and_then(|seconds| seconds.round().to_i64())
        .ok_or_else(offset_error)?;
    let offset = Duration::try_seconds(seconds).ok_or_else(offset_error)?;

    nor_tendered.checked_add_signed(offset).ok_or_else(offset_error)
}

/// Calculates laytime commencement for a NOR clause given as a contract string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRule`] if `rule` is not one of "wibon",
/// "wipon", "wifpon" or "wccon".
pub fn calculate_commencement_for_clause(
    nor_tendered: NaiveDateTime,
    rule: &str,
    notice_time_hours: Decimal,
) -> EngineResult<NaiveDateTime> {
    let rule: CommencementRule = rule.parse()?;
    calculate_commencement(nor_tendered, rule, notice_time_hours)
}
