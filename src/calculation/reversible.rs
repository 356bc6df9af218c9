//! Reversible laytime aggregation.
//!
//! Under a reversible-laytime clause, time saved at one port offsets time lost
//! at another, so the voyage is settled once on the summed hours.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LaytimeOutcome, ReversibleLaytimeEntry, ReversibleLaytimeResult};

use super::settlement::settle_used_time;

/// Settles a voyage under a reversible-laytime clause.
///
/// Allowed and used hours are summed over all ports. Each rate is taken from
/// the first entry that states one. An empty voyage is within laytime with
/// zero hours and zero amount.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the summed hours or the amount
/// overflow the decimal range.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::aggregate_reversible_laytime;
/// use charter_engine::models::{LaytimeOutcome, ReversibleLaytimeEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     ReversibleLaytimeEntry {
///         allowed_hours: Decimal::new(48, 0),
///         used_hours: Decimal::new(54, 0),
///         demurrage_rate: Some(Decimal::new(24000, 0)),
///         despatch_rate: None,
///     },
///     ReversibleLaytimeEntry {
///         allowed_hours: Decimal::new(72, 0),
///         used_hours: Decimal::new(62, 0),
///         demurrage_rate: None,
///         despatch_rate: Some(Decimal::new(12000, 0)),
///     },
/// ];
///
/// // 6 hours lost, 10 hours saved: 4 hours net despatch
/// let result = aggregate_reversible_laytime(&entries).unwrap();
/// assert_eq!(result.result, LaytimeOutcome::OnDespatch);
/// assert_eq!(result.amount_due, Decimal::new(2000, 0));
/// ```
pub fn aggregate_reversible_laytime(
    entries: &[ReversibleLaytimeEntry],
) -> EngineResult<ReversibleLaytimeResult> {
    if entries.is_empty() {
        return Ok(ReversibleLaytimeResult {
            total_allowed_hours: Decimal::ZERO,
            total_used_hours: Decimal::ZERO,
            result: LaytimeOutcome::WithinLaytime,
            amount_due: Decimal::ZERO,
        });
    }

    let total_allowed_hours = checked_total(entries.iter().map(|e| e.allowed_hours), "allowed")?;
    let total_used_hours = checked_total(entries.iter().map(|e| e.used_hours), "used")?;
    let demurrage_rate = entries.iter().find_map(|e| e.demurrage_rate);
    let despatch_rate = entries.iter().find_map(|e| e.despatch_rate);

    let (result, amount_due) = settle_used_time(
        total_allowed_hours,
        total_used_hours,
        demurrage_rate,
        despatch_rate,
    )?;

    Ok(ReversibleLaytimeResult {
        total_allowed_hours,
        total_used_hours,
        result,
        amount_due,
    })
}

fn checked_total(mut hours: impl Iterator<Item = Decimal>, kind: &str) -> EngineResult<Decimal> {
    hours
        .try_fold(Decimal::ZERO, |total, h| total.checked_add(h))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("total {} hours across ports is outside the decimal range", kind),
        })
}
