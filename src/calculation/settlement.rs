//! Laytime settlement.
//!
//! This module turns allowed and used laytime into a demurrage, despatch or
//! within-laytime verdict and the amount owed.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LaytimeOutcome, LaytimeResult};

/// Hours in one running day; demurrage and despatch rates are quoted per day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Settles one port call.
///
/// `used_hours = gross_hours - excluded_hours`, compared against
/// `allowed_hours`:
/// - over: [`LaytimeOutcome::OnDemurrage`], `excess / 24 × demurrage_rate`
/// - under: [`LaytimeOutcome::OnDespatch`], `saved / 24 × despatch_rate`
/// - equal: [`LaytimeOutcome::WithinLaytime`], zero
///
/// A missing rate yields a zero amount with the verdict unchanged.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the hours or the amount
/// overflow the decimal range.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::settle_laytime;
/// use charter_engine::models::LaytimeOutcome;
/// use rust_decimal::Decimal;
///
/// let result = settle_laytime(
///     Decimal::new(72, 0),
///     Decimal::new(100, 0),
///     Decimal::new(10, 0),
///     Some(Decimal::new(12000, 0)),
///     None,
/// )
/// .unwrap();
/// assert_eq!(result.used_hours, Decimal::new(90, 0));
/// assert_eq!(result.result, LaytimeOutcome::OnDemurrage);
/// assert_eq!(result.amount_due, Decimal::new(9000, 0));
/// ```
pub fn settle_laytime(
    allowed_hours: Decimal,
    gross_hours: Decimal,
    excluded_hours: Decimal,
    demurrage_rate: Option<Decimal>,
    despatch_rate: Option<Decimal>,
) -> EngineResult<LaytimeResult> {
    let used_hours = gross_hours
        .checked_sub(excluded_hours)
        .ok_or_else(|| overflow("used hours", gross_hours, excluded_hours))?;
    let (result, amount_due) =
        settle_used_time(allowed_hours, used_hours, demurrage_rate, despatch_rate)?;

    Ok(LaytimeResult {
        used_hours,
        result,
        amount_due,
    })
}

/// The three-way verdict shared by single-port and reversible settlement.
pub(crate) fn settle_used_time(
    allowed_hours: Decimal,
    used_hours: Decimal,
    demurrage_rate: Option<Decimal>,
    despatch_rate: Option<Decimal>,
) -> EngineResult<(LaytimeOutcome, Decimal)> {
    let diff = used_hours
        .checked_sub(allowed_hours)
        .ok_or_else(|| overflow("laytime difference", used_hours, allowed_hours))?;

    if diff > Decimal::ZERO {
        Ok((LaytimeOutcome::OnDemurrage, price_hours(diff, demurrage_rate)?))
    } else if diff < Decimal::ZERO {
        Ok((LaytimeOutcome::OnDespatch, price_hours(-diff, despatch_rate)?))
    } else {
        Ok((LaytimeOutcome::WithinLaytime, Decimal::ZERO))
    }
}

/// `hours × rate / 24`, or zero without a rate.
fn price_hours(hours: Decimal, rate: Option<Decimal>) -> EngineResult<Decimal> {
    let Some(rate) = rate else {
        return Ok(Decimal::ZERO);
    };
    hours
        .checked_mul(rate)
        .map(|amount| amount / HOURS_PER_DAY)
        .ok_or_else(|| overflow("amount", hours, rate))
}

fn overflow(what: &str, left: Decimal, right: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "{} from {} and {} is outside the decimal range",
            what,
            left.normalize(),
            right.normalize()
        ),
    }
}
