//! Speed-performance claim.
//!
//! This module prices a good-weather speed shortfall as hire for the extra
//! time at sea it caused.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{SpeedClaimResult, WarrantyResult, WarrantyTerms};

use super::warranty::round_2dp;

/// Calculates the speed claim from a warranty evaluation.
///
/// `time_lost_factor = warranted speed / achieved speed − 1`, since time is
/// distance over speed and each good-weather day covers the same notional
/// distance at both speeds. `extra_days = good_weather_days × time_lost_factor`
/// and `claim_amount = round(extra_days × hire_rate, 2)`, never negative.
///
/// No claim arises (all zero) when there is no speed shortfall or no
/// good-weather day.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if a shortfall is recorded
/// against a good-weather average speed that is not positive, or if the
/// factor or the amount overflows the decimal range.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::calculate_speed_claim;
/// use charter_engine::models::{WarrantyResult, WarrantyTerms};
/// use rust_decimal::Decimal;
///
/// let terms = WarrantyTerms {
///     speed: Decimal::new(14, 0),
///     consumption: Decimal::new(30, 0),
///     beaufort_limit: 4,
///     sea_state_limit: None,
/// };
/// let result = WarrantyResult {
///     total_days: 10,
///     good_weather_days: 10,
///     bad_weather_days: 0,
///     warranty_compliant: false,
///     avg_speed_good_weather: Decimal::new(12, 0),
///     avg_consumption_good_weather: Decimal::new(30, 0),
///     speed_claim: Decimal::new(2, 0),
///     consumption_claim: Decimal::ZERO,
///     details: vec![],
/// };
///
/// let claim = calculate_speed_claim(&terms, &result, Decimal::new(20000, 0)).unwrap();
/// assert_eq!(claim.claim_amount, Decimal::new(3333333, 2));
/// ```
pub fn calculate_speed_claim(
    terms: &WarrantyTerms,
    result: &WarrantyResult,
    hire_rate: Decimal,
) -> EngineResult<SpeedClaimResult> {
    if result.speed_claim <= Decimal::ZERO || result.good_weather_days == 0 {
        return Ok(SpeedClaimResult::default());
    }

    let avg_speed = result.avg_speed_good_weather;
    if avg_speed <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "speed claim of {} knots recorded against a good-weather average speed of {}",
                result.speed_claim.normalize(),
                avg_speed.normalize()
            ),
        });
    }

    let overflow = || EngineError::CalculationError {
        message: format!(
            "speed claim for {} knots warranted against {} achieved over {} days is outside the decimal range",
            terms.speed.normalize(),
            avg_speed.normalize(),
            result.good_weather_days
        ),
    };

    let time_lost_factor = terms
        .speed
        .checked_div(avg_speed)
        .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
        .ok_or_else(overflow)?;
    let extra_days = Decimal::from(result.good_weather_days)
        .checked_mul(time_lost_factor)
        .ok_or_else(overflow)?;
    let claim_amount = extra_days
        .checked_mul(hire_rate)
        .map(|amount| round_2dp(amount).max(Decimal::ZERO))
        .ok_or_else(overflow)?;

    Ok(SpeedClaimResult {
        time_lost_factor,
        extra_days,
        claim_amount,
    })
}
