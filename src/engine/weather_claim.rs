//! Weather-warranty claim statements.

use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info};

use crate::calculation::{
    SeaState, calculate_speed_claim, evaluate_warranty, summarize_weather_log,
};
use crate::error::EngineResult;
use crate::models::{AuditTrace, WarrantyTerms, WeatherClaimStatement, WeatherEntry};

use super::audit::{NO_GOOD_WEATHER_DAYS, UNKNOWN_SEA_STATE_LIMIT, record_step, record_warning};

/// Evaluates a voyage's noon reports against the weather warranty and prices
/// the resulting speed claim at `hire_rate` per day.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::CalculationError`] if a speed
/// shortfall is recorded against a non-positive good-weather average speed.
pub fn compute_weather_claim(
    warranty: &WarrantyTerms,
    hire_rate: Decimal,
    entries: &[WeatherEntry],
) -> EngineResult<WeatherClaimStatement> {
    debug!(entries = entries.len(), "Computing weather claim");
    let mut trace = AuditTrace::default();

    if let Some(limit) = warranty.sea_state_limit.as_deref() {
        if SeaState::from_descriptor(limit).is_none() {
            record_warning(
                &mut trace,
                UNKNOWN_SEA_STATE_LIMIT,
                format!("Sea-state limit '{}' is not recognised; treated as rough", limit),
                "medium",
            );
        }
    }

    let result = evaluate_warranty(entries, warranty);
    record_step(
        &mut trace,
        "warranty_evaluation",
        "Good-Weather Warranty Evaluation",
        "WEATHER_WARRANTY",
        json!({
            "warranted_speed": warranty.speed,
            "warranted_consumption": warranty.consumption,
            "beaufort_limit": warranty.beaufort_limit,
            "sea_state_limit": warranty.sea_state_limit,
            "total_days": result.total_days,
        }),
        json!({
            "good_weather_days": result.good_weather_days,
            "avg_speed_good_weather": result.avg_speed_good_weather,
            "avg_consumption_good_weather": result.avg_consumption_good_weather,
            "speed_claim": result.speed_claim,
            "consumption_claim": result.consumption_claim,
            "warranty_compliant": result.warranty_compliant,
        }),
        format!(
            "{} of {} days in good weather; speed shortfall {} knots, consumption excess {}",
            result.good_weather_days,
            result.total_days,
            result.speed_claim.normalize(),
            result.consumption_claim.normalize()
        ),
    );
    if result.good_weather_days == 0 {
        record_warning(
            &mut trace,
            NO_GOOD_WEATHER_DAYS,
            "No good-weather day was reported; performance cannot be measured".to_string(),
            "high",
        );
    }

    let summary = summarize_weather_log(entries, warranty);
    record_step(
        &mut trace,
        "weather_log_summary",
        "Weather Log Summary",
        "WEATHER_WARRANTY",
        json!({ "total_entries": summary.total_entries }),
        json!({
            "avg_beaufort": summary.avg_beaufort,
            "max_beaufort": summary.max_beaufort,
            "days_above_beaufort_limit": summary.days_above_beaufort_limit,
            "warranty_compliance_percent": summary.warranty_compliance_percent,
        }),
        format!(
            "{} day(s) above Beaufort {}; {}% of days within warranty",
            summary.days_above_beaufort_limit,
            warranty.beaufort_limit,
            summary.warranty_compliance_percent.normalize()
        ),
    );

    let speed_claim = calculate_speed_claim(warranty, &result, hire_rate)?;
    record_step(
        &mut trace,
        "speed_claim",
        "Speed Performance Claim",
        "WEATHER_WARRANTY",
        json!({
            "speed_claim": result.speed_claim,
            "good_weather_days": result.good_weather_days,
            "hire_rate": hire_rate,
        }),
        json!({
            "time_lost_factor": speed_claim.time_lost_factor,
            "extra_days": speed_claim.extra_days,
            "claim_amount": speed_claim.claim_amount,
        }),
        format!(
            "{} extra days at sea priced at {} per day",
            speed_claim.extra_days.round_dp(4).normalize(),
            hire_rate.normalize()
        ),
    );

    info!(
        total_days = result.total_days,
        good_weather_days = result.good_weather_days,
        compliant = result.warranty_compliant,
        claim_amount = %speed_claim.claim_amount,
        "Weather claim completed"
    );

    Ok(WeatherClaimStatement {
        warranty: result,
        summary,
        hire_rate,
        speed_claim,
        audit_trace: trace,
    })
}
