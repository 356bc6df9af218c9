//! Weather classification and warranty evaluation.
//!
//! This module classifies each noon report as good or bad weather under the
//! warranty terms, checks speed and consumption on good-weather days only, and
//! aggregates the one-directional speed and consumption claims.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    WarrantyDayDetail, WarrantyResult, WarrantyTerms, WeatherEntry, WeatherLogSummary,
};

use super::beaufort::{SeaState, sea_state_for_beaufort};

/// Rounds to 2 decimal places, halves away from zero.
pub(crate) fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Decides whether a report counts as good weather under the warranty.
///
/// The Beaufort force must not exceed `beaufort_limit` and, when a sea-state
/// limit is given, the Beaufort-derived sea state must not be more severe than
/// it. An unrecognized sea-state limit ranks as "rough".
///
/// # Example
///
/// ```
/// use charter_engine::calculation::is_good_weather;
/// use charter_engine::models::{WarrantyTerms, WeatherEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let terms = WarrantyTerms {
///     speed: Decimal::new(14, 0),
///     consumption: Decimal::new(30, 0),
///     beaufort_limit: 4,
///     sea_state_limit: None,
/// };
/// let mut entry = WeatherEntry {
///     date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     beaufort_scale: 4,
///     actual_speed: Decimal::new(13, 0),
///     actual_consumption: Decimal::new(29, 0),
///     wind_speed: None,
///     wave_height: None,
/// };
/// assert!(is_good_weather(&entry, &terms));
///
/// entry.beaufort_scale = 5;
/// assert!(!is_good_weather(&entry, &terms));
/// ```
pub fn is_good_weather(entry: &WeatherEntry, terms: &WarrantyTerms) -> bool {
    is_good_weather_with_rank(entry, terms, sea_state_limit_rank(terms))
}

fn sea_state_limit_rank(terms: &WarrantyTerms) -> Option<u8> {
    terms.sea_state_limit.as_deref().map(SeaState::rank_of_descriptor)
}

fn is_good_weather_with_rank(
    entry: &WeatherEntry,
    terms: &WarrantyTerms,
    limit_rank: Option<u8>,
) -> bool {
    if entry.beaufort_scale > terms.beaufort_limit {
        return false;
    }
    match limit_rank {
        Some(limit) => sea_state_for_beaufort(Decimal::from(entry.beaufort_scale)).rank() <= limit,
        None => true,
    }
}

/// Classifies one report and checks it against the warranted figures.
///
/// On a bad-weather day both checks are forced to pass.
pub fn classify_weather_day(entry: &WeatherEntry, terms: &WarrantyTerms) -> WarrantyDayDetail {
    classify_with_rank(entry, terms, sea_state_limit_rank(terms))
}

fn classify_with_rank(
    entry: &WeatherEntry,
    terms: &WarrantyTerms,
    limit_rank: Option<u8>,
) -> WarrantyDayDetail {
    let good_weather = is_good_weather_with_rank(entry, terms, limit_rank);
    WarrantyDayDetail {
        date: entry.date,
        good_weather,
        speed_ok: !good_weather || entry.actual_speed >= terms.speed,
        consumption_ok: !good_weather || entry.actual_consumption <= terms.consumption,
    }
}

/// Evaluates a voyage's noon reports against the weather warranty.
///
/// Averages cover good-weather days only. The speed claim is the shortfall of
/// the average speed below the warranted speed, the consumption claim the
/// excess of average consumption over the warranted figure; both are rounded
/// to 2 decimals and never negative. With no good-weather day there is nothing
/// to measure, so both claims are zero and the voyage is compliant.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::evaluate_warranty;
/// use charter_engine::models::{WarrantyTerms, WeatherEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let terms = WarrantyTerms {
///     speed: Decimal::new(14, 0),
///     consumption: Decimal::new(30, 0),
///     beaufort_limit: 4,
///     sea_state_limit: None,
/// };
/// let entries: Vec<WeatherEntry> = [13, 12, 14, 15]
///     .iter()
///     .enumerate()
///     .map(|(i, speed)| WeatherEntry {
///         date: NaiveDate::from_ymd_opt(2026, 2, 1 + i as u32).unwrap(),
///         beaufort_scale: 3,
///         actual_speed: Decimal::from(*speed),
///         actual_consumption: Decimal::new(28, 0),
///         wind_speed: None,
///         wave_height: None,
///     })
///     .collect();
///
/// let result = evaluate_warranty(&entries, &terms);
/// assert_eq!(result.avg_speed_good_weather, Decimal::new(135, 1));
/// assert_eq!(result.speed_claim, Decimal::new(5, 1));
/// assert!(!result.warranty_compliant);
/// ```
pub fn evaluate_warranty(entries: &[WeatherEntry], terms: &WarrantyTerms) -> WarrantyResult {
    let limit_rank = sea_state_limit_rank(terms);
    let details: Vec<WarrantyDayDetail> = entries
        .iter()
        .map(|entry| classify_with_rank(entry, terms, limit_rank))
        .collect();

    let good: Vec<&WeatherEntry> = entries
        .iter()
        .zip(&details)
        .filter(|(_, detail)| detail.good_weather)
        .map(|(entry, _)| entry)
        .collect();

    let total_days = entries.len() as u32;
    let good_weather_days = good.len() as u32;

    let (avg_speed, avg_consumption, speed_claim, consumption_claim) = if good.is_empty() {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    } else {
        let count = Decimal::from(good_weather_days);
        let avg_speed = good.iter().map(|e| e.actual_speed).sum::<Decimal>() / count;
        let avg_consumption = good.iter().map(|e| e.actual_consumption).sum::<Decimal>() / count;
        (
            avg_speed,
            avg_consumption,
            round_2dp((terms.speed - avg_speed).max(Decimal::ZERO)),
            round_2dp((avg_consumption - terms.consumption).max(Decimal::ZERO)),
        )
    };

    WarrantyResult {
        total_days,
        good_weather_days,
        bad_weather_days: total_days - good_weather_days,
        warranty_compliant: speed_claim.is_zero() && consumption_claim.is_zero(),
        avg_speed_good_weather: avg_speed,
        avg_consumption_good_weather: avg_consumption,
        speed_claim,
        consumption_claim,
        details,
    }
}

/// Summarizes a voyage's weather log.
///
/// Averages of the optional wind and wave observations cover only the entries
/// that report them.
pub fn summarize_weather_log(entries: &[WeatherEntry], terms: &WarrantyTerms) -> WeatherLogSummary {
    let total_entries = entries.len() as u32;
    if entries.is_empty() {
        return WeatherLogSummary {
            total_entries: 0,
            avg_beaufort: Decimal::ZERO,
            max_beaufort: 0,
            days_above_beaufort_limit: 0,
            warranty_compliance_percent: Decimal::ZERO,
            avg_wind_speed: None,
            avg_wave_height: None,
        };
    }

    let count = Decimal::from(total_entries);
    let beaufort_sum: Decimal = entries.iter().map(|e| Decimal::from(e.beaufort_scale)).sum();
    let max_beaufort = entries.iter().map(|e| e.beaufort_scale).max().unwrap_or(0);
    let days_above_beaufort_limit = entries
        .iter()
        .filter(|e| e.beaufort_scale > terms.beaufort_limit)
        .count() as u32;

    let limit_rank = sea_state_limit_rank(terms);
    let within_warranty = entries
        .iter()
        .map(|entry| classify_with_rank(entry, terms, limit_rank))
        .filter(|detail| detail.speed_ok && detail.consumption_ok)
        .count();

    WeatherLogSummary {
        total_entries,
        avg_beaufort: round_2dp(beaufort_sum / count),
        max_beaufort,
        days_above_beaufort_limit,
        warranty_compliance_percent: round_2dp(
            Decimal::from(within_warranty as u32) * Decimal::ONE_HUNDRED / count,
        ),
        avg_wind_speed: mean_of_reported(entries.iter().map(|e| e.wind_speed)),
        avg_wave_height: mean_of_reported(entries.iter().map(|e| e.wave_height)),
    }
}

fn mean_of_reported(values: impl Iterator<Item = Option<Decimal>>) -> Option<Decimal> {
    let reported: Vec<Decimal> = values.flatten().collect();
    if reported.is_empty() {
        return None;
    }
    let sum: Decimal = reported.iter().sum();
    Some(round_2dp(sum / Decimal::from(reported.len() as u32)))
}
