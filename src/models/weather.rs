//! Weather-warranty models.
//!
//! This module contains the daily weather observations, the warranted
//! performance terms, and the per-day and aggregate verdicts of a warranty
//! evaluation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's noon-report observation.
///
/// # Example
///
/// ```
/// use charter_engine::models::WeatherEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = WeatherEntry {
///     date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     beaufort_scale: 4,
///     actual_speed: Decimal::new(135, 1),
///     actual_consumption: Decimal::new(29, 0),
///     wind_speed: None,
///     wave_height: None,
/// };
/// assert_eq!(entry.beaufort_scale, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherEntry {
    /// The report date.
    pub date: NaiveDate,
    /// Observed Beaufort force, 0 to 12.
    pub beaufort_scale: u8,
    /// Average speed over the day, in knots.
    pub actual_speed: Decimal,
    /// Fuel consumed over the day, in tonnes.
    pub actual_consumption: Decimal,
    /// Observed wind speed in knots, if reported.
    #[serde(default)]
    pub wind_speed: Option<Decimal>,
    /// Observed significant wave height in metres, if reported.
    #[serde(default)]
    pub wave_height: Option<Decimal>,
}

/// The warranted performance figures and the good-weather definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyTerms {
    /// Warranted speed in knots.
    pub speed: Decimal,
    /// Warranted daily consumption in tonnes.
    pub consumption: Decimal,
    /// Highest Beaufort force still counted as good weather.
    pub beaufort_limit: u8,
    /// Highest Douglas sea state still counted as good weather, e.g. "moderate".
    #[serde(default)]
    pub sea_state_limit: Option<String>,
}

/// The per-day outcome of a warranty evaluation.
///
/// On bad-weather days both flags are forced to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyDayDetail {
    /// The report date.
    pub date: NaiveDate,
    /// Whether the day met the good-weather definition.
    pub good_weather: bool,
    /// Whether the warranted speed was achieved.
    pub speed_ok: bool,
    /// Whether consumption stayed within the warranted figure.
    pub consumption_ok: bool,
}

/// The aggregate outcome of a warranty evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyResult {
    /// Number of entries evaluated.
    pub total_days: u32,
    /// Number of good-weather entries.
    pub good_weather_days: u32,
    /// Number of bad-weather entries.
    pub bad_weather_days: u32,
    /// True when neither a speed nor a consumption claim arises.
    pub warranty_compliant: bool,
    /// Mean speed over good-weather days, zero when there are none.
    pub avg_speed_good_weather: Decimal,
    /// Mean consumption over good-weather days, zero when there are none.
    pub avg_consumption_good_weather: Decimal,
    /// Speed shortfall in knots, rounded to 2 decimals, never negative.
    pub speed_claim: Decimal,
    /// Consumption excess in tonnes per day, rounded to 2 decimals, never negative.
    pub consumption_claim: Decimal,
    /// The per-day verdicts, in input order.
    pub details: Vec<WarrantyDayDetail>,
}

/// Descriptive statistics over a voyage's weather log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherLogSummary {
    /// Number of log entries.
    pub total_entries: u32,
    /// Mean Beaufort force, rounded to 2 decimals.
    pub avg_beaufort: Decimal,
    /// Highest Beaufort force observed.
    pub max_beaufort: u8,
    /// Entries whose Beaufort force exceeded the warranty limit.
    pub days_above_beaufort_limit: u32,
    /// Share of days within warranty, as a percentage rounded to 2 decimals.
    pub warranty_compliance_percent: Decimal,
    /// Mean wind speed over the entries that report it.
    pub avg_wind_speed: Option<Decimal>,
    /// Mean wave height over the entries that report it.
    pub avg_wave_height: Option<Decimal>,
}

/// The derivation of a speed-performance claim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeedClaimResult {
    /// Warranted speed over achieved speed, minus one.
    pub time_lost_factor: Decimal,
    /// Extra days at sea attributed to the shortfall.
    pub extra_days: Decimal,
    /// The claim in the hire currency, rounded to 2 decimals.
    pub claim_amount: Decimal,
}
