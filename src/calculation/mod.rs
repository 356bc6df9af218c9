//! Calculation logic for the charter engine.
//!
//! This module contains the pure calculation functions: laytime commencement,
//! hour slicing and exclusion classification, the exclusion walk, single-port
//! and reversible settlement, the claim time-bar, the Beaufort and sea-state
//! lookup, weather-warranty evaluation, and the speed claim.

mod beaufort;
mod claim;
mod commencement;
mod day_detection;
mod exclusions;
mod reversible;
mod settlement;
mod time_bar;
mod warranty;

pub use beaufort::{
    BeaufortDescription, SeaState, UNKNOWN_SEA_STATE_RANK, describe_beaufort,
    sea_state_for_beaufort,
};
pub use claim::calculate_speed_claim;
pub use commencement::{calculate_commencement, calculate_commencement_for_clause};
pub use day_detection::{HourSlice, exclusion_reason, hours_between, slice_by_hour};
pub use exclusions::{calculate_exclusions, calculate_exclusions_for_clause};
pub use reversible::aggregate_reversible_laytime;
pub use settlement::{HOURS_PER_DAY, settle_laytime};
pub use time_bar::calculate_time_bar;
pub use warranty::{classify_weather_day, evaluate_warranty, is_good_weather, summarize_weather_log};
