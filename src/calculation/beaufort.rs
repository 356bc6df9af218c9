//! Beaufort scale and Douglas sea-state lookup.
//!
//! This module maps a Beaufort force to its WMO wind description and an
//! approximate Douglas sea state, and ranks sea-state descriptors by severity.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Douglas sea state, ordered from calm to phenomenal.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::SeaState;
///
/// assert_eq!(SeaState::CalmGlassy.rank(), 0);
/// assert_eq!(SeaState::Phenomenal.rank(), 9);
/// assert_eq!(SeaState::from_descriptor("Very rough"), Some(SeaState::VeryRough));
/// assert_eq!(SeaState::rank_of_descriptor("choppy"), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeaState {
    /// Calm, glassy surface (0 m).
    CalmGlassy,
    /// Calm, rippled surface (0 to 0.1 m).
    CalmRippled,
    /// Smooth, wavelets (0.1 to 0.5 m).
    Smooth,
    /// Slight (0.5 to 1.25 m).
    Slight,
    /// Moderate (1.25 to 2.5 m).
    Moderate,
    /// Rough (2.5 to 4 m).
    Rough,
    /// Very rough (4 to 6 m).
    VeryRough,
    /// High (6 to 9 m).
    High,
    /// Very high (9 to 14 m).
    VeryHigh,
    /// Phenomenal (over 14 m).
    Phenomenal,
}

/// Rank assumed for a sea-state descriptor that is not recognized.
pub const UNKNOWN_SEA_STATE_RANK: u8 = 5;

const SEA_STATES: [SeaState; 10] = [
    SeaState::CalmGlassy,
    SeaState::CalmRippled,
    SeaState::Smooth,
    SeaState::Slight,
    SeaState::Moderate,
    SeaState::Rough,
    SeaState::VeryRough,
    SeaState::High,
    SeaState::VeryHigh,
    SeaState::Phenomenal,
];

impl SeaState {
    /// Severity rank, 0 (calm-glassy) to 9 (phenomenal).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The kebab-case key, e.g. "very-rough".
    pub fn key(self) -> &'static str {
        match self {
            SeaState::CalmGlassy => "calm-glassy",
            SeaState::CalmRippled => "calm-rippled",
            SeaState::Smooth => "smooth",
            SeaState::Slight => "slight",
            SeaState::Moderate => "moderate",
            SeaState::Rough => "rough",
            SeaState::VeryRough => "very-rough",
            SeaState::High => "high",
            SeaState::VeryHigh => "very-high",
            SeaState::Phenomenal => "phenomenal",
        }
    }

    /// The display description, e.g. "Calm (glassy)".
    pub fn description(self) -> &'static str {
        match self {
            SeaState::CalmGlassy => "Calm (glassy)",
            SeaState::CalmRippled => "Calm (rippled)",
            SeaState::Smooth => "Smooth (wavelets)",
            SeaState::Slight => "Slight",
            SeaState::Moderate => "Moderate",
            SeaState::Rough => "Rough",
            SeaState::VeryRough => "Very rough",
            SeaState::High => "High",
            SeaState::VeryHigh => "Very high",
            SeaState::Phenomenal => "Phenomenal",
        }
    }

    /// Parses a descriptor given as a key, a description or in snake case.
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        let normalized = normalize_descriptor(descriptor);
        let key = match normalized.as_str() {
            "smooth-wavelets" => "smooth",
            other => other,
        };
        SEA_STATES.iter().copied().find(|s| s.key() == key)
    }

    /// Severity rank of a descriptor; unknown descriptors rank as rough.
    pub fn rank_of_descriptor(descriptor: &str) -> u8 {
        Self::from_descriptor(descriptor).map_or(UNKNOWN_SEA_STATE_RANK, Self::rank)
    }
}

impl std::fmt::Display for SeaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Lower-cases and collapses every run of non-alphanumerics into one hyphen.
fn normalize_descriptor(descriptor: &str) -> String {
    descriptor
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

const WIND_DESCRIPTIONS: [&str; 13] = [
    "Calm (glassy)",
    "Light air",
    "Light breeze",
    "Gentle breeze",
    "Moderate breeze",
    "Fresh breeze",
    "Strong breeze",
    "Near gale",
    "Gale",
    "Strong gale",
    "Storm",
    "Violent storm",
    "Hurricane force",
];

const BEAUFORT_SEA_STATES: [SeaState; 13] = [
    SeaState::CalmGlassy,
    SeaState::CalmRippled,
    SeaState::Smooth,
    SeaState::Slight,
    SeaState::Moderate,
    SeaState::Rough,
    SeaState::VeryRough,
    SeaState::High,
    SeaState::High,
    SeaState::VeryHigh,
    SeaState::VeryHigh,
    SeaState::Phenomenal,
    SeaState::Phenomenal,
];

/// A Beaufort force with its wind and sea-state descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeaufortDescription {
    /// The Beaufort force after clamping and rounding, 0 to 12.
    pub force: u8,
    /// The WMO wind description.
    pub wind_description: &'static str,
    /// The approximate Douglas sea state.
    pub sea_state: SeaState,
}

/// Describes a Beaufort force.
///
/// The input is clamped to `[0, 12]` and rounded to the nearest integer
/// (halves away from zero) before lookup; out-of-range input is not an error.
///
/// # Example
///
/// ```
/// use charter_engine::calculation::{describe_beaufort, SeaState};
/// use rust_decimal::Decimal;
///
/// let calm = describe_beaufort(Decimal::ZERO);
/// assert_eq!(calm.wind_description, "Calm (glassy)");
/// assert_eq!(calm.sea_state.description(), "Calm (glassy)");
///
/// let storm = describe_beaufort(Decimal::new(15, 0));
/// assert_eq!(storm.force, 12);
/// assert_eq!(storm.wind_description, "Hurricane force");
/// assert_eq!(storm.sea_state, SeaState::Phenomenal);
/// ```
pub fn describe_beaufort(scale: Decimal) -> BeaufortDescription {
    let force = scale
        .clamp(Decimal::ZERO, Decimal::from(12))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0);
    let index = usize::from(force);

    BeaufortDescription {
        force,
        wind_description: WIND_DESCRIPTIONS[index],
        sea_state: BEAUFORT_SEA_STATES[index],
    }
}

/// Returns the approximate Douglas sea state for a Beaufort force.
pub fn sea_state_for_beaufort(scale: Decimal) -> SeaState {
    describe_beaufort(scale).sea_state
}
