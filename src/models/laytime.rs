//! Laytime accounting models.
//!
//! This module contains the exclusion intervals produced by the exclusion walk
//! and the settlement verdicts produced for single ports and reversible voyages.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A maximal contiguous run of excluded hours sharing one reason.
///
/// # Example
///
/// ```
/// use charter_engine::models::ExclusionDetail;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let detail = ExclusionDetail {
///     start_time: NaiveDateTime::parse_from_str("2026-03-08 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-03-09 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     reason: "SHEX — Sunday excluded".to_string(),
///     hours: Decimal::new(24, 0),
/// };
/// assert_eq!(detail.hours, Decimal::new(24, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionDetail {
    /// Start of the first excluded slice in the run.
    pub start_time: NaiveDateTime,
    /// End of the run; never later than the laytime completion time.
    pub end_time: NaiveDateTime,
    /// Why the hours were excluded, e.g. "FHEX — Friday & Holiday excluded".
    pub reason: String,
    /// Excluded hours in the run (the last slice may be fractional).
    pub hours: Decimal,
}

/// Total excluded hours over a laytime span together with the merged runs.
///
/// The sum of `details[..].hours` always equals `excluded_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExclusionSummary {
    /// Total excluded hours.
    pub excluded_hours: Decimal,
    /// The merged exclusion runs, in chronological order.
    pub details: Vec<ExclusionDetail>,
}

/// The direction of a laytime settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaytimeOutcome {
    /// Used time exceeded allowed time; the charterer owes demurrage.
    OnDemurrage,
    /// Used time fell short of allowed time; the owner owes despatch.
    OnDespatch,
    /// Used time equals allowed time exactly.
    WithinLaytime,
}

impl std::fmt::Display for LaytimeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaytimeOutcome::OnDemurrage => write!(f, "on_demurrage"),
            LaytimeOutcome::OnDespatch => write!(f, "on_despatch"),
            LaytimeOutcome::WithinLaytime => write!(f, "within_laytime"),
        }
    }
}

/// The settlement verdict for a single port call.
///
/// `amount_due` is always a non-negative magnitude; `result` carries the
/// direction. A zero amount with a demurrage or despatch verdict means the
/// matching rate was not supplied.
///
/// # Example
///
/// ```
/// use charter_engine::models::{LaytimeOutcome, LaytimeResult};
/// use rust_decimal::Decimal;
///
/// let result = LaytimeResult {
///     used_hours: Decimal::new(90, 0),
///     result: LaytimeOutcome::OnDemurrage,
///     amount_due: Decimal::new(9000, 0),
/// };
/// assert_eq!(result.result.to_string(), "on_demurrage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaytimeResult {
    /// Hours counted against laytime (gross minus excluded).
    pub used_hours: Decimal,
    /// The settlement direction.
    pub result: LaytimeOutcome,
    /// The amount owed in the charter currency.
    pub amount_due: Decimal,
}

/// One port's contribution to a reversible-laytime settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversibleLaytimeEntry {
    /// Laytime allowed at this port, in hours.
    pub allowed_hours: Decimal,
    /// Laytime used at this port, in hours.
    pub used_hours: Decimal,
    /// Demurrage rate per day, if stated for this port.
    #[serde(default)]
    pub demurrage_rate: Option<Decimal>,
    /// Despatch rate per day, if stated for this port.
    #[serde(default)]
    pub despatch_rate: Option<Decimal>,
}

/// The combined verdict across all ports under a reversible-laytime clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversibleLaytimeResult {
    /// Sum of allowed hours over all ports.
    pub total_allowed_hours: Decimal,
    /// Sum of used hours over all ports.
    pub total_used_hours: Decimal,
    /// The settlement direction on the totals.
    pub result: LaytimeOutcome,
    /// The amount owed in the charter currency.
    pub amount_due: Decimal,
}
