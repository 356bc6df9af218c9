//! Statement models for the charter engine.
//!
//! This module contains the [`LaytimeStatement`], [`VoyageSettlement`] and
//! [`WeatherClaimStatement`] types that capture every output of an orchestrated
//! calculation together with an audit trace.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    CommencementRule, ExclusionDetail, LaytimeResult, ReversibleLaytimeResult, SpeedClaimResult,
    WarrantyResult, WeatherLogSummary,
};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The charterparty clause tag for this rule (e.g. "SHEX", "WIBON").
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag results that are computed as specified but need a human
/// decision, such as a demurrage verdict with no rate on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning, e.g. "RATE_UNKNOWN".
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use charter_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warning("RATE_UNKNOWN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The laytime statement for one port call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaytimeStatement {
    /// The port this statement covers.
    pub port: String,
    /// The clause under which NOR was tendered.
    pub commencement_rule: CommencementRule,
    /// The exception clause tag as stated in the charterparty.
    pub exception_rule: String,
    /// When NOR was tendered.
    pub nor_tendered: NaiveDateTime,
    /// When laytime commenced (NOR plus notice time).
    pub commenced_at: NaiveDateTime,
    /// When cargo operations were completed.
    pub completed_at: NaiveDateTime,
    /// Laytime allowed at this port, in hours.
    pub allowed_hours: Decimal,
    /// Hours between commencement and completion.
    pub gross_hours: Decimal,
    /// Hours excluded under the exception clause.
    pub excluded_hours: Decimal,
    /// The merged exclusion runs.
    pub exclusions: Vec<ExclusionDetail>,
    /// The settlement verdict.
    pub settlement: LaytimeResult,
    /// The last moment a claim on this port call may be submitted.
    pub time_bar_deadline: NaiveDateTime,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The settlement of a whole voyage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoyageSettlement {
    /// One statement per port call, in request order.
    pub ports: Vec<LaytimeStatement>,
    /// The combined verdict, present only under a reversible-laytime clause.
    pub reversible: Option<ReversibleLaytimeResult>,
}

/// The weather-warranty evaluation and resulting claim for one voyage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherClaimStatement {
    /// The aggregate warranty verdict.
    pub warranty: WarrantyResult,
    /// Descriptive statistics over the weather log.
    pub summary: WeatherLogSummary,
    /// The daily hire rate the claim was priced at.
    pub hire_rate: Decimal,
    /// The speed-performance claim.
    pub speed_claim: SpeedClaimResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_step(step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: "laytime_settlement".to_string(),
            rule_name: "Laytime Settlement".to_string(),
            clause_ref: "SHEX".to_string(),
            input: serde_json::json!({ "allowed_hours": "72" }),
            output: serde_json::json!({ "result": "on_demurrage" }),
            reasoning: "18 hours over allowed laytime".to_string(),
        }
    }

    #[test]
    fn test_next_step_number_starts_at_one() {
        let mut trace = AuditTrace::default();
        assert_eq!(trace.next_step_number(), 1);

        trace.steps.push(create_sample_step(1));
        assert_eq!(trace.next_step_number(), 2);
    }

    #[test]
    fn test_has_warning_matches_code() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: "RATE_UNKNOWN".to_string(),
                message: "No demurrage rate".to_string(),
                severity: "medium".to_string(),
            }],
        };
        assert!(trace.has_warning("RATE_UNKNOWN"));
        assert!(!trace.has_warning("NON_POSITIVE_SPAN"));
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&create_sample_step(3)).unwrap();
        assert!(json.contains("\"step_number\":3"));
        assert!(json.contains("\"rule_id\":\"laytime_settlement\""));
        assert!(json.contains("\"clause_ref\":\"SHEX\""));
    }

    #[test]
    fn test_audit_trace_round_trip() {
        let trace = AuditTrace {
            steps: vec![create_sample_step(1)],
            warnings: vec![],
        };
        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, trace);
    }
}
