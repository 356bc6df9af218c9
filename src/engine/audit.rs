//! Audit trace recording shared by the statement builders.

use tracing::{debug, warn};

use crate::models::{AuditStep, AuditTrace, AuditWarning};

pub(crate) const UU_ALWAYS_EXCLUDES: &str = "UU_ALWAYS_EXCLUDES";
pub(crate) const NON_POSITIVE_SPAN: &str = "NON_POSITIVE_SPAN";
pub(crate) const RATE_UNKNOWN: &str = "RATE_UNKNOWN";
pub(crate) const UNKNOWN_SEA_STATE_LIMIT: &str = "UNKNOWN_SEA_STATE_LIMIT";
pub(crate) const NO_GOOD_WEATHER_DAYS: &str = "NO_GOOD_WEATHER_DAYS";

/// Appends a numbered step to the trace.
pub(crate) fn record_step(
    trace: &mut AuditTrace,
    rule_id: &str,
    rule_name: &str,
    clause_ref: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) {
    let step_number = trace.next_step_number();
    debug!(step = step_number, rule_id = rule_id, clause = clause_ref, "{}", reasoning);
    trace.steps.push(AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        clause_ref: clause_ref.to_string(),
        input,
        output,
        reasoning,
    });
}

/// Appends a warning to the trace and logs it.
pub(crate) fn record_warning(trace: &mut AuditTrace, code: &str, message: String, severity: &str) {
    warn!(code = code, severity = severity, "{}", message);
    trace.warnings.push(AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    });
}
