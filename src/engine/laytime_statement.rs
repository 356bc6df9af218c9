//! Laytime statements for single ports and whole voyages.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::calculation::{
    aggregate_reversible_laytime, calculate_commencement, calculate_exclusions_for_clause,
    calculate_time_bar, hours_between, settle_laytime,
};
use crate::config::LaytimeTerms;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, CommencementRule, ExceptionRule, LaytimeOutcome, LaytimeStatement, PortHoliday,
    ReversibleLaytimeEntry, VoyageSettlement,
};

use super::audit::{
    NON_POSITIVE_SPAN, RATE_UNKNOWN, UU_ALWAYS_EXCLUDES, record_step, record_warning,
};

/// The facts of one port call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaytimeRequest {
    /// The port name.
    pub port: String,
    /// When notice of readiness was tendered.
    pub nor_tendered: NaiveDateTime,
    /// When cargo operations were completed.
    pub completed_at: NaiveDateTime,
    /// Laytime allowed at this port; falls back to the charter terms.
    #[serde(default)]
    pub allowed_hours: Option<Decimal>,
    /// Local holidays at this port.
    #[serde(default)]
    pub port_holidays: Vec<PortHoliday>,
}

/// Computes the laytime statement for one port call.
///
/// Laytime commences `notice_time_hours` after NOR tender, exception-clause
/// hours between commencement and completion are excluded, and the used time
/// is settled against the allowed time. The time-bar deadline runs from
/// completion. Each stage adds one audit step.
///
/// A completion at or before commencement is not rejected: the statement is
/// computed as-is and carries a `NON_POSITIVE_SPAN` warning.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRule`] if the commencement
/// clause is unknown, or if the exception clause is unknown and there is a
/// positive span to walk. Returns
/// [`crate::error::EngineError::CalculationError`] if the notice time, the
/// settlement arithmetic or the time-bar deadline leaves the representable
/// range.
///
/// # Example
///
/// ```
/// use charter_engine::config::ConfigLoader;
/// use charter_engine::engine::{LaytimeRequest, compute_laytime_statement};
/// use charter_engine::models::LaytimeOutcome;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let charter = "reference: V-1\nvessel: Ocean Pearl\nform: GENCON 1994\nowner: A\ncharterer: B\n";
/// let laytime = "commencement_rule: wibon\nnotice_time_hours: 6\nexception_rule: shex\n\
///                allowed_hours: 72\ndemurrage_rate: 28000\ntime_bar_days: 90\n";
/// let loader = ConfigLoader::from_yaml_strs(charter, laytime, None)?;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let request = LaytimeRequest {
///     port: "Santos".to_string(),
///     nor_tendered: day(2).and_hms_opt(8, 0, 0).unwrap(),
///     completed_at: day(6).and_hms_opt(20, 0, 0).unwrap(),
///     allowed_hours: None,
///     port_holidays: vec![],
/// };
///
/// let statement = compute_laytime_statement(loader.laytime_terms(), &request)?;
/// assert_eq!(statement.excluded_hours, Decimal::new(24, 0));
/// assert_eq!(statement.settlement.result, LaytimeOutcome::OnDemurrage);
/// assert_eq!(statement.settlement.amount_due, Decimal::new(7000, 0));
/// # Ok::<(), charter_engine::error::EngineError>(())
/// ```
pub fn compute_laytime_statement(
    terms: &LaytimeTerms,
    request: &LaytimeRequest,
) -> EngineResult<LaytimeStatement> {
    debug!(port = %request.port, "Computing laytime statement");
    let mut trace = AuditTrace::default();

    // Commencement
    let commencement_rule: CommencementRule = terms.commencement_rule.parse()?;
    let commenced_at =
        calculate_commencement(request.nor_tendered, commencement_rule, terms.notice_time_hours)?;
    record_step(
        &mut trace,
        "laytime_commencement",
        "Laytime Commencement",
        commencement_rule.label(),
        json!({
            "nor_tendered": request.nor_tendered,
            "notice_time_hours": terms.notice_time_hours,
        }),
        json!({ "commenced_at": commenced_at }),
        format!(
            "NOR tendered {} under {}; laytime commences {} hours later",
            request.nor_tendered,
            commencement_rule.label(),
            terms.notice_time_hours.normalize()
        ),
    );

    // Exclusions
    let clause_ref = terms.exception_rule.trim().to_ascii_uppercase();
    let gross_hours = hours_between(commenced_at, request.completed_at);
    if request.completed_at <= commenced_at {
        record_warning(
            &mut trace,
            NON_POSITIVE_SPAN,
            format!(
                "Completion at {} is not after commencement at {}; used time is zero or negative",
                request.completed_at, commenced_at
            ),
            "high",
        );
    }
    if terms.exception_rule.parse::<ExceptionRule>().ok() == Some(ExceptionRule::Uu) {
        record_warning(
            &mut trace,
            UU_ALWAYS_EXCLUDES,
            "UU hours are excluded whether or not cargo was worked; verify against the \
             statement of facts"
                .to_string(),
            "medium",
        );
    }

    let exclusions = calculate_exclusions_for_clause(
        commenced_at,
        request.completed_at,
        &terms.exception_rule,
        &request.port_holidays,
    )?;
    debug!(
        port = %request.port,
        excluded_hours = %exclusions.excluded_hours,
        runs = exclusions.details.len(),
        "Exclusions calculated"
    );
    record_step(
        &mut trace,
        "laytime_exclusions",
        "Exception Clause Exclusions",
        &clause_ref,
        json!({
            "commenced_at": commenced_at,
            "completed_at": request.completed_at,
            "port_holidays": request.port_holidays.len(),
        }),
        json!({
            "gross_hours": gross_hours,
            "excluded_hours": exclusions.excluded_hours,
            "runs": exclusions.details.len(),
        }),
        format!(
            "{} of {} hours excluded under {} in {} run(s)",
            exclusions.excluded_hours.normalize(),
            gross_hours.normalize(),
            clause_ref,
            exclusions.details.len()
        ),
    );

    // Settlement
    let allowed_hours = request.allowed_hours.unwrap_or(terms.allowed_hours);
    let settlement = settle_laytime(
        allowed_hours,
        gross_hours,
        exclusions.excluded_hours,
        terms.demurrage_rate,
        terms.despatch_rate,
    )?;
    record_step(
        &mut trace,
        "laytime_settlement",
        "Laytime Settlement",
        &clause_ref,
        json!({
            "allowed_hours": allowed_hours,
            "used_hours": settlement.used_hours,
            "demurrage_rate": terms.demurrage_rate,
            "despatch_rate": terms.despatch_rate,
        }),
        json!({
            "result": settlement.result,
            "amount_due": settlement.amount_due,
        }),
        format!(
            "{} hours used against {} allowed: {}",
            settlement.used_hours.normalize(),
            allowed_hours.normalize(),
            settlement.result
        ),
    );
    flag_missing_rate(
        &mut trace,
        settlement.result,
        terms.demurrage_rate,
        terms.despatch_rate,
    );

    // Time bar
    let time_bar_deadline = calculate_time_bar(request.completed_at, terms.time_bar_days)?;
    record_step(
        &mut trace,
        "time_bar",
        "Time Bar",
        "TIME_BAR",
        json!({
            "completed_at": request.completed_at,
            "time_bar_days": terms.time_bar_days,
        }),
        json!({ "deadline": time_bar_deadline }),
        format!(
            "Claim must be submitted within {} days of completion",
            terms.time_bar_days
        ),
    );

    info!(
        port = %request.port,
        result = %settlement.result,
        amount_due = %settlement.amount_due,
        warnings = trace.warnings.len(),
        "Laytime statement completed"
    );

    Ok(LaytimeStatement {
        port: request.port.clone(),
        commencement_rule,
        exception_rule: terms.exception_rule.clone(),
        nor_tendered: request.nor_tendered,
        commenced_at,
        completed_at: request.completed_at,
        allowed_hours,
        gross_hours,
        excluded_hours: exclusions.excluded_hours,
        exclusions: exclusions.details,
        settlement,
        time_bar_deadline,
        audit_trace: trace,
    })
}

/// Warns when a demurrage or despatch verdict has no rate to price it.
fn flag_missing_rate(
    trace: &mut AuditTrace,
    result: LaytimeOutcome,
    demurrage_rate: Option<Decimal>,
    despatch_rate: Option<Decimal>,
) {
    let missing = match result {
        LaytimeOutcome::OnDemurrage if demurrage_rate.is_none() => "demurrage",
        LaytimeOutcome::OnDespatch if despatch_rate.is_none() => "despatch",
        _ => return,
    };
    record_warning(
        trace,
        RATE_UNKNOWN,
        format!("Verdict is {} but no {} rate is on file; amount reported as 0", result, missing),
        "medium",
    );
}

/// Computes one statement per port call and, under a reversible-laytime
/// clause, the combined voyage verdict.
///
/// Statements keep the order of `requests`. The first failing port call
/// aborts the settlement.
pub fn compute_voyage_settlement(
    terms: &LaytimeTerms,
    requests: &[LaytimeRequest],
) -> EngineResult<VoyageSettlement> {
    let ports = requests
        .iter()
        .map(|request| compute_laytime_statement(terms, request))
        .collect::<EngineResult<Vec<_>>>()?;

    let reversible = if terms.reversible {
        let entries: Vec<ReversibleLaytimeEntry> = ports
            .iter()
            .map(|statement| ReversibleLaytimeEntry {
                allowed_hours: statement.allowed_hours,
                used_hours: statement.settlement.used_hours,
                demurrage_rate: terms.demurrage_rate,
                despatch_rate: terms.despatch_rate,
            })
            .collect();
        Some(aggregate_reversible_laytime(&entries)?)
    } else {
        None
    };

    if let Some(combined) = &reversible {
        info!(
            ports = ports.len(),
            result = %combined.result,
            amount_due = %combined.amount_due,
            "Reversible laytime settled"
        );
    }

    Ok(VoyageSettlement { ports, reversible })
}
