//! End-to-end tests for the charter engine.
//!
//! This test suite drives the engine from the sample-voyage configuration:
//! - Single-port laytime statements (SHEX, SHINC, FHEX, port holidays)
//! - Reversible voyage settlement
//! - Weather-warranty claims and the weather-log summary
//! - Batch recomputation
//! - Error cases

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use charter_engine::calculation::describe_beaufort;
use charter_engine::config::{ConfigLoader, LaytimeTerms};
use charter_engine::engine::{
    LaytimeJob, LaytimeRequest, compute_laytime_statement, compute_voyage_settlement,
    compute_weather_claim, recompute_laytime_statements,
};
use charter_engine::error::EngineError;
use charter_engine::models::{LaytimeOutcome, WeatherEntry};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/sample-voyage").expect("Failed to load config")
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn create_request(port: &str, nor: &str, completed: &str, holidays: Vec<Value>) -> LaytimeRequest {
    serde_json::from_value(json!({
        "port": port,
        "nor_tendered": nor,
        "completed_at": completed,
        "port_holidays": holidays,
    }))
    .expect("valid laytime request")
}

fn holiday(date: &str, affects_laytime: bool) -> Value {
    json!({ "date": date, "affects_laytime": affects_laytime, "name": "Local holiday" })
}

fn create_noon_reports(reports: &[(u32, u8, &str, &str)]) -> Vec<WeatherEntry> {
    let entries: Vec<Value> = reports
        .iter()
        .map(|(day, beaufort, speed, consumption)| {
            json!({
                "date": format!("2026-03-{:02}", day),
                "beaufort_scale": beaufort,
                "actual_speed": speed,
                "actual_consumption": consumption,
            })
        })
        .collect();
    serde_json::from_value(Value::Array(entries)).expect("valid noon reports")
}

fn terms_with_rule(exception_rule: &str) -> LaytimeTerms {
    let mut terms = load_config().laytime_terms().clone();
    terms.exception_rule = exception_rule.to_string();
    terms
}

// =============================================================================
// Laytime statements
// =============================================================================

#[test]
fn test_shex_statement_from_sample_voyage() {
    let config = load_config();
    // NOR Friday 08:00, six hours notice, completed Tuesday 20:00
    let request = create_request("Santos", "2026-01-02T08:00:00", "2026-01-06T20:00:00", vec![]);

    let statement = compute_laytime_statement(config.laytime_terms(), &request).unwrap();

    assert_eq!(statement.commenced_at, make_datetime("2026-01-02T14:00:00"));
    assert_eq!(statement.gross_hours, decimal("102"));
    assert_eq!(statement.excluded_hours, decimal("24"));
    assert_eq!(statement.settlement.used_hours, decimal("78"));
    assert_eq!(statement.settlement.result, LaytimeOutcome::OnDemurrage);
    assert_eq!(statement.settlement.amount_due, decimal("7000"));
    assert_eq!(statement.time_bar_deadline, make_datetime("2026-04-06T20:00:00"));
}

#[test]
fn test_shinc_counts_every_hour() {
    let terms = terms_with_rule("shinc");
    let request = create_request("Santos", "2026-01-02T08:00:00", "2026-01-06T20:00:00", vec![]);

    let statement = compute_laytime_statement(&terms, &request).unwrap();

    assert_eq!(statement.excluded_hours, Decimal::ZERO);
    assert!(statement.exclusions.is_empty());
    assert_eq!(statement.settlement.used_hours, decimal("102"));
    // 30 hours over at 28,000/day
    assert_eq!(statement.settlement.amount_due, decimal("35000"));
}

#[test]
fn test_fhex_excludes_friday_not_sunday() {
    let terms = terms_with_rule("fhex");
    let request = create_request("Jeddah", "2026-01-02T08:00:00", "2026-01-06T20:00:00", vec![]);

    let statement = compute_laytime_statement(&terms, &request).unwrap();

    // Friday 14:00 to midnight
    assert_eq!(statement.excluded_hours, decimal("10"));
    assert_eq!(statement.exclusions[0].reason, "FHEX — Friday excluded");
    assert_eq!(statement.exclusions[0].end_time, make_datetime("2026-01-03T00:00:00"));
}

#[test]
fn test_holiday_adjacent_to_sunday_gives_two_runs() {
    let config = load_config();
    let request = create_request(
        "Santos",
        "2026-01-02T08:00:00",
        "2026-01-06T20:00:00",
        vec![holiday("2026-01-05", true)],
    );

    let statement = compute_laytime_statement(config.laytime_terms(), &request).unwrap();

    assert_eq!(statement.exclusions.len(), 2);
    assert_eq!(statement.exclusions[0].reason, "SHEX — Sunday excluded");
    assert_eq!(statement.exclusions[1].reason, "SHEX — Holiday excluded");
    assert_eq!(statement.exclusions[0].end_time, statement.exclusions[1].start_time);
    assert_eq!(statement.settlement.result, LaytimeOutcome::OnDespatch);
    assert_eq!(statement.settlement.amount_due, decimal("10500"));
}

#[test]
fn test_holiday_not_affecting_laytime_is_ignored() {
    let config = load_config();
    let request = create_request(
        "Santos",
        "2026-01-02T08:00:00",
        "2026-01-06T20:00:00",
        vec![holiday("2026-01-05", false)],
    );

    let statement = compute_laytime_statement(config.laytime_terms(), &request).unwrap();

    assert_eq!(statement.excluded_hours, decimal("24"));
}

#[test]
fn test_statement_serializes_outcome_in_snake_case() {
    let config = load_config();
    let request = create_request("Santos", "2026-01-02T08:00:00", "2026-01-06T20:00:00", vec![]);

    let statement = compute_laytime_statement(config.laytime_terms(), &request).unwrap();
    let value = serde_json::to_value(&statement).unwrap();

    assert_eq!(value["settlement"]["result"], "on_demurrage");
    assert_eq!(value["commencement_rule"], "wibon");
    assert_eq!(value["audit_trace"]["steps"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Voyage settlement
// =============================================================================

#[test]
fn test_reversible_voyage_from_sample_voyage() {
    let config = load_config();
    let requests = vec![
        create_request("Santos", "2026-01-02T08:00:00", "2026-01-06T20:00:00", vec![]),
        create_request(
            "Rotterdam",
            "2026-01-02T08:00:00",
            "2026-01-06T20:00:00",
            vec![holiday("2026-01-05", true)],
        ),
    ];

    let settlement = compute_voyage_settlement(config.laytime_terms(), &requests).unwrap();
    let combined = settlement.reversible.expect("sample voyage is reversible");

    assert_eq!(settlement.ports[0].settlement.result, LaytimeOutcome::OnDemurrage);
    assert_eq!(settlement.ports[1].settlement.result, LaytimeOutcome::OnDespatch);
    assert_eq!(combined.total_allowed_hours, decimal("144"));
    assert_eq!(combined.total_used_hours, decimal("132"));
    assert_eq!(combined.result, LaytimeOutcome::OnDespatch);
    assert_eq!(combined.amount_due, decimal("7000"));
}

#[test]
fn test_voyage_with_bad_port_fails() {
    let terms = terms_with_rule("weekends");
    let requests = vec![create_request(
        "Santos",
        "2026-01-02T08:00:00",
        "2026-01-06T20:00:00",
        vec![],
    )];

    let result = compute_voyage_settlement(&terms, &requests);
    assert!(matches!(result, Err(EngineError::InvalidRule { .. })));
}

// =============================================================================
// Weather warranty
// =============================================================================

#[test]
fn test_weather_claim_from_sample_voyage() {
    let config = load_config();
    let warranty = config.warranty().unwrap();
    let entries = create_noon_reports(&[
        (1, 3, "13", "31"),
        (2, 4, "12", "32"),
        (3, 6, "10", "35"),
        (4, 2, "14", "30"),
        (5, 3, "13", "29"),
    ]);

    let statement = compute_weather_claim(&warranty.terms, warranty.hire_rate, &entries).unwrap();

    assert_eq!(statement.warranty.total_days, 5);
    assert_eq!(statement.warranty.good_weather_days, 4);
    assert_eq!(statement.warranty.avg_speed_good_weather, decimal("13"));
    assert_eq!(statement.warranty.avg_consumption_good_weather, decimal("30.5"));
    assert_eq!(statement.warranty.speed_claim, decimal("1"));
    assert_eq!(statement.warranty.consumption_claim, decimal("0.5"));
    assert!(!statement.warranty.warranty_compliant);
    // 14/13 - 1 = 0.076923..., × 4 days × 20,000
    assert_eq!(statement.speed_claim.claim_amount, decimal("6153.85"));
    assert_eq!(statement.summary.days_above_beaufort_limit, 1);
    assert_eq!(statement.summary.avg_beaufort, decimal("3.6"));
}

#[test]
fn test_over_performance_yields_no_credit() {
    let config = load_config();
    let warranty = config.warranty().unwrap();
    let entries = create_noon_reports(&[(1, 2, "15.5", "27"), (2, 3, "15", "28")]);

    let statement = compute_weather_claim(&warranty.terms, warranty.hire_rate, &entries).unwrap();

    assert!(statement.warranty.warranty_compliant);
    assert_eq!(statement.warranty.speed_claim, Decimal::ZERO);
    assert_eq!(statement.warranty.consumption_claim, Decimal::ZERO);
    assert_eq!(statement.speed_claim.claim_amount, Decimal::ZERO);
    assert_eq!(statement.summary.warranty_compliance_percent, decimal("100"));
}

#[test]
fn test_beaufort_description_for_report() {
    let description = describe_beaufort(decimal("6"));
    assert_eq!(description.wind_description, "Strong breeze");
    assert_eq!(description.sea_state.description(), "Very rough");
}

// =============================================================================
// Batch recomputation
// =============================================================================

#[test]
fn test_batch_recomputation_matches_single_statements() {
    let config = load_config();
    let jobs: Vec<LaytimeJob> = (1..=5)
        .map(|day| LaytimeJob {
            terms: config.laytime_terms().clone(),
            request: create_request(
                &format!("Port {}", day),
                "2026-01-02T08:00:00",
                &format!("2026-01-{:02}T20:00:00", 5 + day),
                vec![],
            ),
        })
        .collect();

    let results = recompute_laytime_statements(&jobs);

    assert_eq!(results.len(), jobs.len());
    for (job, result) in jobs.iter().zip(results) {
        let expected = compute_laytime_statement(&job.terms, &job.request).unwrap();
        assert_eq!(result.unwrap(), expected);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_malformed_request_is_rejected_by_serde() {
    let result: Result<LaytimeRequest, _> = serde_json::from_value(json!({
        "port": "Santos",
        "nor_tendered": "not-a-date",
        "completed_at": "2026-01-06T20:00:00",
    }));
    assert!(result.is_err());
}

#[test]
fn test_missing_config_directory() {
    let result = ConfigLoader::load("./config/does-not-exist");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}
