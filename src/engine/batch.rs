//! Data-parallel recomputation of laytime statements.

use rayon::prelude::*;
use tracing::info;

use crate::config::LaytimeTerms;
use crate::error::EngineResult;
use crate::models::LaytimeStatement;

use super::laytime_statement::{LaytimeRequest, compute_laytime_statement};

/// One independent statement to recompute.
#[derive(Debug, Clone)]
pub struct LaytimeJob {
    /// The charter terms the port call is settled under.
    pub terms: LaytimeTerms,
    /// The port call.
    pub request: LaytimeRequest,
}

/// Recomputes many laytime statements in parallel.
///
/// Jobs share no state. The output holds one result per job in input order;
/// a failing job does not affect the others.
pub fn recompute_laytime_statements(jobs: &[LaytimeJob]) -> Vec<EngineResult<LaytimeStatement>> {
    info!(
        jobs = jobs.len(),
        threads = rayon::current_num_threads(),
        "Recomputing laytime statements"
    );

    jobs.par_iter()
        .map(|job| compute_laytime_statement(&job.terms, &job.request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::{Duration, NaiveDateTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_terms(exception_rule: &str) -> LaytimeTerms {
        LaytimeTerms {
            commencement_rule: "wccon".to_string(),
            notice_time_hours: Decimal::ZERO,
            exception_rule: exception_rule.to_string(),
            allowed_hours: dec("48"),
            demurrage_rate: Some(dec("24000")),
            despatch_rate: Some(dec("12000")),
            reversible: false,
            time_bar_days: 60,
            currency: "USD".to_string(),
        }
    }

    fn create_job(index: i64, exception_rule: &str) -> LaytimeJob {
        let nor_tendered = make_datetime("2026-01-05", "00:00:00");
        LaytimeJob {
            terms: create_terms(exception_rule),
            request: LaytimeRequest {
                port: format!("Port {}", index),
                nor_tendered,
                completed_at: nor_tendered + Duration::hours(24 + index),
                allowed_hours: None,
                port_holidays: vec![],
            },
        }
    }

    #[test]
    fn test_results_keep_input_order() {
        let jobs: Vec<LaytimeJob> = (0..64).map(|i| create_job(i, "shinc")).collect();

        let results = recompute_laytime_statements(&jobs);

        assert_eq!(results.len(), 64);
        for (i, result) in results.iter().enumerate() {
            let statement = result.as_ref().unwrap();
            assert_eq!(statement.port, format!("Port {}", i));
            assert_eq!(statement.gross_hours, Decimal::from(24 + i as i64));
        }
    }

    #[test]
    fn test_failing_job_does_not_affect_others() {
        let jobs = vec![
            create_job(0, "shex"),
            create_job(1, "bogus"),
            create_job(2, "fhex"),
        ];

        let results = recompute_laytime_statements(&jobs);

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(EngineError::InvalidRule { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_time_bar_overflow_does_not_affect_others() {
        let mut overflowing = create_job(1, "shex");
        overflowing.terms.time_bar_days = 4_000_000_000;
        let jobs = vec![create_job(0, "shex"), overflowing, create_job(2, "shex")];

        let results = recompute_laytime_statements(&jobs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().port, "Port 0");
        assert!(matches!(results[1], Err(EngineError::CalculationError { .. })));
        assert_eq!(results[2].as_ref().unwrap().port, "Port 2");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let jobs: Vec<LaytimeJob> = (0..16).map(|i| create_job(i * 7, "shex")).collect();

        let parallel = recompute_laytime_statements(&jobs);

        for (job, result) in jobs.iter().zip(parallel) {
            let sequential = compute_laytime_statement(&job.terms, &job.request).unwrap();
            assert_eq!(result.unwrap(), sequential);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(recompute_laytime_statements(&[]).is_empty());
    }
}
