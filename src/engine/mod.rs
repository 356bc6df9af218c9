//! Statement orchestration.
//!
//! This module chains the calculators into complete, audited statements: a
//! laytime statement per port call, a voyage settlement with optional
//! reversible laytime, a weather-warranty claim, and a parallel batch
//! recomputation of independent laytime statements.
//!
//! Statements carry no wall-clock data; the same inputs always produce the
//! same statement.

mod audit;
mod batch;
mod laytime_statement;
mod weather_claim;

pub use batch::{LaytimeJob, recompute_laytime_statements};
pub use laytime_statement::{LaytimeRequest, compute_laytime_statement, compute_voyage_settlement};
pub use weather_claim::compute_weather_claim;
