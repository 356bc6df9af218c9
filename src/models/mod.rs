//! Core data models for the charter engine.
//!
//! This module contains all the domain models used throughout the engine.

mod laytime;
mod port_holiday;
mod rules;
mod statement;
mod weather;

pub use laytime::{
    ExclusionDetail, ExclusionSummary, LaytimeOutcome, LaytimeResult, ReversibleLaytimeEntry,
    ReversibleLaytimeResult,
};
pub use port_holiday::{PortHoliday, is_laytime_holiday};
pub use rules::{CommencementRule, ExceptionRule};
pub use statement::{
    AuditStep, AuditTrace, AuditWarning, LaytimeStatement, VoyageSettlement,
    WeatherClaimStatement,
};
pub use weather::{
    SpeedClaimResult, WarrantyDayDetail, WarrantyResult, WarrantyTerms, WeatherEntry,
    WeatherLogSummary,
};
