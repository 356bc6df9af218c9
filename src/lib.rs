//! Charter Party Time & Weather-Warranty Compliance Engine
//!
//! This crate settles the two classic voyage-charter disputes between owner and
//! charterer: laytime/demurrage/despatch accounting (with SHINC/SHEX/FHEX/EIU/UU
//! exception clauses, reversible laytime and time-bar) and weather-warranty
//! performance claims (speed and consumption against the warranted figures,
//! filtered by good-weather days).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
