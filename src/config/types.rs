//! Configuration types for charterparty terms.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WarrantyTerms;

/// Metadata about the charterparty.
///
/// Contains identifying information about the fixture: the charter reference,
/// the vessel, the form it was fixed on, and the two parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterMetadata {
    /// The fixture reference (e.g., "V-2026-001").
    pub reference: String,
    /// The vessel name.
    pub vessel: String,
    /// The charterparty form (e.g., "GENCON 1994").
    pub form: String,
    /// The shipowner.
    pub owner: String,
    /// The charterer.
    pub charterer: String,
}

/// Laytime terms of the charterparty.
///
/// Rule tags are kept as the strings written in the contract; they are
/// resolved when a calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaytimeTerms {
    /// NOR-validity clause: "wibon", "wipon", "wifpon" or "wccon".
    pub commencement_rule: String,
    /// Hours after NOR tender before laytime commences.
    #[serde(default)]
    pub notice_time_hours: Decimal,
    /// Exception clause: "shinc", "shex", "fhex", "eiu" or "uu".
    pub exception_rule: String,
    /// Laytime allowed per port, in hours.
    pub allowed_hours: Decimal,
    /// Demurrage rate per day.
    #[serde(default)]
    pub demurrage_rate: Option<Decimal>,
    /// Despatch rate per day.
    #[serde(default)]
    pub despatch_rate: Option<Decimal>,
    /// Whether laytime is reversible between ports.
    #[serde(default)]
    pub reversible: bool,
    /// Days after completion within which a claim must be submitted.
    pub time_bar_days: u32,
    /// The currency rates and amounts are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Weather-warranty configuration from warranty.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyConfig {
    /// The warranted speed, consumption and good-weather definition.
    pub terms: WarrantyTerms,
    /// The daily charter hire used to price speed claims.
    pub hire_rate: Decimal,
}

/// The complete charter configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CharterConfig {
    /// Charter metadata.
    metadata: CharterMetadata,
    /// Laytime terms.
    laytime: LaytimeTerms,
    /// Weather warranty, if the charter has one.
    warranty: Option<WarrantyConfig>,
}

impl CharterConfig {
    /// Creates a new CharterConfig from its component parts.
    pub fn new(
        metadata: CharterMetadata,
        laytime: LaytimeTerms,
        warranty: Option<WarrantyConfig>,
    ) -> Self {
        Self {
            metadata,
            laytime,
            warranty,
        }
    }

    /// Returns the charter metadata.
    pub fn metadata(&self) -> &CharterMetadata {
        &self.metadata
    }

    /// Returns the laytime terms.
    pub fn laytime(&self) -> &LaytimeTerms {
        &self.laytime
    }

    /// Returns the weather-warranty configuration, if any.
    pub fn warranty(&self) -> Option<&WarrantyConfig> {
        self.warranty.as_ref()
    }
}
