//! Charterparty rule tags.
//!
//! This module defines the [`CommencementRule`] and [`ExceptionRule`] enums that
//! name the laytime clauses governing NOR validity and which hours count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The NOR-validity clause under which laytime commences.
///
/// All four variants yield the same commencement arithmetic; the tag documents
/// which clause governed the NOR upstream.
///
/// # Example
///
/// ```
/// use charter_engine::models::CommencementRule;
///
/// let rule: CommencementRule = "WIBON".parse().unwrap();
/// assert_eq!(rule, CommencementRule::Wibon);
/// assert_eq!(rule.to_string(), "wibon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommencementRule {
    /// Whether in berth or not.
    Wibon,
    /// Whether in port or not.
    Wipon,
    /// Whether in free pratique or not.
    Wifpon,
    /// Whether customs cleared or not.
    Wccon,
}

impl CommencementRule {
    /// Returns the clause tag as it appears on a charterparty, e.g. "WIBON".
    pub fn label(self) -> &'static str {
        match self {
            CommencementRule::Wibon => "WIBON",
            CommencementRule::Wipon => "WIPON",
            CommencementRule::Wifpon => "WIFPON",
            CommencementRule::Wccon => "WCCON",
        }
    }
}

impl fmt::Display for CommencementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

impl FromStr for CommencementRule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wibon" => Ok(CommencementRule::Wibon),
            "wipon" => Ok(CommencementRule::Wipon),
            "wifpon" => Ok(CommencementRule::Wifpon),
            "wccon" => Ok(CommencementRule::Wccon),
            _ => Err(EngineError::InvalidRule {
                kind: "commencement",
                rule: s.to_string(),
            }),
        }
    }
}

/// The laytime exception clause deciding which hours count toward laytime.
///
/// # Example
///
/// ```
/// use charter_engine::models::ExceptionRule;
///
/// let rule: ExceptionRule = "fhex".parse().unwrap();
/// assert_eq!(rule.label(), "FHEX");
/// assert!("shexeiu".parse::<ExceptionRule>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionRule {
    /// Sundays and holidays included: nothing is excluded.
    Shinc,
    /// Sundays and holidays excepted.
    Shex,
    /// Fridays and holidays excepted.
    Fhex,
    /// Sundays and holidays excepted even if used.
    Eiu,
    /// Sundays and holidays excepted unless used.
    ///
    /// Hour-level cargo activity is not observable here, so UU always excludes.
    Uu,
}

impl ExceptionRule {
    /// Returns the clause tag used in exclusion reasons, e.g. "SHEX".
    pub fn label(self) -> &'static str {
        match self {
            ExceptionRule::Shinc => "SHINC",
            ExceptionRule::Shex => "SHEX",
            ExceptionRule::Fhex => "FHEX",
            ExceptionRule::Eiu => "EIU",
            ExceptionRule::Uu => "UU",
        }
    }
}

impl fmt::Display for ExceptionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

impl FromStr for ExceptionRule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shinc" => Ok(ExceptionRule::Shinc),
            "shex" => Ok(ExceptionRule::Shex),
            "fhex" => Ok(ExceptionRule::Fhex),
            "eiu" => Ok(ExceptionRule::Eiu),
            "uu" => Ok(ExceptionRule::Uu),
            _ => Err(EngineError::InvalidRule {
                kind: "exception",
                rule: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commencement_rule_parses_all_variants() {
        assert_eq!("wibon".parse::<CommencementRule>().unwrap(), CommencementRule::Wibon);
        assert_eq!("wipon".parse::<CommencementRule>().unwrap(), CommencementRule::Wipon);
        assert_eq!("wifpon".parse::<CommencementRule>().unwrap(), CommencementRule::Wifpon);
        assert_eq!("wccon".parse::<CommencementRule>().unwrap(), CommencementRule::Wccon);
    }

    #[test]
    fn test_commencement_rule_parse_is_case_insensitive() {
        assert_eq!(
            " WiPoN ".parse::<CommencementRule>().unwrap(),
            CommencementRule::Wipon
        );
    }

    #[test]
    fn test_unknown_commencement_rule_is_invalid_rule() {
        match "wibonx".parse::<CommencementRule>() {
            Err(EngineError::InvalidRule { kind, rule }) => {
                assert_eq!(kind, "commencement");
                assert_eq!(rule, "wibonx");
            }
            other => panic!("Expected InvalidRule, got {:?}", other),
        }
    }

    #[test]
    fn test_exception_rule_parses_all_variants() {
        for (tag, rule) in [
            ("shinc", ExceptionRule::Shinc),
            ("shex", ExceptionRule::Shex),
            ("fhex", ExceptionRule::Fhex),
            ("eiu", ExceptionRule::Eiu),
            ("uu", ExceptionRule::Uu),
        ] {
            assert_eq!(tag.parse::<ExceptionRule>().unwrap(), rule);
            assert_eq!(rule.to_string(), tag);
        }
    }

    #[test]
    fn test_unknown_exception_rule_is_invalid_rule() {
        match "sshex".parse::<ExceptionRule>() {
            Err(EngineError::InvalidRule { kind, rule }) => {
                assert_eq!(kind, "exception");
                assert_eq!(rule, "sshex");
            }
            other => panic!("Expected InvalidRule, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_serialization_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&ExceptionRule::Fhex).unwrap(), "\"fhex\"");
        assert_eq!(
            serde_json::from_str::<CommencementRule>("\"wccon\"").unwrap(),
            CommencementRule::Wccon
        );
    }
}
