//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading charter
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{CommencementRule, ExceptionRule};

use super::types::{CharterConfig, CharterMetadata, LaytimeTerms, WarrantyConfig};

/// Loads and provides access to charter configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the laytime and warranty terms.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sample-voyage/
/// ├── charter.yaml    # Charter metadata
/// ├── laytime.yaml    # Laytime, demurrage and time-bar terms
/// └── warranty.yaml   # Weather warranty and hire rate (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use charter_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample-voyage").unwrap();
/// println!("Charter: {} ({})", loader.metadata().reference, loader.metadata().vessel);
/// println!("Allowed laytime: {} hours", loader.laytime_terms().allowed_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CharterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sample-voyage")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - charter.yaml or laytime.yaml is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use charter_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/sample-voyage")?;
    /// # Ok::<(), charter_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load charter.yaml
        let metadata = Self::load_yaml::<CharterMetadata>(&path.join("charter.yaml"))?;

        // Load laytime.yaml
        let laytime = Self::load_yaml::<LaytimeTerms>(&path.join("laytime.yaml"))?;

        // Load warranty.yaml if the charter carries a weather warranty
        let warranty_path = path.join("warranty.yaml");
        let warranty = if warranty_path.exists() {
            Some(Self::load_yaml::<WarrantyConfig>(&warranty_path)?)
        } else {
            None
        };

        Ok(Self {
            config: CharterConfig::new(metadata, laytime, warranty),
        })
    }

    /// Builds a configuration from in-memory YAML documents.
    ///
    /// Parse errors name the document ("charter.yaml", "laytime.yaml" or
    /// "warranty.yaml") in place of a file path.
    ///
    /// # Example
    ///
    /// ```
    /// use charter_engine::config::ConfigLoader;
    ///
    /// let charter = "reference: V-1\nvessel: Ocean Pearl\nform: GENCON 1994\nowner: A\ncharterer: B\n";
    /// let laytime = "commencement_rule: wibon\nexception_rule: shex\nallowed_hours: 72\ntime_bar_days: 90\n";
    ///
    /// let loader = ConfigLoader::from_yaml_strs(charter, laytime, None)?;
    /// assert_eq!(loader.laytime_terms().currency, "USD");
    /// assert!(loader.warranty().is_none());
    /// # Ok::<(), charter_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_strs(
        charter: &str,
        laytime: &str,
        warranty: Option<&str>,
    ) -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<CharterMetadata>(charter, "charter.yaml")?;
        let laytime = Self::parse_yaml::<LaytimeTerms>(laytime, "laytime.yaml")?;
        let warranty = warranty
            .map(|doc| Self::parse_yaml::<WarrantyConfig>(doc, "warranty.yaml"))
            .transpose()?;

        Ok(Self {
            config: CharterConfig::new(metadata, laytime, warranty),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying charter configuration.
    pub fn config(&self) -> &CharterConfig {
        &self.config
    }

    /// Returns the charter metadata.
    pub fn metadata(&self) -> &CharterMetadata {
        self.config.metadata()
    }

    /// Returns the laytime terms.
    pub fn laytime_terms(&self) -> &LaytimeTerms {
        self.config.laytime()
    }

    /// Returns the weather-warranty configuration, if the charter has one.
    pub fn warranty(&self) -> Option<&WarrantyConfig> {
        self.config.warranty()
    }

    /// Resolves the configured NOR-validity clause.
    ///
    /// # Returns
    ///
    /// Returns the clause, or `InvalidRule` if the configured tag is unknown.
    pub fn commencement_rule(&self) -> EngineResult<CommencementRule> {
        self.laytime_terms().commencement_rule.parse()
    }

    /// Resolves the configured exception clause.
    ///
    /// # Returns
    ///
    /// Returns the clause, or `InvalidRule` if the configured tag is unknown.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use charter_engine::config::ConfigLoader;
    /// use charter_engine::models::ExceptionRule;
    ///
    /// let loader = ConfigLoader::load("./config/sample-voyage")?;
    /// assert_eq!(loader.exception_rule()?, ExceptionRule::Shex);
    /// # Ok::<(), charter_engine::error::EngineError>(())
    /// ```
    pub fn exception_rule(&self) -> EngineResult<ExceptionRule> {
        self.laytime_terms().exception_rule.parse()
    }
}
