//! Configuration loading for charterparty terms.
//!
//! This module loads a charter's laytime and weather-warranty terms from YAML
//! files. Clause tags are kept as written and resolved when a statement is
//! computed.
//!
//! # Example
//!
//! ```no_run
//! use charter_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample-voyage").unwrap();
//! println!("Loaded charter: {}", config.metadata().reference);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CharterConfig, CharterMetadata, LaytimeTerms, WarrantyConfig};
