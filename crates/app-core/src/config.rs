//! Display configuration
//!
//! Settings the host can override when embedding the core, loaded from JSON.
//! Every field has a default so a partial (or empty) document is valid.

use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, StatusGroup};

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document is not valid JSON for this schema
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] RepositoryError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How shipment data is presented
///
/// # Example
///
/// ```rust
/// use app_core::config::DisplayConfig;
///
/// let config = DisplayConfig::from_json(r#"{ "currency": "EUR" }"#).unwrap();
/// assert_eq!(config.currency, "EUR");
/// assert_eq!(config.arriving_fallback, "Arriving today!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Label shown for shipments without a name
    #[serde(default = "default_arriving_fallback")]
    pub arriving_fallback: String,

    /// Currency code appended to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Quote shown on the confirmation screen
    #[serde(default = "default_estimated_amount")]
    pub estimated_amount: f64,

    /// History tab selected at startup
    #[serde(default)]
    pub initial_history_tab: usize,
}

fn default_arriving_fallback() -> String {
    "Arriving today!".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_estimated_amount() -> f64 {
    1460.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            arriving_fallback: default_arriving_fallback(),
            currency: default_currency(),
            estimated_amount: default_estimated_amount(),
            initial_history_tab: 0,
        }
    }
}

impl DisplayConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is within range
    pub fn validate(&self) -> Result<()> {
        self.initial_group()?;
        Ok(())
    }

    /// History tab selected at startup, as a status group
    pub fn initial_group(&self) -> Result<StatusGroup> {
        Ok(StatusGroup::from_index(self.initial_history_tab)?)
    }
}
