//! Registry configuration

use crate::error::{OperatorError, OperatorResult};
use crate::metadata::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label of the folder that groups every operator in the host's tree
pub const DEFAULT_TOP_LEVEL_FOLDER: &str = "Math Operators";

/// Settings applied when building an [`OperatorRegistry`](crate::OperatorRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Register the extended catalog alongside the core one
    pub include_extended: bool,
    /// Locale used when metadata is requested without one
    pub default_locale: String,
    /// Top-level folder label shown by the host
    pub top_level_folder: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_extended: false,
            default_locale: DEFAULT_LOCALE.to_string(),
            top_level_folder: DEFAULT_TOP_LEVEL_FOLDER.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Default settings plus the extended catalog
    pub fn extended() -> Self {
        Self {
            include_extended: true,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> OperatorResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OperatorError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> OperatorResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            OperatorError::invalid_config(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Reject empty labels
    pub fn validate(&self) -> OperatorResult<()> {
        if self.default_locale.trim().is_empty() {
            return Err(OperatorError::invalid_config("default_locale cannot be empty"));
        }
        if self.top_level_folder.trim().is_empty() {
            return Err(OperatorError::invalid_config("top_level_folder cannot be empty"));
        }
        Ok(())
    }
}
