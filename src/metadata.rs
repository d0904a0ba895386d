//! Presentation metadata attached to each operator
//!
//! Hosts show this text in their authoring tools. It never affects results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when a text has no entry for the requested locale
pub const DEFAULT_LOCALE: &str = "en";

/// Text keyed by locale tag (e.g. "en", "de")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Create a text with a single locale entry
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(locale.into(), text.into());
        Self(entries)
    }

    /// Create an English-only text
    pub fn en(text: impl Into<String>) -> Self {
        Self::new(DEFAULT_LOCALE, text)
    }

    /// Add or replace the entry for `locale`
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Exact lookup
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Lookup falling back to `fallback`, then to any entry
    pub fn resolve(&self, locale: &str, fallback: &str) -> Option<&str> {
        self.get(locale)
            .or_else(|| self.get(fallback))
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    /// Locales with an entry
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Display information for one operator argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentMetadata {
    /// Display name of the argument
    pub name: LocalizedText,
}

impl ArgumentMetadata {
    /// Argument with an English display name
    pub fn en(name: impl Into<String>) -> Self {
        Self {
            name: LocalizedText::en(name),
        }
    }
}

/// Metadata describing an operator to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorMetadata {
    /// Unique operator name used for lookup
    pub name: String,

    /// Folder the operator is listed under
    pub folder: LocalizedText,

    /// Human-readable description
    pub description: LocalizedText,

    /// One entry per argument, in call order
    pub arguments: Vec<ArgumentMetadata>,

    /// Whether the operator belongs to the extended catalog
    #[serde(default)]
    pub extended: bool,
}

impl OperatorMetadata {
    /// Create metadata with English folder and description
    pub fn new(
        name: impl Into<String>,
        folder: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            folder: LocalizedText::en(folder),
            description: LocalizedText::en(description),
            arguments: Vec::new(),
            extended: false,
        }
    }

    /// Append an argument with an English display name
    pub fn with_argument(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(ArgumentMetadata::en(name));
        self
    }

    /// Mark the operator as part of the extended catalog
    pub fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    /// Number of declared arguments
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Check that the name is usable as a host identifier
    pub fn validate(&self) -> Result<(), String> {
        let name = &self.name;

        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err("Name must start with a letter".to_string());
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("Name can only contain letters, digits and underscores".to_string());
        }

        if self.description.is_empty() {
            return Err("Description cannot be empty".to_string());
        }

        Ok(())
    }
}
