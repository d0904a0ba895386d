//! Operator registry
//!
//! Maps operator names to [`Operator`]s. Built once at start-up and read-only
//! afterwards, so a registry can be shared across threads behind an `Arc`.

use crate::adapter::DecimalValue;
use crate::config::RegistryConfig;
use crate::error::{OperatorError, OperatorResult};
use crate::metadata::OperatorMetadata;
use crate::operator::Operator;
use crate::operators::{CORE_CATALOG, CatalogEntry, EXTENDED_CATALOG};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Registry of named decimal operators
#[derive(Clone)]
pub struct OperatorRegistry {
    operators: FxHashMap<String, Arc<Operator>>,
    config: RegistryConfig,
}

impl OperatorRegistry {
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self {
            operators: FxHashMap::default(),
            config: RegistryConfig::default(),
        }
    }

    /// Create a registry holding the catalogs selected by `config`
    pub fn with_config(config: &RegistryConfig) -> OperatorResult<Self> {
        config.validate()?;

        let mut registry = Self {
            operators: FxHashMap::default(),
            config: config.clone(),
        };
        registry.register_catalog(CORE_CATALOG, false)?;
        if config.include_extended {
            registry.register_catalog(EXTENDED_CATALOG, true)?;
        }

        log::debug!(
            "built operator registry with {} operators (extended: {})",
            registry.len(),
            config.include_extended
        );
        Ok(registry)
    }

    fn register_catalog(&mut self, catalog: &[CatalogEntry], extended: bool) -> OperatorResult<()> {
        for entry in catalog {
            self.register(entry.to_operator(extended)?)?;
        }
        Ok(())
    }

    /// Register an operator; names must be unique
    pub fn register(&mut self, operator: Operator) -> OperatorResult<()> {
        let name = operator.name().to_string();
        if self.operators.contains_key(&name) {
            return Err(OperatorError::already_registered(name));
        }

        log::debug!("registering operator '{}' (arity {})", name, operator.arity());
        self.operators.insert(name, Arc::new(operator));
        Ok(())
    }

    /// Get an operator by name
    pub fn get(&self, name: &str) -> Option<Arc<Operator>> {
        self.operators.get(name).cloned()
    }

    /// Check if an operator exists
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered operators
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Metadata of every operator, sorted by name
    pub fn metadata(&self) -> impl Iterator<Item = &OperatorMetadata> {
        let mut operators: Vec<&Arc<Operator>> = self.operators.values().collect();
        operators.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        operators.into_iter().map(|op| op.metadata())
    }

    /// Settings this registry was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Top-level folder label shown by the host
    pub fn top_level_folder(&self) -> &str {
        &self.config.top_level_folder
    }

    /// Call an operator by name
    pub fn invoke(&self, name: &str, args: &[DecimalValue]) -> OperatorResult<DecimalValue> {
        let operator = self
            .operators
            .get(name)
            .ok_or_else(|| OperatorError::unknown_operator(name))?;
        operator.invoke(args)
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::OperatorFn;
    use crate::operators::decimal;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = OperatorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = OperatorRegistry::new();
        let abs = CORE_CATALOG[0].to_operator(false).unwrap();
        registry.register(abs.clone()).unwrap();

        assert_eq!(
            registry.register(abs).unwrap_err(),
            OperatorError::already_registered("abs")
        );
    }

    #[test]
    fn test_custom_operator() {
        let mut registry = OperatorRegistry::new();
        let metadata = OperatorMetadata::new("magnitude", "Custom", "Alias of abs").with_argument("n");
        registry
            .register(Operator::new(metadata, OperatorFn::Unary(decimal::abs)).unwrap())
            .unwrap();

        assert!(registry.contains("magnitude"));
        assert_eq!(
            registry
                .invoke("magnitude", &[Some(BigDecimal::from(-7))])
                .unwrap(),
            Some(BigDecimal::from(7))
        );
    }

    #[test]
    fn test_invoke_unknown_operator() {
        let registry = OperatorRegistry::with_config(&RegistryConfig::default()).unwrap();
        assert_eq!(
            registry.invoke("sqrt", &[None]).unwrap_err(),
            OperatorError::unknown_operator("sqrt")
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RegistryConfig {
            default_locale: String::new(),
            ..RegistryConfig::default()
        };
        assert!(OperatorRegistry::with_config(&config).is_err());
    }
}
