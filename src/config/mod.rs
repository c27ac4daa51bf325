//! Seed data for a machine: products, coins, and the change policy.
//!
//! Validation collects every problem in one pass using Stillwater's
//! `Validation`, so an operator fixing a configuration file sees all of them
//! at once.
//!
//! # Example
//!
//! ```rust
//! use vending_machine::config::MachineConfig;
//! use vending_machine::money::ShortfallPolicy;
//!
//! let config = MachineConfig::from_json(
//!     r#"{
//!         "products": [{ "name": "Coke", "price": 65, "quantity": 3 }],
//!         "denominations": [{ "value": 20, "count": 5 }, { "value": 5, "count": 10 }]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.shortfall_policy, ShortfallPolicy::Restore);
//! assert_eq!(config.products[0].quantity, 3);
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::inventory::Product;
use crate::money::{Denomination, ShortfallPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Units of each product in the reference seed.
pub const DEFAULT_STOCK: u32 = 1;

/// Products, prices, and coin counts a machine starts with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub products: Vec<Product>,
    pub denominations: Vec<Denomination>,
    #[serde(default)]
    pub shortfall_policy: ShortfallPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::reference(DEFAULT_STOCK)
    }
}

impl MachineConfig {
    /// The reference machine with `stock` units of every product.
    pub fn reference(stock: u32) -> Self {
        Self {
            products: vec![
                Product::new("Coke", 65, stock),
                Product::new("Fanta", 45, stock),
                Product::new("Redbull", 85, stock),
                Product::new("Sprite", 92, stock),
                Product::new("Tango", 163, stock),
            ],
            denominations: vec![
                Denomination::new(1, 100),
                Denomination::new(2, 100),
                Denomination::new(5, 50),
                Denomination::new(10, 5),
                Denomination::new(20, 5),
                Denomination::new(50, 2),
            ],
            shortfall_policy: ShortfallPolicy::default(),
        }
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Give every product `stock` units.
    pub fn with_uniform_stock(mut self, stock: u32) -> Self {
        for product in &mut self.products {
            product.quantity = stock;
        }
        self
    }

    pub fn with_shortfall_policy(mut self, policy: ShortfallPolicy) -> Self {
        self.shortfall_policy = policy;
        self
    }

    /// Check the configuration, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(require(
            !self.products.is_empty(),
            ConfigViolation::NoProducts,
        ));
        let mut names = HashSet::new();
        for product in &self.products {
            if product.name.trim().is_empty() {
                checks.push(Validation::fail(ConfigViolation::EmptyProductName));
            } else if !names.insert(product.name.as_str()) {
                checks.push(Validation::fail(ConfigViolation::DuplicateProduct {
                    name: product.name.clone(),
                }));
            }
        }

        checks.push(require(
            !self.denominations.is_empty(),
            ConfigViolation::NoDenominations,
        ));
        let mut values = HashSet::new();
        for denomination in &self.denominations {
            if denomination.value == 0 {
                checks.push(Validation::fail(ConfigViolation::ZeroDenomination));
            } else if !values.insert(denomination.value) {
                checks.push(Validation::fail(ConfigViolation::DuplicateDenomination {
                    value: denomination.value,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

fn require(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_seed_is_valid() {
        let config = MachineConfig::default();

        assert!(config.validate().is_success());
        assert_eq!(config.products.len(), 5);
        assert!(config.products.iter().all(|p| p.quantity == DEFAULT_STOCK));
        assert_eq!(config.denominations.len(), 6);
    }

    #[test]
    fn uniform_stock_overrides_every_product() {
        let config = MachineConfig::default().with_uniform_stock(4);
        assert!(config.products.iter().all(|p| p.quantity == 4));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = MachineConfig {
            products: vec![
                Product::new("Coke", 65, 1),
                Product::new("Coke", 70, 1),
                Product::new(" ", 10, 1),
            ],
            denominations: vec![
                Denomination::new(0, 5),
                Denomination::new(10, 5),
                Denomination::new(10, 2),
            ],
            shortfall_policy: ShortfallPolicy::Restore,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigViolation::DuplicateProduct { name } if name == "Coke"
                )));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyProductName)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroDenomination)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::DuplicateDenomination { value: 10 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_config_reports_missing_sections() {
        let config = MachineConfig {
            products: Vec::new(),
            denominations: Vec::new(),
            shortfall_policy: ShortfallPolicy::Restore,
        };

        let err = config.check().unwrap_err();
        match err {
            ConfigError::Invalid { violations } => {
                assert_eq!(
                    violations,
                    vec![ConfigViolation::NoProducts, ConfigViolation::NoDenominations]
                );
            }
            other => panic!("Expected invalid configuration, got {other:?}"),
        }
    }

    #[test]
    fn from_json_reads_policy() {
        let config = MachineConfig::from_json(
            r#"{
                "products": [{ "name": "Fanta", "price": 45, "quantity": 2 }],
                "denominations": [{ "value": 1, "count": 10 }],
                "shortfall_policy": "forfeit"
            }"#,
        )
        .unwrap();

        assert_eq!(config.shortfall_policy, ShortfallPolicy::Forfeit);
        assert_eq!(config.products[0].name, "Fanta");
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let result = MachineConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_rejects_invalid_config() {
        let result = MachineConfig::from_json(r#"{ "products": [], "denominations": [] }"#);

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: No products configured; No denominations configured"
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = MachineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }
}
