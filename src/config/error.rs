//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("No products configured")]
    NoProducts,

    #[error("Product name must not be empty")]
    EmptyProductName,

    #[error("Product '{name}' is configured more than once")]
    DuplicateProduct { name: String },

    #[error("No denominations configured")]
    NoDenominations,

    #[error("Denomination value must be positive")]
    ZeroDenomination,

    #[error("Denomination {value}P is configured more than once")]
    DuplicateDenomination { value: u32 },
}

/// Errors raised while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
