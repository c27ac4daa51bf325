//! Build errors for the machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Message sink not specified. Call .display(sink) before .build()")]
    MissingDisplay,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
