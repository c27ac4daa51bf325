//! Change calculation errors.

use thiserror::Error;

/// Errors raised while paying coins out of the denomination ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChangeError {
    /// The greedy pass could not reduce the amount to zero with the coins on hand.
    #[error("Cannot make change for {requested}P ({shortfall}P could not be paid out)")]
    Insufficient { requested: u32, shortfall: u32 },
}
