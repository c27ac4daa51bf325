//! Coins: the spendable denomination ledger and the greedy change algorithm.
//!
//! The ledger only ever pays coins out. Coins a customer inserts are tallied
//! by the transaction ledger and never become available for change.

mod change;
mod denomination;
mod error;

pub use change::{ChangeReport, ReportLine};
pub use denomination::{Denomination, DenominationLedger, ShortfallPolicy};
pub use error::ChangeError;
