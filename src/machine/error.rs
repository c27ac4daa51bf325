//! Failures a customer can run into.
//!
//! The `Display` text of each variant is exactly what the machine shows.

use crate::money::ChangeReport;
use thiserror::Error;

/// A customer action the machine refused or could not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VendError {
    #[error("Sorry, '{item}' is not available. Please select a different drink.")]
    NotAvailable { item: String },

    #[error("Please select a product first. Collect back your money.")]
    MustSelectFirst,

    #[error("Processing an item already. Cannot select {item}")]
    AlreadyProcessing { item: String },

    #[error("Please wait, we are already dispensing the item for you.")]
    AlreadyDispensing,

    #[error("Invalid operation. You have already confirmed the purchase.")]
    AlreadyConfirmed,

    #[error(
        "Machine does not have sufficient change. Please tender exact change. \
         Please collect your inserted amount{}",
        report_suffix(.refund)
    )]
    InsufficientChange { refund: ChangeReport },

    #[error("Sorry, the machine is out of stock.")]
    OutOfStock,

    #[error("Machine is empty.{}", refund_hint(.refunded))]
    MachineEmpty { refunded: bool },

    #[error("Products are not available. Machine needs a refill.")]
    NeedsRefill,

    #[error("Cannot Eject any coin. Please select a product first.")]
    NothingToEject,

    #[error("Unable to return {amount}P in coins. Please contact the operator.")]
    RefundFailed { amount: u32 },
}

fn report_suffix(report: &ChangeReport) -> String {
    if report.is_empty() {
        String::new()
    } else {
        format!(":\n{report}")
    }
}

fn refund_hint(refunded: &bool) -> &'static str {
    if *refunded {
        " Please take back your money."
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::ReportLine;

    #[test]
    fn insufficient_change_lists_the_refund() {
        let err = VendError::InsufficientChange {
            refund: ChangeReport::new(vec![ReportLine { count: 4, value: 20 }]),
        };
        assert_eq!(
            err.to_string(),
            "Machine does not have sufficient change. Please tender exact change. \
             Please collect your inserted amount:\n4 x 20P"
        );
    }

    #[test]
    fn machine_empty_mentions_refund_only_when_refunded() {
        assert_eq!(
            VendError::MachineEmpty { refunded: true }.to_string(),
            "Machine is empty. Please take back your money."
        );
        assert_eq!(
            VendError::MachineEmpty { refunded: false }.to_string(),
            "Machine is empty."
        );
    }

    #[test]
    fn not_available_names_the_item() {
        let err = VendError::NotAvailable {
            item: "Coke".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sorry, 'Coke' is not available. Please select a different drink."
        );
    }
}
