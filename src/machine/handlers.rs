//! Per-state handling of the five machine actions.
//!
//! One dispatch function per action, each a `match` over the current state.
//! Handlers read and mutate the transaction ledger, pick the next state, and
//! report failures as [`VendError`]s for the context to display.

use super::context::VendingMachine;
use super::error::VendError;
use super::state::{Action, MachineState};
use crate::display::MessageSink;
use crate::money::{ChangeError, ChangeReport};
use tracing::info;

fn change_message(change: &ChangeReport) -> String {
    format!("Please collect your change :\n{change}")
}

fn refund_failed(err: ChangeError) -> VendError {
    match err {
        ChangeError::Insufficient { requested, .. } => {
            VendError::RefundFailed { amount: requested }
        }
    }
}

impl<D: MessageSink> VendingMachine<D> {
    /// Return every inserted coin, ending the transaction either way.
    fn refund(&mut self) -> Result<ChangeReport, VendError> {
        self.ledger.refund_all().map_err(refund_failed)
    }

    pub(super) fn on_select_item(&mut self, name: &str) -> Result<(), VendError> {
        match self.state {
            MachineState::AwaitingSelection => {
                if self.ledger.total_item_count() == 0 {
                    self.transition_to(MachineState::SoldOut, Action::SelectItem);
                    return Ok(());
                }

                let in_stock = self
                    .ledger
                    .inventory()
                    .find(name)
                    .is_some_and(|p| p.in_stock());
                if !in_stock {
                    return Err(VendError::NotAvailable {
                        item: name.to_string(),
                    });
                }

                let Some((product, price)) = self
                    .ledger
                    .select_product(name)
                    .map(|p| (p.name.clone(), p.price))
                else {
                    return Err(VendError::NotAvailable {
                        item: name.to_string(),
                    });
                };

                self.show(format!("You selected {product} with a value of {price}P"));
                self.transition_to(MachineState::AwaitingPayment, Action::SelectItem);
                self.show(format!("Please insert coins to buy '{product}'"));
                Ok(())
            }
            MachineState::AwaitingPayment => Err(VendError::AlreadyProcessing {
                item: name.to_string(),
            }),
            MachineState::Dispensing => Err(VendError::AlreadyDispensing),
            MachineState::DispensingChange => Ok(()),
            MachineState::SoldOut => Err(VendError::NeedsRefill),
        }
    }

    pub(super) fn on_insert_coin(&mut self) -> Result<(), VendError> {
        match self.state {
            MachineState::AwaitingSelection => {
                self.refund()?;
                Err(VendError::MustSelectFirst)
            }
            MachineState::AwaitingPayment => {
                let balance = self.ledger.balance();
                if balance <= 0 {
                    self.transition_to(MachineState::Dispensing, Action::InsertCoin);
                } else {
                    self.show(format!("Balance amount remaining {balance}"));
                }
                Ok(())
            }
            MachineState::Dispensing => Err(VendError::AlreadyDispensing),
            MachineState::DispensingChange => Ok(()),
            MachineState::SoldOut => {
                self.refund()?;
                Err(VendError::MachineEmpty { refunded: true })
            }
        }
    }

    /// Release the item if the machine can also pay the change it owes.
    ///
    /// Change is tendered here, once, and held for `DispensingChange` to hand
    /// over. If it cannot be made the purchase is refunded instead.
    pub(super) fn on_dispense_item(&mut self) -> Result<(), VendError> {
        match self.state {
            MachineState::Dispensing => {
                let change = match self.ledger.tender_change() {
                    Ok(change) => change,
                    Err(_) => {
                        let refund = self.refund();
                        self.transition_to(MachineState::AwaitingSelection, Action::DispenseItem);
                        return Err(match refund {
                            Ok(refund) => VendError::InsufficientChange { refund },
                            Err(err) => err,
                        });
                    }
                };

                self.ledger.complete_purchase();
                self.show("Item has been dispensed. Please do not forget to collect it.");

                if self.ledger.total_item_count() == 0 {
                    if !change.is_empty() {
                        self.show(change_message(&change));
                    }
                    info!("last item dispensed");
                    self.transition_to(MachineState::SoldOut, Action::DispenseItem);
                    return Err(VendError::OutOfStock);
                }

                if self.ledger.balance() < 0 {
                    self.pending_change = Some(change);
                    self.transition_to(MachineState::DispensingChange, Action::DispenseItem);
                } else {
                    self.transition_to(MachineState::AwaitingSelection, Action::DispenseItem);
                }
                Ok(())
            }
            MachineState::AwaitingSelection
            | MachineState::AwaitingPayment
            | MachineState::DispensingChange
            | MachineState::SoldOut => Ok(()),
        }
    }

    pub(super) fn on_dispense_change(&mut self) -> Result<(), VendError> {
        match self.state {
            MachineState::DispensingChange => {
                let change = match self.pending_change.take() {
                    Some(change) => change,
                    None => match self.ledger.tender_change() {
                        Ok(change) => change,
                        Err(err) => {
                            self.transition_to(
                                MachineState::AwaitingSelection,
                                Action::DispenseChange,
                            );
                            return Err(refund_failed(err));
                        }
                    },
                };

                self.show(change_message(&change));
                self.transition_to(MachineState::AwaitingSelection, Action::DispenseChange);
                Ok(())
            }
            MachineState::AwaitingSelection
            | MachineState::AwaitingPayment
            | MachineState::Dispensing
            | MachineState::SoldOut => Ok(()),
        }
    }

    pub(super) fn on_eject_coin(&mut self) -> Result<(), VendError> {
        match self.state {
            MachineState::AwaitingSelection => Err(VendError::NothingToEject),
            MachineState::AwaitingPayment => {
                let refund = self.refund();
                self.transition_to(MachineState::AwaitingSelection, Action::EjectCoin);
                let refund = refund?;
                if refund.is_empty() {
                    self.show("Transaction has been cancelled.");
                } else {
                    self.show(format!(
                        "Transaction has been cancelled. Please collect the refund:\n{refund}"
                    ));
                }
                Ok(())
            }
            MachineState::Dispensing => Err(VendError::AlreadyConfirmed),
            MachineState::DispensingChange => Ok(()),
            MachineState::SoldOut => Err(VendError::MachineEmpty { refunded: false }),
        }
    }
}
