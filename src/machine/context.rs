//! The machine a customer talks to.

use super::error::VendError;
use super::state::{Action, MachineState};
use super::StepResult;
use crate::config::MachineConfig;
use crate::core::{StateHistory, StateTransition};
use crate::display::{ConsoleSink, MessageSink};
use crate::inventory::{Inventory, Product};
use crate::money::{ChangeReport, DenominationLedger};
use crate::transaction::TransactionLedger;
use chrono::Utc;
use tracing::{debug, warn};

/// Composition root: current state, transaction ledger, and message sink.
///
/// Every customer action is dispatched to the handler for the current state.
/// Failures never escape as panics; they are shown through the sink and
/// returned inside the [`StepResult`].
///
/// # Example
///
/// ```rust
/// use vending_machine::display::RecordingSink;
/// use vending_machine::machine::{MachineState, VendingMachine};
///
/// let mut machine = VendingMachine::new(RecordingSink::new());
///
/// machine.select_product("Coke");
/// machine.insert_coin(50);
/// let result = machine.insert_coin(50);
///
/// assert_eq!(result.state(), MachineState::AwaitingSelection);
/// assert_eq!(
///     machine.display().last(),
///     Some("Please collect your change :\n1 x 20P\n1 x 10P\n1 x 5P")
/// );
/// ```
pub struct VendingMachine<D: MessageSink = ConsoleSink> {
    pub(super) state: MachineState,
    pub(super) ledger: TransactionLedger,
    pub(super) pending_change: Option<ChangeReport>,
    display: D,
    history: StateHistory<MachineState>,
}

impl<D: MessageSink> VendingMachine<D> {
    /// A machine stocked with the reference seed.
    pub fn new(display: D) -> Self {
        Self::from_config(MachineConfig::default(), display)
    }

    /// Build a machine from a configuration the caller has already checked.
    pub(crate) fn from_config(config: MachineConfig, display: D) -> Self {
        let ledger = TransactionLedger::new(
            Inventory::new(config.products),
            DenominationLedger::new(config.denominations, config.shortfall_policy),
        );

        let state = if ledger.total_item_count() > 0 {
            MachineState::AwaitingSelection
        } else {
            MachineState::SoldOut
        };
        debug!(%state, items = ledger.total_item_count(), "machine ready");

        Self {
            state,
            ledger,
            pending_change: None,
            display,
            history: StateHistory::new(),
        }
    }

    /// Choose a product to buy.
    pub fn select_product(&mut self, name: &str) -> StepResult {
        let from = self.state;
        let result = self.on_select_item(name);
        self.conclude(Action::SelectItem, from, result)
    }

    /// Insert one coin of `value` pence.
    ///
    /// The coin is recorded, then the current state handles it, and the
    /// machine immediately tries to dispense the item and any change. Each
    /// step runs against whatever state the previous step left behind.
    pub fn insert_coin(&mut self, value: u32) -> StepResult {
        let from = self.state;
        self.ledger.add_coin(value);

        let result = self
            .on_insert_coin()
            .and_then(|()| self.on_dispense_item())
            .and_then(|()| self.on_dispense_change());

        self.conclude(Action::InsertCoin, from, result)
    }

    /// Cancel the purchase and get the inserted money back.
    pub fn eject_coin(&mut self) -> StepResult {
        let from = self.state;
        let result = self.on_eject_coin();
        self.conclude(Action::EjectCoin, from, result)
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Positive while the customer owes money, negative while the machine does.
    ///
    /// Once a purchase completes the last balance is kept until the next
    /// product is selected.
    pub fn balance(&self) -> i64 {
        self.ledger.balance()
    }

    pub fn total_item_count(&self) -> u32 {
        self.ledger.total_item_count()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.ledger.selected_product()
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn history(&self) -> &StateHistory<MachineState> {
        &self.history
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Coins left for change, one `"<count> x <value>P"` line per
    /// denomination, largest first.
    pub fn denomination_report(&self) -> String {
        self.ledger.denominations().report()
    }

    pub(super) fn show(&mut self, text: impl AsRef<str>) {
        self.display.display_message(text.as_ref());
    }

    pub(super) fn transition_to(&mut self, next: MachineState, trigger: Action) {
        if next == self.state {
            return;
        }

        debug!(from = %self.state, to = %next, %trigger, "state transition");
        let transition = StateTransition {
            from: self.state,
            to: next,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        };
        self.history = std::mem::take(&mut self.history).record(transition);
        self.state = next;
    }

    fn conclude(
        &mut self,
        action: Action,
        from: MachineState,
        result: Result<(), VendError>,
    ) -> StepResult {
        match result {
            Ok(()) if self.state == from => StepResult::Unchanged(from),
            Ok(()) => StepResult::Transitioned {
                from,
                to: self.state,
            },
            Err(error) => {
                warn!(%action, state = %self.state, %error, "action failed");
                self.show(error.to_string());
                StepResult::Failed {
                    error,
                    state: self.state,
                }
            }
        }
    }
}
