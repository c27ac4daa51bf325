//! Machine states and the actions that drive them.

use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

state_enum! {
    /// Where the machine is in a purchase.
    pub enum MachineState {
        /// Idle, waiting for a product to be chosen.
        AwaitingSelection,
        /// A product is bound; coins are being collected.
        AwaitingPayment,
        /// Enough money is in; the item is being released.
        Dispensing,
        /// The item is out and the machine owes change.
        DispensingChange,
        /// Every product has run out.
        SoldOut,
    }
    final: [SoldOut]
}

/// The five actions every state responds to.
///
/// The machine runs `DispenseItem` and `DispenseChange` itself after each
/// coin; customers trigger the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    SelectItem,
    InsertCoin,
    DispenseItem,
    DispenseChange,
    EjectCoin,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectItem => "select_item",
            Self::InsertCoin => "insert_coin",
            Self::DispenseItem => "dispense_item",
            Self::DispenseChange => "dispense_change",
            Self::EjectCoin => "eject_coin",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
