//! The vending machine state machine.
//!
//! Five states share one action contract. [`VendingMachine`] holds the
//! current state and dispatches each action to it; handlers decide the next
//! state from the transaction ledger.
//!
//! ```text
//! AwaitingSelection -> AwaitingPayment -> Dispensing -> AwaitingSelection
//!                                                   \-> DispensingChange -> AwaitingSelection
//!                                                   \-> SoldOut
//! ```

mod context;
mod error;
mod handlers;
mod state;

pub use context::VendingMachine;
pub use error::VendError;
pub use state::{Action, MachineState};

/// What a customer action did to the machine.
///
/// Failures have already been shown to the customer when this is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The machine ended the action in a different state
    Transitioned { from: MachineState, to: MachineState },

    /// The action was handled without leaving the state
    Unchanged(MachineState),

    /// The action failed; `state` is where the machine ended up
    Failed { error: VendError, state: MachineState },
}

impl StepResult {
    /// State the machine is in after the action.
    pub fn state(&self) -> MachineState {
        match self {
            Self::Transitioned { to, .. } => *to,
            Self::Unchanged(state) => *state,
            Self::Failed { state, .. } => *state,
        }
    }

    pub fn error(&self) -> Option<&VendError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
