//! A coin-operated vending machine core.
//!
//! The crate models the transaction side of a vending machine: a five-state
//! purchase state machine on top of a greedy change algorithm that pays out
//! of a finite, depleting coin inventory.
//!
//! # Core Concepts
//!
//! - **Machine**: [`VendingMachine`] dispatches customer actions to the
//!   current [`MachineState`] and shows results through a
//!   [`MessageSink`](display::MessageSink)
//! - **Transaction**: [`TransactionLedger`] tracks the selection, coins
//!   inserted, and balance
//! - **Change**: [`DenominationLedger`] makes change greedily, largest coin
//!   first
//! - **History**: every state change is recorded with its trigger and time
//!
//! # Example
//!
//! ```rust
//! use vending_machine::display::RecordingSink;
//! use vending_machine::{MachineState, VendingMachine};
//!
//! let mut machine = VendingMachine::new(RecordingSink::new());
//!
//! machine.select_product("Tango");
//! machine.insert_coin(50);
//! assert_eq!(machine.balance(), 113);
//! assert_eq!(machine.state(), MachineState::AwaitingPayment);
//!
//! for _ in 0..6 {
//!     machine.insert_coin(20);
//! }
//! assert_eq!(machine.state(), MachineState::AwaitingSelection);
//! assert_eq!(
//!     machine.display().last(),
//!     Some("Please collect your change :\n1 x 5P\n1 x 2P")
//! );
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod display;
pub mod inventory;
pub mod machine;
pub mod money;
pub mod transaction;

// Re-export commonly used types
pub use builder::{BuildError, VendingMachineBuilder};
pub use config::MachineConfig;
pub use core::{State, StateHistory, StateTransition};
pub use machine::{Action, MachineState, StepResult, VendError, VendingMachine};
pub use money::{ChangeReport, DenominationLedger, ShortfallPolicy};
pub use transaction::TransactionLedger;
