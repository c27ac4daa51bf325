//! State abstractions shared by the machine.
//!
//! - The `State` trait every machine state implements
//! - Transition history with timestamps

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
