//! Builder API for constructing machines.
//!
//! This module provides a fluent builder for [`VendingMachine`] and the
//! `state_enum!` macro used to declare machine states.
//!
//! [`VendingMachine`]: crate::machine::VendingMachine

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
