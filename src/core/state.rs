//! Core State trait for machine states.
//!
//! States are plain values. Everything a state needs to decide a transition
//! lives in the transaction ledger, so the trait only describes the state
//! itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. The `state_enum!` macro implements this trait for
/// fieldless enums.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Open,
///     Jammed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert!(DoorState::Jammed.is_final());
/// assert!(!DoorState::Open.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    fn name(&self) -> &str;

    /// Final states have no outgoing transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Error states mark a machine that cannot serve customers.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn defaults_are_not_final_and_not_error() {
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Busy.is_final());
        assert!(!TestState::Broken.is_error());
    }

    #[test]
    fn overridden_final_is_respected() {
        assert!(TestState::Broken.is_final());
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
