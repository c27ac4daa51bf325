//! State transition history.
//!
//! The machine records every state change along with the action that caused
//! it, so a session can be replayed in logs or inspected in tests.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the action that caused the change
    pub trigger: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{StateHistory, StateTransition};
/// use vending_machine::machine::MachineState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: MachineState::AwaitingSelection,
///         to: MachineState::AwaitingPayment,
///         trigger: "select_item".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: MachineState::AwaitingPayment,
///         to: MachineState::Dispensing,
///         trigger: "insert_coin".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &MachineState::Dispensing);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// States traversed in order: the first `from`, then every `to`.
    ///
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of times `state` was entered.
    pub fn visits(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Ready,
        Paying,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Ready => "Ready",
                Self::Paying => "Paying",
                Self::Done => "Done",
            }
        }
    }

    fn transition(from: TestState, to: TestState, trigger: &str) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(TestState::Ready, TestState::Paying, "select"))
            .record(transition(TestState::Paying, TestState::Done, "pay"));

        let path = history.get_path();
        assert_eq!(path, vec![&TestState::Ready, &TestState::Paying, &TestState::Done]);
        assert_eq!(history.last().unwrap().trigger, "pay");
    }

    #[test]
    fn visits_counts_entries_into_a_state() {
        let history = StateHistory::new()
            .record(transition(TestState::Ready, TestState::Paying, "select"))
            .record(transition(TestState::Paying, TestState::Ready, "eject"))
            .record(transition(TestState::Ready, TestState::Paying, "select"));

        assert_eq!(history.visits(&TestState::Paying), 2);
        assert_eq!(history.visits(&TestState::Ready), 1);
        assert_eq!(history.visits(&TestState::Done), 0);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(transition(TestState::Ready, TestState::Paying, "select"));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(transition(TestState::Ready, TestState::Paying, "select"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, "select");
    }
}
