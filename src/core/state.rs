//! State identifiers.
//!
//! Every state a machine can occupy implements this trait. States are plain
//! comparable values; the machine only ever compares, hashes and names them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out copies in trace records and errors
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: hosts can store or ship the current state
///
/// # Example
///
/// ```rust
/// use minifsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Connection {
///     Stopped,
///     Connecting,
///     Connected,
/// }
///
/// impl State for Connection {
///     fn name(&self) -> &str {
///         match self {
///             Self::Stopped => "Stopped",
///             Self::Connecting => "Connecting",
///             Self::Connected => "Connected",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Stopped)
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the runtime never refuses a dispatch because
    /// of it. A terminal state is simply one with no registered outgoing
    /// transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Open-ended state identifiers, for machines whose states are not known
/// ahead of time.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Editing,
        Submitting,
        Success,
        Rejected,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Editing => "Editing",
                Self::Submitting => "Submitting",
                Self::Success => "Success",
                Self::Rejected => "Rejected",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Success | Self::Rejected)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Rejected)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Editing.name(), "Editing");
        assert_eq!(TestState::Submitting.name(), "Submitting");
        assert_eq!(TestState::Success.name(), "Success");
        assert_eq!(TestState::Rejected.name(), "Rejected");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Editing.is_final());
        assert!(!TestState::Submitting.is_final());
        assert!(TestState::Success.is_final());
        assert!(TestState::Rejected.is_final());
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!TestState::Editing.is_error());
        assert!(!TestState::Success.is_error());
        assert!(TestState::Rejected.is_error());
    }

    #[test]
    fn string_states_use_their_contents_as_name() {
        let state = String::from("GetSession");
        assert_eq!(state.name(), "GetSession");
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Submitting;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
