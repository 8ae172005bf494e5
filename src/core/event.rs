//! Event identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the stimuli presented to a machine through `dispatch`.
///
/// Events only need to be comparable and nameable; unlike states they are
/// never stored beyond the deferred queue, so no serde bounds apply.
///
/// # Example
///
/// ```rust
/// use minifsm::core::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Socket {
///     Open,
///     Closed,
/// }
///
/// impl Event for Socket {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Socket::Open.name(), "Open");
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
