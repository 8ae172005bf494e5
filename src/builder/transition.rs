//! The transition table shared by every instance of a machine.

use crate::builder::error::DefinitionError;
use crate::core::{Event, State};
use crate::runtime::{DispatchError, Machine};
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for transition handlers.
///
/// A handler receives the running machine and the dispatch payload. It may
/// mutate the model, call `set_state`, dispatch again, or defer work.
pub type Handler<S, E, P, M> =
    Arc<dyn Fn(&mut Machine<S, E, P, M>, Option<P>) -> Result<(), DispatchError> + Send + Sync>;

/// Mapping of state → event → handler.
///
/// Each (state, event) pair holds at most one handler.
pub struct TransitionTable<S: State, E: Event, P, M> {
    states: HashMap<S, HashMap<E, Handler<S, E, P, M>>>,
}

impl<S: State, E: Event, P, M> TransitionTable<S, E, P, M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a handler, refusing a second registration for the same pair.
    pub(crate) fn insert(
        &mut self,
        state: S,
        event: E,
        handler: Handler<S, E, P, M>,
    ) -> Result<(), DefinitionError> {
        if self.contains(&state, &event) {
            return Err(DefinitionError::DuplicateTransition {
                state: state.name().to_string(),
                event: event.name().to_string(),
            });
        }
        self.states.entry(state).or_default().insert(event, handler);
        Ok(())
    }

    /// Find the handler for a (state, event) pair.
    pub fn lookup(&self, state: &S, event: &E) -> Option<&Handler<S, E, P, M>> {
        self.states.get(state).and_then(|events| events.get(event))
    }

    /// Check whether a (state, event) pair is registered.
    pub fn contains(&self, state: &S, event: &E) -> bool {
        self.lookup(state, event).is_some()
    }

    /// Events with a registered handler from `state`.
    pub fn events_from(&self, state: &S) -> Vec<&E> {
        self.states
            .get(state)
            .map(|events| events.keys().collect())
            .unwrap_or_default()
    }

    /// States with at least one outgoing transition.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    /// Total number of registered transitions.
    pub fn len(&self) -> usize {
        self.states.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, E: Event, P, M> Default for TransitionTable<S, E, P, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, P, M> Clone for TransitionTable<S, E, P, M> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Table = TransitionTable<String, String, (), ()>;

    fn noop() -> Handler<String, String, (), ()> {
        Arc::new(
            |_: &mut Machine<String, String, (), ()>, _: Option<()>| -> Result<(), DispatchError> {
                Ok(())
            },
        )
    }

    #[test]
    fn lookup_finds_registered_pairs_only() {
        let mut table = Table::new();
        table
            .insert("Connected".to_string(), "Message".to_string(), noop())
            .unwrap();

        assert!(table.contains(&"Connected".to_string(), &"Message".to_string()));
        assert!(!table.contains(&"Connected".to_string(), &"Retry".to_string()));
        assert!(table
            .lookup(&"Stopped".to_string(), &"Message".to_string())
            .is_none());
    }

    #[test]
    fn insert_rejects_duplicates_and_keeps_first_handler() {
        let mut table = Table::new();
        table
            .insert("Stopping".to_string(), "ConnClosed".to_string(), noop())
            .unwrap();

        let err = table
            .insert("Stopping".to_string(), "ConnClosed".to_string(), noop())
            .unwrap_err();

        assert_eq!(err.to_string(), "transition Stopping:ConnClosed already defined");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn events_and_states_are_listed() {
        let mut table = Table::new();
        table
            .insert("Disconnected".to_string(), "Retry".to_string(), noop())
            .unwrap();
        table
            .insert("Disconnected".to_string(), "Stop".to_string(), noop())
            .unwrap();

        let mut events = table.events_from(&"Disconnected".to_string());
        events.sort();
        assert_eq!(events, vec!["Retry", "Stop"]);
        assert!(table.events_from(&"Stopped".to_string()).is_empty());
        assert_eq!(table.states().count(), 1);
        assert!(!table.is_empty());
    }
}
