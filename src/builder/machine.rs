//! Builder for constructing state machines.

use crate::builder::error::DefinitionError;
use crate::builder::transition::{Handler, TransitionTable};
use crate::core::{Event, State};
use crate::runtime::{DispatchError, ErrorPolicy, Machine, RuntimeError, StartOptions};
use std::fmt::Debug;
use std::sync::Arc;

/// Everything instances share: start state, transitions and error policy.
pub(crate) struct MachineDefinition<S: State, E: Event, P, M> {
    pub(crate) start: S,
    pub(crate) table: TransitionTable<S, E, P, M>,
    pub(crate) on_error: ErrorPolicy<S, E, P, M>,
}

impl<S: State, E: Event, P, M> Clone for MachineDefinition<S, E, P, M> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            table: self.table.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

/// Builder for state machines.
///
/// Transitions are registered once, then any number of independent
/// instances can be started from the same builder. Registering after a
/// `start` leaves the already-started instances untouched.
///
/// ```rust
/// use minifsm::{MachineBuilder, StartOptions};
///
/// let builder = MachineBuilder::<String, String, (), u32>::new("Off".to_string())
///     .transition("Off".to_string(), "click".to_string(), |m, _| {
///         *m.model_mut() += 1;
///         m.set_state("On".to_string());
///         Ok(())
///     })
///     .unwrap()
///     .transition_to("On".to_string(), "click".to_string(), "Off".to_string())
///     .unwrap();
///
/// let mut machine = builder.start(0, StartOptions::default());
/// machine.dispatch("click".to_string()).unwrap();
///
/// assert!(machine.in_state(&["On".to_string()]));
/// assert_eq!(*machine.model(), 1);
/// ```
pub struct MachineBuilder<S: State, E: Event, P = (), M = ()> {
    definition: Arc<MachineDefinition<S, E, P, M>>,
}

impl<S, E, P, M> MachineBuilder<S, E, P, M>
where
    S: State + 'static,
    E: Event + 'static,
    P: Debug + 'static,
    M: 'static,
{
    /// Create a builder whose instances start in `start`.
    pub fn new(start: S) -> Self {
        Self {
            definition: Arc::new(MachineDefinition {
                start,
                table: TransitionTable::new(),
                on_error: ErrorPolicy::Raise,
            }),
        }
    }

    /// Route runtime dispatch failures to `hook` instead of the caller.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Machine<S, E, P, M>, &RuntimeError) + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.definition).on_error = ErrorPolicy::Intercept(Arc::new(hook));
        self
    }

    /// Register `handler` for `event` while in `state`.
    /// Returns an error if the pair is already registered.
    pub fn transition<F>(mut self, state: S, event: E, handler: F) -> Result<Self, DefinitionError>
    where
        F: Fn(&mut Machine<S, E, P, M>, Option<P>) -> Result<(), DispatchError>
            + Send
            + Sync
            + 'static,
    {
        let handler: Handler<S, E, P, M> = Arc::new(handler);
        Arc::make_mut(&mut self.definition)
            .table
            .insert(state, event, handler)?;
        Ok(self)
    }

    /// Register a transition whose only effect is entering `target`.
    pub fn transition_to(self, state: S, event: E, target: S) -> Result<Self, DefinitionError> {
        self.transition(state, event, move |machine, _| {
            machine.set_state(target.clone());
            Ok(())
        })
    }

    /// Register an event that is legal in `state` but needs no reaction.
    pub fn ignore(self, state: S, event: E) -> Result<Self, DefinitionError> {
        self.transition(state, event, |_, _| Ok(()))
    }

    /// Start a new instance bound to `model`.
    pub fn start(&self, model: M, options: StartOptions) -> Machine<S, E, P, M> {
        Machine::new(Arc::clone(&self.definition), model, &options)
    }

    pub fn start_state(&self) -> &S {
        &self.definition.start
    }

    pub fn table(&self) -> &TransitionTable<S, E, P, M> {
        &self.definition.table
    }

    pub fn is_intercepting_errors(&self) -> bool {
        self.definition.on_error.is_intercepting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Socket {
            Stopped,
            Connecting,
            Connected,
        }
        final: [Stopped]
    }

    crate::event_enum! {
        enum Signal {
            Start,
            ConnOpen,
            ConnClosed,
        }
    }

    type Builder = MachineBuilder<Socket, Signal>;

    #[test]
    fn new_builder_has_no_transitions() {
        let builder = Builder::new(Socket::Stopped);

        assert_eq!(builder.start_state(), &Socket::Stopped);
        assert!(builder.table().is_empty());
        assert!(!builder.is_intercepting_errors());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = Builder::new(Socket::Stopped)
            .transition_to(Socket::Stopped, Signal::Start, Socket::Connecting)
            .unwrap()
            .transition(Socket::Stopped, Signal::Start, |_, _| Ok(()));

        assert_eq!(
            result.err(),
            Some(DefinitionError::DuplicateTransition {
                state: "Stopped".to_string(),
                event: "Start".to_string(),
            })
        );
    }

    #[test]
    fn same_event_from_different_states_is_allowed() {
        let builder = Builder::new(Socket::Stopped)
            .transition_to(Socket::Connecting, Signal::ConnClosed, Socket::Stopped)
            .unwrap()
            .transition_to(Socket::Connected, Signal::ConnClosed, Socket::Stopped)
            .unwrap();

        assert_eq!(builder.table().len(), 2);
    }

    #[test]
    fn started_instances_keep_their_table() {
        let builder = Builder::new(Socket::Stopped)
            .transition_to(Socket::Stopped, Signal::Start, Socket::Connecting)
            .unwrap();
        let mut early = builder.start((), StartOptions::default());

        let builder = builder
            .transition_to(Socket::Connecting, Signal::ConnOpen, Socket::Connected)
            .unwrap();
        let mut late = builder.start((), StartOptions::default());

        early.dispatch(Signal::Start).unwrap();
        late.dispatch(Signal::Start).unwrap();

        assert!(early.dispatch(Signal::ConnOpen).is_err());
        late.dispatch(Signal::ConnOpen).unwrap();
        assert_eq!(late.state(), Some(&Socket::Connected));
    }

    #[test]
    fn ignored_events_are_accepted_silently() {
        let builder = Builder::new(Socket::Connected)
            .ignore(Socket::Connected, Signal::ConnOpen)
            .unwrap();
        let mut machine = builder.start((), StartOptions::default());

        machine.dispatch(Signal::ConnOpen).unwrap();

        assert!(machine.in_state(&[Socket::Connected]));
        assert!(builder.table().contains(&Socket::Connected, &Signal::ConnOpen));
    }

    #[test]
    fn on_error_installs_interception() {
        let builder = Builder::new(Socket::Stopped).on_error(|_, _| {});

        assert!(builder.is_intercepting_errors());

        let mut machine = builder.start((), StartOptions::default());
        assert!(machine.dispatch(Signal::ConnOpen).is_ok());
        assert_eq!(machine.state(), Some(&Socket::Stopped));
    }
}
