//! Running machine instances.

use crate::builder::MachineDefinition;
use crate::core::{Event, State};
use crate::runtime::error::{DispatchError, RuntimeError};
use crate::runtime::logger::Logger;
use crate::runtime::options::StartOptions;
use crate::runtime::policy::ErrorPolicy;
use crate::runtime::trace::TraceRecord;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::Arc;
use uuid::Uuid;

/// A started state machine.
///
/// Instances are created by `MachineBuilder::start`. They share the
/// builder's transition table but own their current state, model and
/// deferred queue.
///
/// `dispatch` runs the matched handler synchronously and never changes
/// state on its own; handlers call `set_state` when a transition is meant.
pub struct Machine<S: State, E: Event, P, M> {
    id: Uuid,
    definition: Arc<MachineDefinition<S, E, P, M>>,
    current: Option<S>,
    model: M,
    logger: Arc<dyn Logger>,
    deferred: VecDeque<(E, Option<P>)>,
}

impl<S: State, E: Event, P: Debug, M> Machine<S, E, P, M> {
    pub(crate) fn new(
        definition: Arc<MachineDefinition<S, E, P, M>>,
        model: M,
        options: &StartOptions,
    ) -> Self {
        let start = definition.start.clone();
        let mut machine = Self {
            id: Uuid::new_v4(),
            definition,
            current: None,
            model,
            logger: options.resolve_logger(),
            deferred: VecDeque::new(),
        };
        machine.set_state(start);
        machine
    }

    /// Unique identifier of this instance, attached to every trace record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state, `None` only before the start state is applied.
    pub fn state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Check whether the current state is any of `candidates`.
    pub fn in_state(&self, candidates: &[S]) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| candidates.contains(current))
    }

    /// Check if the current state is final.
    pub fn is_final(&self) -> bool {
        self.current.as_ref().is_some_and(State::is_final)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the machine and hand the model back to the caller.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Overwrite the current state.
    ///
    /// Any state is accepted, including ones with no outgoing transitions.
    pub fn set_state(&mut self, next: S) {
        let record = TraceRecord::transition(self.id, self.current.as_ref(), &next);
        self.logger.log(&record, None);
        self.current = Some(next);
    }

    /// Dispatch an event without payload.
    pub fn dispatch(&mut self, event: E) -> Result<(), DispatchError> {
        self.route(event, None)
    }

    /// Dispatch an event carrying `payload`.
    pub fn dispatch_with(&mut self, event: E, payload: P) -> Result<(), DispatchError> {
        self.route(event, Some(payload))
    }

    /// Queue an event for the next `tick`.
    pub fn defer(&mut self, event: E) {
        self.deferred.push_back((event, None));
    }

    /// Queue an event with payload for the next `tick`.
    pub fn defer_with(&mut self, event: E, payload: P) {
        self.deferred.push_back((event, Some(payload)));
    }

    /// Number of deferred dispatches waiting for a tick.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Deliver every dispatch deferred before this call, oldest first.
    ///
    /// Each delivery is an independent dispatch. Events deferred by the
    /// handlers run during this tick wait for the next one. On failure the
    /// undelivered events stay queued ahead of newer ones.
    pub fn tick(&mut self) -> Result<usize, DispatchError> {
        let mut due = std::mem::take(&mut self.deferred);
        let mut delivered = 0;

        while let Some((event, payload)) = due.pop_front() {
            if let Err(err) = self.route(event, payload) {
                due.append(&mut self.deferred);
                self.deferred = due;
                return Err(err);
            }
            delivered += 1;
        }

        Ok(delivered)
    }

    fn route(&mut self, event: E, payload: Option<P>) -> Result<(), DispatchError> {
        let Some(state) = self.current.clone() else {
            return self.fail(RuntimeError::NoStartState {
                event: event.name().to_string(),
            });
        };

        let definition = Arc::clone(&self.definition);
        let Some(handler) = definition.table.lookup(&state, &event) else {
            return self.fail(RuntimeError::UndefinedTransition {
                state: state.name().to_string(),
                event: event.name().to_string(),
            });
        };

        let record = TraceRecord::dispatch(self.id, &state, &event);
        self.logger
            .log(&record, payload.as_ref().map(|p| p as &dyn Debug));

        handler(self, payload)
    }

    fn fail(&mut self, error: RuntimeError) -> Result<(), DispatchError> {
        match self.definition.on_error.clone() {
            ErrorPolicy::Intercept(hook) => {
                hook(self, &error);
                Ok(())
            }
            ErrorPolicy::Raise => Err(error.into()),
        }
    }
}
