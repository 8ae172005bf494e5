//! Error interception strategy.

use crate::core::{Event, State};
use crate::runtime::error::RuntimeError;
use crate::runtime::machine::Machine;
use std::sync::Arc;

/// Type alias for error hooks.
pub type ErrorHook<S, E, P, M> = Arc<dyn Fn(&mut Machine<S, E, P, M>, &RuntimeError) + Send + Sync>;

/// How a machine reacts to runtime failures during dispatch.
pub enum ErrorPolicy<S: State, E: Event, P, M> {
    /// Return the failure to the dispatch caller.
    Raise,

    /// Hand the failure to a hook; dispatch then returns normally.
    Intercept(ErrorHook<S, E, P, M>),
}

impl<S: State, E: Event, P, M> ErrorPolicy<S, E, P, M> {
    pub fn is_intercepting(&self) -> bool {
        matches!(self, Self::Intercept(_))
    }
}

impl<S: State, E: Event, P, M> Default for ErrorPolicy<S, E, P, M> {
    fn default() -> Self {
        Self::Raise
    }
}

impl<S: State, E: Event, P, M> Clone for ErrorPolicy<S, E, P, M> {
    fn clone(&self) -> Self {
        match self {
            Self::Raise => Self::Raise,
            Self::Intercept(hook) => Self::Intercept(Arc::clone(hook)),
        }
    }
}
