//! Errors raised while dispatching events.

use std::error::Error as StdError;
use thiserror::Error;

/// Failures detected by the runtime itself during `dispatch`.
///
/// These are the errors a machine's `on_error` hook can intercept. The
/// `Display` output is the human-readable message handed to the hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("no start state set")]
    NoStartState { event: String },

    #[error("transition {state}:{event} not defined")]
    UndefinedTransition { state: String, event: String },
}

/// Errors returned from `Machine::dispatch`.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A runtime failure that no `on_error` hook intercepted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// A handler failed; handler failures always reach the caller.
    #[error("handler failed: {0}")]
    Handler(Box<dyn StdError + Send + Sync>),
}

impl DispatchError {
    /// Wrap a handler failure.
    pub fn handler<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Handler(error.into())
    }

    /// The runtime failure behind this error, if any.
    pub fn as_runtime(&self) -> Option<&RuntimeError> {
        match self {
            Self::Runtime(err) => Some(err),
            Self::Handler(_) => None,
        }
    }
}
