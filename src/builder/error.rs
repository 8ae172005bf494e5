//! Definition-time errors for machine builders.

use thiserror::Error;

/// Errors raised while building a transition table.
///
/// These signal a mistake in the machine definition itself and are never
/// routed through a machine's error hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("transition {state}:{event} already defined")]
    DuplicateTransition { state: String, event: String },
}
