//! Trace records handed to loggers.

use crate::core::{Event, State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// What a trace record describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceKind {
    /// An event matched a handler and is about to run.
    Dispatch { state: String, event: String },

    /// `set_state` overwrote the current state. `from` is `None` for the
    /// initial transition performed by `start`.
    Transition { from: Option<String>, to: String },
}

/// One observation emitted by a machine.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Instance that produced the record
    pub machine: Uuid,
    pub kind: TraceKind,
    /// Human-readable rendering of `kind`
    pub message: String,
    pub at: DateTime<Utc>,
}

impl TraceRecord {
    pub(crate) fn dispatch<S: State, E: Event>(machine: Uuid, state: &S, event: &E) -> Self {
        let message = format!("dispatch: {}:{}", state.name(), event.name());
        Self {
            machine,
            kind: TraceKind::Dispatch {
                state: state.name().to_string(),
                event: event.name().to_string(),
            },
            message,
            at: Utc::now(),
        }
    }

    pub(crate) fn transition<S: State>(machine: Uuid, from: Option<&S>, to: &S) -> Self {
        let message = format!(
            "transition: {} -> {}",
            from.map_or("(none)", |s| s.name()),
            to.name()
        );
        Self {
            machine,
            kind: TraceKind::Transition {
                from: from.map(|s| s.name().to_string()),
                to: to.name().to_string(),
            },
            message,
            at: Utc::now(),
        }
    }
}
