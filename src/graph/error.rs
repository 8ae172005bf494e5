//! Graph definition errors.

use thiserror::Error;

/// A single structural problem found in a JSON graph definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphIssue {
    #[error("definition must be a JSON object")]
    NotAnObject,

    #[error("missing \"__start__\" entry")]
    MissingStart,

    #[error("\"__start__\" must name a state")]
    InvalidStart,

    #[error("state \"{state}\" must map events to transitions")]
    InvalidState { state: String },

    #[error("transition {state}:{event} must name a target state")]
    InvalidTransition { state: String, event: String },
}

/// Errors that can occur when loading a graph definition.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid graph definition ({} issue(s)): {}", .0.len(), render(.0))]
    Invalid(Vec<GraphIssue>),
}

fn render(issues: &[GraphIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
