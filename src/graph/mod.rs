//! Graphviz export for declarative transition tables.
//!
//! Handlers registered on a `MachineBuilder` are opaque, so this helper
//! works from its own state → event → target table instead. It is a
//! documentation aid and plays no part in dispatch.
//!
//! # Example
//!
//! ```rust
//! use minifsm::graph::GraphDefinition;
//!
//! let graph = GraphDefinition::new("Off")
//!     .edge("Off", "click", "On")
//!     .edge("On", "click", "Off");
//!
//! assert_eq!(
//!     graph.to_dot(),
//!     "Digraph {\n  \"__start__\" [shape=point]\n  \"__start__\" -> Off\n\n  \"Off\" -> \"On\" [label=\"click\"]\n  \"On\" -> \"Off\" [label=\"click\"]\n}"
//! );
//! ```

pub mod error;

pub use error::{GraphError, GraphIssue};

use serde_json::Value;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Key naming the start state in JSON definitions, and the sentinel node
/// drawn in front of it.
pub const START_MARKER: &str = "__start__";

/// A labelled edge leaving a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub event: String,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct StateNode {
    name: String,
    edges: Vec<Edge>,
}

/// Declarative state → event → target table, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphDefinition {
    start: String,
    states: Vec<StateNode>,
}

impl GraphDefinition {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            states: Vec::new(),
        }
    }

    /// Add an edge. Re-declaring an event for a state replaces its target
    /// but keeps its original position.
    pub fn edge(
        mut self,
        state: impl Into<String>,
        event: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let (state, event, target) = (state.into(), event.into(), target.into());
        let node = self.node_mut(state);
        match node.edges.iter().position(|e| e.event == event) {
            Some(index) => node.edges[index].target = target,
            None => node.edges.push(Edge { event, target }),
        }
        self
    }

    /// Load a definition in the `{"__start__": "A", "A": {"go": {"state": "B"}}}`
    /// shape. A transition may also be written as a bare target name.
    ///
    /// Every structural issue is reported, not just the first one.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(root) = root else {
            return Err(GraphError::Invalid(vec![GraphIssue::NotAnObject]));
        };

        let mut graph = GraphDefinition::new(String::new());
        let mut checks: Vec<Validation<(), NonEmptyVec<GraphIssue>>> = Vec::new();

        checks.push(match root.get(START_MARKER) {
            Some(Value::String(start)) => {
                graph.start = start.clone();
                Validation::success(())
            }
            Some(_) => Validation::fail(GraphIssue::InvalidStart),
            None => Validation::fail(GraphIssue::MissingStart),
        });

        for (state, events) in root.iter().filter(|(key, _)| *key != START_MARKER) {
            checks.push(graph.load_state(state, events));
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(graph),
            Validation::Failure(issues) => {
                Err(GraphError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// States in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|node| node.name.as_str())
    }

    /// Outgoing edges of `state`; empty for undeclared (terminal) states.
    pub fn edges_from(&self, state: &str) -> &[Edge] {
        match self.states.iter().find(|node| node.name == state) {
            Some(node) => &node.edges,
            None => &[],
        }
    }

    /// Edges reachable from the start state, depth-first, each state
    /// expanded once.
    pub fn walk(&self) -> Vec<(&str, &Edge)> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.visit(&self.start, &mut seen, &mut out);
        out
    }

    /// Render the reachable graph in Graphviz dot syntax.
    pub fn to_dot(&self) -> String {
        let body: String = self
            .walk()
            .into_iter()
            .map(|(state, edge)| {
                format!(
                    "  \"{}\" -> \"{}\" [label=\"{}\"]\n",
                    state, edge.target, edge.event
                )
            })
            .collect();

        format!(
            "Digraph {{\n  \"{marker}\" [shape=point]\n  \"{marker}\" -> {start}\n\n{body}}}",
            marker = START_MARKER,
            start = self.start,
            body = body
        )
    }

    fn visit<'a>(
        &'a self,
        state: &'a str,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<(&'a str, &'a Edge)>,
    ) {
        if !seen.insert(state) {
            return;
        }
        for edge in self.edges_from(state) {
            out.push((state, edge));
            self.visit(&edge.target, seen, out);
        }
    }

    fn node_mut(&mut self, state: String) -> &mut StateNode {
        let index = match self.states.iter().position(|node| node.name == state) {
            Some(index) => index,
            None => {
                self.states.push(StateNode {
                    name: state,
                    edges: Vec::new(),
                });
                self.states.len() - 1
            }
        };
        &mut self.states[index]
    }

    fn load_state(
        &mut self,
        state: &str,
        events: &Value,
    ) -> Validation<(), NonEmptyVec<GraphIssue>> {
        let Value::Object(events) = events else {
            return Validation::fail(GraphIssue::InvalidState {
                state: state.to_string(),
            });
        };

        // declared states without transitions still belong to the graph
        self.node_mut(state.to_string());

        let checks: Vec<Validation<(), NonEmptyVec<GraphIssue>>> = events
            .iter()
            .map(|(event, transition)| match target_of(transition) {
                Some(target) => {
                    let node = self.node_mut(state.to_string());
                    node.edges.push(Edge {
                        event: event.clone(),
                        target: target.to_string(),
                    });
                    Validation::success(())
                }
                None => Validation::fail(GraphIssue::InvalidTransition {
                    state: state.to_string(),
                    event: event.clone(),
                }),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

fn target_of(transition: &Value) -> Option<&str> {
    match transition {
        Value::String(target) => Some(target),
        Value::Object(fields) => fields.get("state").and_then(Value::as_str),
        _ => None,
    }
}
