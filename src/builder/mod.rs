//! Builder API for defining state machines.
//!
//! A `MachineBuilder` collects (state, event) → handler registrations and
//! an optional error hook, then starts independent `Machine` instances
//! that share the resulting transition table.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::DefinitionError;
pub use machine::MachineBuilder;
pub(crate) use machine::MachineDefinition;
pub use transition::{Handler, TransitionTable};
