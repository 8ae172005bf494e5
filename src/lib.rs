//! Minifsm: a minimal event-dispatch state machine runtime
//!
//! A `MachineBuilder` registers one handler per (state, event) pair. Each
//! call to `start` produces an independent `Machine` that owns a model,
//! tracks its current state and runs the matching handler whenever an
//! event is dispatched. Handlers decide everything else: they mutate the
//! model, call `set_state`, dispatch again or defer work.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: identifier traits, implemented by enums (see
//!   `state_enum!` and `event_enum!`) or by `String`
//! - **Builder**: transition table plus optional error hook
//! - **Machine**: dispatch, `set_state`, `in_state`, deferred ticks
//! - **Graph**: Graphviz export of declarative transition tables
//!
//! # Example
//!
//! ```rust
//! use minifsm::{event_enum, state_enum, MachineBuilder, StartOptions};
//!
//! state_enum! {
//!     enum Form {
//!         Editing,
//!         Submitting,
//!         Success,
//!     }
//!     final: [Success]
//! }
//!
//! event_enum! {
//!     enum Input {
//!         Update,
//!         Submit,
//!         Ok,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Model {
//!     username: String,
//! }
//!
//! let builder = MachineBuilder::<Form, Input, String, Model>::new(Form::Editing)
//!     .transition(Form::Editing, Input::Update, |m, name| {
//!         m.model_mut().username = name.unwrap_or_default();
//!         Ok(())
//!     })
//!     .unwrap()
//!     .transition(Form::Editing, Input::Submit, |m, _| {
//!         m.set_state(Form::Submitting);
//!         m.defer(Input::Ok);
//!         Ok(())
//!     })
//!     .unwrap()
//!     .transition_to(Form::Submitting, Input::Ok, Form::Success)
//!     .unwrap();
//!
//! let mut machine = builder.start(Model::default(), StartOptions::default());
//! machine.dispatch_with(Input::Update, "Desio".to_string()).unwrap();
//! machine.dispatch(Input::Submit).unwrap();
//! assert!(machine.in_state(&[Form::Submitting]));
//!
//! machine.tick().unwrap();
//! assert!(machine.is_final());
//! assert_eq!(machine.model().username, "Desio");
//! ```

pub mod builder;
pub mod core;
pub mod graph;
pub mod runtime;

// Re-export commonly used types
pub use builder::{DefinitionError, MachineBuilder};
pub use core::{Event, State};
pub use graph::GraphDefinition;
pub use runtime::{DispatchError, Logger, Machine, RuntimeError, StartOptions, TraceRecord};
