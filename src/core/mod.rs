//! Core identifier types.
//!
//! This module contains the two traits every machine is parameterised by:
//! - `State` for the modes a machine can occupy
//! - `Event` for the stimuli it reacts to
//!
//! Both are implemented for `String` so open-ended machines work without
//! declaring enums.

mod event;
mod state;

pub use event::Event;
pub use state::State;
