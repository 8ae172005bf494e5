//! Running machine instances and their hooks.
//!
//! # Key Concepts
//!
//! - **Machine**: current state, model and deferred queue of one instance
//! - **Logger**: observation hook receiving dispatch and transition traces
//! - **ErrorPolicy**: raise runtime failures or hand them to a hook
//!
//! Dispatch is synchronous. Work that must happen later is either queued
//! on the instance with `defer` and delivered by `tick`, or scheduled on the
//! host's own task facility, which then dispatches back into the machine.

mod error;
mod logger;
mod machine;
mod options;
mod policy;
mod trace;

pub use error::{DispatchError, RuntimeError};
pub use logger::{FnLogger, Logger, NoopLogger, TracingLogger};
pub use machine::Machine;
pub use options::StartOptions;
pub use policy::{ErrorHook, ErrorPolicy};
pub use trace::{TraceKind, TraceRecord};
