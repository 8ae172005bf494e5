//! Pluggable observation hooks.
//!
//! Machines report every dispatch and every state change to a `Logger`.
//! Dispatch records come with the event payload; transition records never
//! carry data.

use crate::runtime::trace::TraceRecord;
use std::fmt::Debug;
use tracing::debug;

/// Observation hook called by a running machine.
pub trait Logger: Send + Sync {
    fn log(&self, record: &TraceRecord, data: Option<&dyn Debug>);
}

/// Logger that discards everything. Used unless logging is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _record: &TraceRecord, _data: Option<&dyn Debug>) {}
}

/// Logger that forwards records to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, record: &TraceRecord, data: Option<&dyn Debug>) {
        match data {
            Some(data) => debug!(machine = %record.machine, data = ?data, "{}", record.message),
            None => debug!(machine = %record.machine, "{}", record.message),
        }
    }
}

/// Adapter turning a closure into a `Logger`.
pub struct FnLogger<F>(F);

impl<F> FnLogger<F>
where
    F: Fn(&TraceRecord, Option<&dyn Debug>) + Send + Sync,
{
    pub fn new(logger: F) -> Self {
        Self(logger)
    }
}

impl<F> Logger for FnLogger<F>
where
    F: Fn(&TraceRecord, Option<&dyn Debug>) + Send + Sync,
{
    fn log(&self, record: &TraceRecord, data: Option<&dyn Debug>) {
        (self.0)(record, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn fn_logger_forwards_record_and_data() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let logger = FnLogger::new(move |record, data| {
            let rendered = data.map(|d| format!("{:?}", d));
            sink.lock().unwrap().push((record.message.clone(), rendered));
        });

        let record = TraceRecord::dispatch(
            Uuid::new_v4(),
            &"Form".to_string(),
            &"Submit".to_string(),
        );
        logger.log(&record, Some(&"hello@des.io"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "dispatch: Form:Submit");
        assert_eq!(seen[0].1.as_deref(), Some("\"hello@des.io\""));
    }

    #[test]
    fn builtin_loggers_accept_records_without_data() {
        let record = TraceRecord::transition::<String>(Uuid::new_v4(), None, &"Init".to_string());

        NoopLogger.log(&record, None);
        TracingLogger.log(&record, None);
        TracingLogger.log(&record, Some(&42));
    }
}
