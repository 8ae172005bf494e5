//! Per-instance start options.

use crate::runtime::logger::{FnLogger, Logger, NoopLogger, TracingLogger};
use crate::runtime::trace::TraceRecord;
use serde::Deserialize;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Options accepted by `MachineBuilder::start`.
///
/// Logger precedence: an explicit logger, then `logging: true` (which
/// selects [`TracingLogger`]), then a no-op.
///
/// ```rust
/// use minifsm::StartOptions;
///
/// let options = StartOptions::from_json(r#"{ "logging": true }"#).unwrap();
/// assert!(options.logging);
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct StartOptions {
    /// Emit dispatch and transition traces through `tracing`.
    pub logging: bool,

    #[serde(skip)]
    logger: Option<Arc<dyn Logger>>,
}

impl StartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Enable or disable the default tracing logger.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Use a closure as the logger.
    pub fn logger<F>(self, logger: F) -> Self
    where
        F: Fn(&TraceRecord, Option<&dyn Debug>) + Send + Sync + 'static,
    {
        self.with_logger(Arc::new(FnLogger::new(logger)))
    }

    /// Use a shared logger instance.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub(crate) fn resolve_logger(&self) -> Arc<dyn Logger> {
        match (&self.logger, self.logging) {
            (Some(logger), _) => Arc::clone(logger),
            (None, true) => Arc::new(TracingLogger),
            (None, false) => Arc::new(NoopLogger),
        }
    }
}

impl Debug for StartOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartOptions")
            .field("logging", &self.logging)
            .field("custom_logger", &self.logger.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    fn probe(logger: &Arc<dyn Logger>) {
        let record = TraceRecord::transition::<String>(Uuid::new_v4(), None, &"Init".to_string());
        logger.log(&record, None);
    }

    #[test]
    fn defaults_disable_logging() {
        let options = StartOptions::default();
        assert!(!options.logging);
        assert!(options.logger.is_none());
    }

    #[test]
    fn empty_json_uses_defaults() {
        let options = StartOptions::from_json("{}").unwrap();
        assert!(!options.logging);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(StartOptions::from_json(r#"{ "logging": "yes" }"#).is_err());
    }

    #[test]
    fn explicit_logger_wins_over_logging_flag() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let options = StartOptions::new()
            .logging(true)
            .logger(move |_record, _data| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        probe(&options.resolve_logger());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_output_hides_logger_internals() {
        let options = StartOptions::new().with_logger(Arc::new(NoopLogger));
        let rendered = format!("{:?}", options);
        assert_eq!(rendered, "StartOptions { logging: false, custom_logger: true }");
    }
}
