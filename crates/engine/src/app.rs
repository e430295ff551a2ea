//! Application composition.

use std::sync::Arc;

use storefront_domain::CounterRegistry;

use crate::config::{CallLogSink, StorefrontConfig};
use crate::infrastructure::call_log::{FanOutCallLog, InMemoryCallLog, TracingCallLog};
use crate::infrastructure::ports::{CallLogPort, ClockPort};
use crate::interceptor::{Instrument, Instrumented};
use crate::store::GameStore;

/// Main application state.
///
/// Owns the store and the shared services every entity is built against.
pub struct App {
    pub store: Instrumented<GameStore>,
    pub counters: Arc<CounterRegistry>,
    pub call_log: Arc<dyn CallLogPort>,
    /// Present when the configured sink keeps an in-memory trace.
    pub trace: Option<Arc<InMemoryCallLog>>,
}

impl App {
    pub fn new(config: &StorefrontConfig, clock: Arc<dyn ClockPort>) -> Self {
        let (call_log, trace) = build_call_log(config.call_log);
        let counters = Arc::new(CounterRegistry::new());

        let store = GameStore::new(
            config.store_name.clone(),
            Arc::clone(&call_log),
            Arc::clone(&counters),
            clock,
        )
        .instrument(&call_log);

        tracing::info!(store = %config.store_name, call_log = %config.call_log, "Storefront ready");

        Self {
            store,
            counters,
            call_log,
            trace,
        }
    }
}

fn build_call_log(sink: CallLogSink) -> (Arc<dyn CallLogPort>, Option<Arc<InMemoryCallLog>>) {
    match sink {
        CallLogSink::Tracing => (Arc::new(TracingCallLog::new()), None),
        CallLogSink::Memory => {
            let memory = Arc::new(InMemoryCallLog::new());
            (memory.clone(), Some(memory))
        }
        CallLogSink::Both => {
            let memory = Arc::new(InMemoryCallLog::new());
            let sinks: Vec<Arc<dyn CallLogPort>> = vec![
                Arc::new(TracingCallLog::new()),
                memory.clone() as Arc<dyn CallLogPort>,
            ];
            (Arc::new(FanOutCallLog::new(sinks)), Some(memory))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::store::Storefront;
    use chrono::Utc;

    fn config(call_log: CallLogSink) -> StorefrontConfig {
        StorefrontConfig {
            call_log,
            ..StorefrontConfig::from_lookup(|_| None).unwrap()
        }
    }

    #[test]
    fn tracing_sink_keeps_no_trace() {
        let app = App::new(&config(CallLogSink::Tracing), Arc::new(FixedClock(Utc::now())));
        assert!(app.trace.is_none());
        assert_eq!(app.store.name().as_str(), "Steam");
    }

    #[test]
    fn memory_sinks_expose_the_trace() {
        for sink in [CallLogSink::Memory, CallLogSink::Both] {
            let app = App::new(&config(sink), Arc::new(FixedClock(Utc::now())));
            app.store.list_games();

            let trace = app.trace.expect("memory trace");
            assert_eq!(trace.operations(), vec!["list_games"]);
        }
    }
}
