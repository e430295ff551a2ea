//! Call-log adapters.
//!
//! - [`TracingCallLog`] forwards each record to `tracing` under the
//!   `storefront::calls` target.
//! - [`InMemoryCallLog`] keeps an append-only trace that can be inspected.
//! - [`FanOutCallLog`] forwards each record to several sinks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::infrastructure::ports::{CallLogPort, CallRecord};

/// `tracing` target used for intercepted calls.
pub const CALL_LOG_TARGET: &str = "storefront::calls";

/// Emits every call as a `debug` event.
#[derive(Debug, Default)]
pub struct TracingCallLog;

impl TracingCallLog {
    pub fn new() -> Self {
        Self
    }
}

impl CallLogPort for TracingCallLog {
    fn record(&self, call: CallRecord) {
        tracing::debug!(
            target: CALL_LOG_TARGET,
            entity = call.entity,
            operation = call.operation,
            args = ?call.args,
            "{}",
            call
        );
    }
}

/// Append-only in-memory trace.
#[derive(Debug, Default)]
pub struct InMemoryCallLog {
    records: Mutex<Vec<CallRecord>>,
}

impl InMemoryCallLog {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written record
    // (push is the only mutation), so a poisoned trace is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<CallRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every record so far, oldest first.
    pub fn records(&self) -> Vec<CallRecord> {
        self.lock().clone()
    }

    /// Operation names so far, oldest first.
    pub fn operations(&self) -> Vec<&'static str> {
        self.lock().iter().map(|call| call.operation).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl CallLogPort for InMemoryCallLog {
    fn record(&self, call: CallRecord) {
        self.lock().push(call);
    }
}

/// Forwards each record to every sink, in order.
#[derive(Default)]
pub struct FanOutCallLog {
    sinks: Vec<Arc<dyn CallLogPort>>,
}

impl FanOutCallLog {
    pub fn new(sinks: Vec<Arc<dyn CallLogPort>>) -> Self {
        Self { sinks }
    }
}

impl CallLogPort for FanOutCallLog {
    fn record(&self, call: CallRecord) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.record(call.clone());
            }
            last.record(call);
        }
    }
}
