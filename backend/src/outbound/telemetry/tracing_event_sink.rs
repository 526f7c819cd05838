//! Event sink that forwards isolated failures to `tracing`.

use tracing::warn;

use crate::domain::AccountEvent;
use crate::domain::ports::AccountEventSink;

/// [`AccountEventSink`] emitting one `warn` record per event.
///
/// The event code is attached as the `event` field so log pipelines can
/// alert on it without parsing the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAccountEventSink;

impl TracingAccountEventSink {
    /// Create a new sink.
    pub fn new() -> Self {
        Self
    }
}

impl AccountEventSink for TracingAccountEventSink {
    fn record(&self, event: AccountEvent, detail: &str) {
        warn!(event = event.code(), detail, "account side effect failed");
    }
}
