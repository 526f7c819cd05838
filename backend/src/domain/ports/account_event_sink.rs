//! Observability port receiving isolated side-effect failures.
//!
//! Recording is synchronous and infallible so a slow or broken exporter can
//! never change the outcome of the operation that reported the event.

use crate::domain::AccountEvent;

/// Sink for events the service observes but does not propagate.
#[cfg_attr(test, mockall::automock)]
pub trait AccountEventSink: Send + Sync {
    /// Record one event with a free-form detail string.
    fn record(&self, event: AccountEvent, detail: &str);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAccountEventSink;

impl AccountEventSink for NoOpAccountEventSink {
    fn record(&self, _event: AccountEvent, _detail: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_every_event() {
        let sink = NoOpAccountEventSink;
        sink.record(AccountEvent::WelcomeDeliveryFailed, "smtp down");
        sink.record(AccountEvent::DeactivationNoticeFailed, "");
        sink.record(AccountEvent::ReactivationNoticeFailed, "bounced");
    }
}
