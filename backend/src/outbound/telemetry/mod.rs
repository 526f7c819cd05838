//! Observability adapters for account events.

mod tracing_event_sink;

pub use tracing_event_sink::TracingAccountEventSink;
