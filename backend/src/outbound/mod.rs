//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: process-local account storage
//! - **notification**: message delivery that writes to the tracing pipeline
//! - **telemetry**: observability sinks for isolated failures
//!
//! Adapters translate between domain types and their backing store. They
//! contain no business logic.

pub mod notification;
pub mod persistence;
pub mod telemetry;

pub use notification::LoggingNotifier;
pub use persistence::InMemoryAccountRepository;
pub use telemetry::TracingAccountEventSink;
