//! Notification adapters.

mod logging_notifier;

pub use logging_notifier::{DEFAULT_SENDER_ADDRESS, LoggingNotifier};
