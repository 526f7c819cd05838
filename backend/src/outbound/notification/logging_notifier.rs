//! Notifier that records each message in the tracing pipeline.
//!
//! Used where no mail transport is configured. Every accepted message is
//! logged at `info` with its sender, recipient, and subject; bodies are only
//! emitted at `debug`.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{AccountNotifier, NotificationError};

/// Sender address used when configuration does not supply one.
pub const DEFAULT_SENDER_ADDRESS: &str = "no-reply@accounts.local";

/// [`AccountNotifier`] that writes messages to the log instead of a mailbox.
#[derive(Debug, Clone)]
pub struct LoggingNotifier {
    sender: String,
}

impl LoggingNotifier {
    /// Create a notifier that signs messages with `sender`.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    /// Address messages are sent from.
    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER_ADDRESS)
    }
}

#[async_trait]
impl AccountNotifier for LoggingNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        if to.trim().is_empty() {
            return Err(NotificationError::delivery("recipient address is empty"));
        }

        info!(from = %self.sender, to, subject, "notification dispatched");
        debug!(to, body, "notification body");
        Ok(())
    }
}
