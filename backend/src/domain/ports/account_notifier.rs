//! Port for transactional messages sent to account holders.

use async_trait::async_trait;

use crate::domain::{Account, AccountNotice};

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification adapters.
    pub enum NotificationError {
        /// Transport rejected or failed to deliver the message.
        Delivery { message: String } => "notification delivery failed: {message}",
    }
}

/// Message delivery capability used by the account service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    /// Deliver a message to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError>;

    /// Deliver the welcome message for a freshly created account.
    ///
    /// Built on [`AccountNotifier::send`] with the template from
    /// [`AccountNotice::welcome`].
    async fn send_welcome(&self, account: &Account) -> Result<(), NotificationError> {
        let notice = AccountNotice::welcome(account);
        self.send(account.email(), notice.subject, &notice.body)
            .await
    }
}
