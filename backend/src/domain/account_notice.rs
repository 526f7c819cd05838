//! Message templates sent to account holders.

use crate::domain::Account;

/// Subject line of the welcome message.
pub const WELCOME_SUBJECT: &str = "Welcome!";
/// Subject line of the deactivation notice.
pub const DEACTIVATED_SUBJECT: &str = "Account Deactivated";
/// Subject line of the reactivation notice.
pub const REACTIVATED_SUBJECT: &str = "Account Reactivated";

/// Rendered subject and body for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNotice {
    /// Subject line.
    pub subject: &'static str,
    /// Plain-text body.
    pub body: String,
}

impl AccountNotice {
    /// Greeting sent after an account is created.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::{Account, AccountId, AccountNotice};
    /// use chrono::Utc;
    ///
    /// let account = Account::new(AccountId::random(), "Ada", "ada@example.com", 36, Utc::now());
    /// let notice = AccountNotice::welcome(&account);
    /// assert_eq!(notice.subject, "Welcome!");
    /// assert_eq!(notice.body, "Welcome Ada! Thanks for joining us.");
    /// ```
    #[must_use]
    pub fn welcome(account: &Account) -> Self {
        Self {
            subject: WELCOME_SUBJECT,
            body: format!("Welcome {}! Thanks for joining us.", account.name()),
        }
    }

    /// Notice sent after an account is deactivated.
    #[must_use]
    pub fn deactivated(account: &Account) -> Self {
        Self {
            subject: DEACTIVATED_SUBJECT,
            body: format!(
                "Hello {}, your account has been deactivated.",
                account.name()
            ),
        }
    }

    /// Notice sent after an account is reactivated.
    #[must_use]
    pub fn reactivated(account: &Account) -> Self {
        Self {
            subject: REACTIVATED_SUBJECT,
            body: format!(
                "Hello {}, your account has been reactivated.",
                account.name()
            ),
        }
    }
}
