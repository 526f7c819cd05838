//! Observability events raised by the account service.
//!
//! Events describe side effects that failed without failing the enclosing
//! operation. Adapters map them to log lines, counters, or alerts.

use std::fmt;

/// Isolated failures reported to the observability sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountEvent {
    /// The welcome message for a new account could not be delivered.
    WelcomeDeliveryFailed,
    /// The deactivation notice could not be delivered.
    DeactivationNoticeFailed,
    /// The reactivation notice could not be delivered.
    ReactivationNoticeFailed,
}

impl AccountEvent {
    /// Machine-readable event code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WelcomeDeliveryFailed => "welcome_delivery_failed",
            Self::DeactivationNoticeFailed => "deactivation_notice_failed",
            Self::ReactivationNoticeFailed => "reactivation_notice_failed",
        }
    }
}

impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
