//! Wiring helpers that assemble an [`AccountService`] from configuration.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use crate::config::AccountSettings;
use crate::domain::AccountService;
use crate::outbound::{InMemoryAccountRepository, LoggingNotifier, TracingAccountEventSink};

/// Account service backed by process-local adapters.
pub type InMemoryAccountService = AccountService<InMemoryAccountRepository, LoggingNotifier>;

/// Build a service over the in-memory repository, the logging notifier, and
/// the tracing event sink, using the system clock.
///
/// # Examples
/// ```
/// use accounts::bootstrap::in_memory_service;
/// use accounts::config::AccountSettings;
///
/// let settings = AccountSettings {
///     log_filter: None,
///     json_logs: false,
///     sender_address: Some("ops@example.com".to_owned()),
/// };
/// let _service = in_memory_service(&settings);
/// ```
pub fn in_memory_service(settings: &AccountSettings) -> InMemoryAccountService {
    info!(
        sender = settings.sender_address(),
        "wiring in-memory account service"
    );
    AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(LoggingNotifier::new(settings.sender_address())),
        Arc::new(TracingAccountEventSink::new()),
        Arc::new(DefaultClock),
    )
}
