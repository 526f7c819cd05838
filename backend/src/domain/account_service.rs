//! Account domain service.
//!
//! Implements the account driving ports on top of the persistence and
//! notification ports. A successful `save` is the commit point of every
//! write: notification failures after it are reported to the observability
//! sink and never change the outcome returned to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountCommand, AccountEventSink, AccountNotifier, AccountQuery, AccountRepository,
    CreateAccountRequest, NotificationError,
};
use crate::domain::{
    Account, AccountEvent, AccountId, AccountNotice, AccountStateError, CreateAccountError,
    GetAccountError,
};

/// Direction of an active-flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveTransition {
    Deactivate,
    Activate,
}

impl ActiveTransition {
    fn apply(self, account: &mut Account) -> bool {
        match self {
            Self::Deactivate => account.deactivate(),
            Self::Activate => account.activate(),
        }
    }

    fn notice(self, account: &Account) -> AccountNotice {
        match self {
            Self::Deactivate => AccountNotice::deactivated(account),
            Self::Activate => AccountNotice::reactivated(account),
        }
    }

    const fn failure_event(self) -> AccountEvent {
        match self {
            Self::Deactivate => AccountEvent::DeactivationNoticeFailed,
            Self::Activate => AccountEvent::ReactivationNoticeFailed,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Deactivate => "deactivate",
            Self::Activate => "activate",
        }
    }
}

/// Account service implementing [`AccountCommand`] and [`AccountQuery`].
///
/// The service keeps no state of its own; every durable fact lives behind
/// the repository. It takes no lock around `exists` and `save`, so two
/// concurrent creations with the same email can both succeed. Adapters that
/// need a hard guarantee must enforce email uniqueness inside `save`.
#[derive(Clone)]
pub struct AccountService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    events: Arc<dyn AccountEventSink>,
    clock: Arc<dyn Clock>,
}

impl<R, N> AccountService<R, N> {
    /// Create a service over the given ports.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use accounts::domain::AccountService;
    /// # use accounts::domain::ports::NoOpAccountEventSink;
    /// # use accounts::outbound::{InMemoryAccountRepository, LoggingNotifier};
    /// # use mockable::DefaultClock;
    /// let service = AccountService::new(
    ///     Arc::new(InMemoryAccountRepository::new()),
    ///     Arc::new(LoggingNotifier::new("no-reply@example.com")),
    ///     Arc::new(NoOpAccountEventSink),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        events: Arc<dyn AccountEventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            notifier,
            events,
            clock,
        }
    }
}

impl<R, N> AccountService<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    fn isolate_delivery(
        &self,
        outcome: Result<(), NotificationError>,
        event: AccountEvent,
        account: &Account,
    ) {
        if let Err(error) = outcome {
            let detail = format!("account {}: {error}", account.id());
            self.events.record(event, &detail);
        }
    }

    async fn load(&self, id: &AccountId) -> Result<Account, GetAccountError> {
        self.repository
            .get(id)
            .await
            .map_err(GetAccountError::from)
    }

    async fn transition(
        &self,
        id: &AccountId,
        transition: ActiveTransition,
    ) -> Result<(), AccountStateError> {
        let mut account = self.load(id).await?;

        if transition.apply(&mut account) {
            info!(
                account_id = %id,
                transition = transition.label(),
                active = account.is_active(),
                "account state changed"
            );
        } else {
            debug!(
                account_id = %id,
                transition = transition.label(),
                "account already in target state"
            );
        }

        account.validate()?;
        self.repository
            .save(&account)
            .await
            .map_err(AccountStateError::Persistence)?;

        let notice = transition.notice(&account);
        let outcome = self
            .notifier
            .send(account.email(), notice.subject, &notice.body)
            .await;
        self.isolate_delivery(outcome, transition.failure_event(), &account);

        Ok(())
    }
}

#[async_trait]
impl<R, N> AccountCommand for AccountService<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<Account, CreateAccountError> {
        let CreateAccountRequest { name, email, age } = request;

        let taken = self
            .repository
            .exists(&email)
            .await
            .map_err(CreateAccountError::Persistence)?;
        if taken {
            return Err(CreateAccountError::duplicate_email(email));
        }

        let account = Account::new(AccountId::random(), name, email, age, self.clock.utc());
        account.validate()?;

        self.repository
            .save(&account)
            .await
            .map_err(CreateAccountError::Persistence)?;
        info!(account_id = %account.id(), "account created");

        let outcome = self.notifier.send_welcome(&account).await;
        self.isolate_delivery(outcome, AccountEvent::WelcomeDeliveryFailed, &account);

        Ok(account)
    }

    async fn deactivate_account(&self, id: &AccountId) -> Result<(), AccountStateError> {
        self.transition(id, ActiveTransition::Deactivate).await
    }

    async fn activate_account(&self, id: &AccountId) -> Result<(), AccountStateError> {
        self.transition(id, ActiveTransition::Activate).await
    }
}

#[async_trait]
impl<R, N> AccountQuery for AccountService<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    async fn get_account(&self, id: &AccountId) -> Result<Account, GetAccountError> {
        self.load(id).await
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
