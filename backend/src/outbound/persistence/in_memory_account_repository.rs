//! Process-local account repository backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId};

/// In-memory [`AccountRepository`].
///
/// Records are cloned on the way in and out, so callers never share mutable
/// state with the store. Every call holds the lock for its whole duration,
/// which makes each operation linearizable on its own.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> Result<usize, AccountRepositoryError> {
        Ok(self.lock()?.len())
    }

    /// Whether the repository holds no accounts.
    pub fn is_empty(&self) -> Result<bool, AccountRepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<AccountId, Account>>, AccountRepositoryError> {
        self.accounts
            .lock()
            .map_err(|_| AccountRepositoryError::storage("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.lock()?;
        let replaced = accounts.insert(account.id(), account.clone()).is_some();
        debug!(account_id = %account.id(), replaced, "account stored");
        Ok(())
    }

    async fn get(&self, id: &AccountId) -> Result<Account, AccountRepositoryError> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| AccountRepositoryError::not_found(*id))
    }

    async fn exists(&self, email: &str) -> Result<bool, AccountRepositoryError> {
        Ok(self
            .lock()?
            .values()
            .any(|account| account.email() == email))
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountRepositoryError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AccountRepositoryError::not_found(*id))
    }
}
