//! Port abstraction for account persistence adapters and their errors.
//!
//! Adapters own their own concurrency control. The service relies only on
//! each call being linearizable on its own; `exists` followed by `save` is
//! not atomic across calls.

use async_trait::async_trait;

use crate::domain::{Account, AccountId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// No account is stored under the identifier.
        NotFound { id: AccountId } => "account {id} not found",
        /// Storage backend failed while reading or writing.
        Storage { message: String } => "account storage failed: {message}",
    }
}

/// Storage capability required by the account service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert or replace the account stored under its identifier.
    ///
    /// Adapters perform no validation; callers validate before writing.
    async fn save(&self, account: &Account) -> Result<(), AccountRepositoryError>;

    /// Fetch an account by identifier.
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when no record exists.
    async fn get(&self, id: &AccountId) -> Result<Account, AccountRepositoryError>;

    /// Report whether any stored account uses `email`.
    ///
    /// A missing record is `Ok(false)`; only infrastructure faults are errors.
    async fn exists(&self, email: &str) -> Result<bool, AccountRepositoryError>;

    /// Remove an account by identifier.
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when no record exists.
    async fn delete(&self, id: &AccountId) -> Result<(), AccountRepositoryError>;
}
