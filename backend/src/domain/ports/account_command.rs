//! Driving port for account mutations.
//!
//! Callers depend on this trait rather than the concrete service so tests
//! and alternative front ends can substitute their own implementation.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, AccountStateError, CreateAccountError};

/// Input for [`AccountCommand::create_account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    /// Account holder's name.
    pub name: String,
    /// Contact address; must be unique.
    pub email: String,
    /// Age in whole years; negative values are rejected.
    pub age: i32,
}

impl CreateAccountRequest {
    /// Convenience constructor accepting borrowed or owned strings.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Domain use-case port for account writes.
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create, persist, and welcome a new account.
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<Account, CreateAccountError>;

    /// Mark an account inactive and notify its holder.
    async fn deactivate_account(&self, id: &AccountId) -> Result<(), AccountStateError>;

    /// Mark an account active again and notify its holder.
    async fn activate_account(&self, id: &AccountId) -> Result<(), AccountStateError>;
}
