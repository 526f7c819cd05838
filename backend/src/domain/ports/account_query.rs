//! Driving port for account reads.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, GetAccountError};

/// Domain use-case port for account lookups.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Fetch an account by identifier.
    async fn get_account(&self, id: &AccountId) -> Result<Account, GetAccountError>;
}
