//! Domain-level error types for account operations.
//!
//! Each operation owns a closed error set so callers can match every failure
//! kind exhaustively. Notification failures never appear here; the service
//! reports them to the observability sink instead.

use thiserror::Error;

use crate::domain::ports::AccountRepositoryError;
use crate::domain::{AccountId, AccountValidationError};

/// Failures returned by account creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateAccountError {
    /// Input violated an account invariant; nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(#[from] AccountValidationError),
    /// Another account already uses the email address.
    #[error("account with email {email} already exists")]
    DuplicateEmail {
        /// Conflicting email address.
        email: String,
    },
    /// The persistence port failed; no durable change occurred.
    #[error("failed to persist account: {0}")]
    Persistence(#[source] AccountRepositoryError),
}

impl CreateAccountError {
    /// Helper for duplicate email conflicts.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Whether retrying the whole operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Failures returned by account lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetAccountError {
    /// No account has the requested identifier.
    #[error("account {id} not found")]
    NotFound {
        /// Requested identifier.
        id: AccountId,
    },
    /// The persistence port failed.
    #[error("failed to load account: {0}")]
    Persistence(#[source] AccountRepositoryError),
}

impl GetAccountError {
    /// Whether retrying the lookup may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<AccountRepositoryError> for GetAccountError {
    fn from(value: AccountRepositoryError) -> Self {
        match value {
            AccountRepositoryError::NotFound { id } => Self::NotFound { id },
            other => Self::Persistence(other),
        }
    }
}

/// Failures returned when activating or deactivating an account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountStateError {
    /// No account has the requested identifier.
    #[error("account {id} not found")]
    NotFound {
        /// Requested identifier.
        id: AccountId,
    },
    /// The stored account violates an invariant and was not written back.
    #[error("stored account is invalid: {0}")]
    Validation(#[from] AccountValidationError),
    /// The persistence port failed; the flag change is not durable.
    #[error("failed to persist account state: {0}")]
    Persistence(#[source] AccountRepositoryError),
}

impl AccountStateError {
    /// Whether retrying the whole operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<GetAccountError> for AccountStateError {
    fn from(value: GetAccountError) -> Self {
        match value {
            GetAccountError::NotFound { id } => Self::NotFound { id },
            GetAccountError::Persistence(source) => Self::Persistence(source),
        }
    }
}
