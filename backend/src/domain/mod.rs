//! Domain primitives, ports, and the account service.
//!
//! Purpose: Define the account entity and its invariants, the ports the core
//! depends on, and the service that coordinates them. Types here never touch
//! storage or transport directly; adapters live under `outbound`.
//!
//! Public surface:
//! - Account (alias to `account::Account`): account record and lifecycle.
//! - AccountService (alias to `account_service::AccountService`): use-case
//!   orchestration with failure isolation for notifications.
//! - CreateAccountError, GetAccountError, AccountStateError: closed error
//!   sets for each operation.

pub mod account;
pub mod account_events;
pub mod account_notice;
pub mod account_service;
pub mod error;
pub mod ports;

pub use self::account::{
    ADULT_AGE, ANONYMOUS_DISPLAY_NAME, Account, AccountId, AccountIdError, AccountValidationError,
};
pub use self::account_events::AccountEvent;
pub use self::account_notice::AccountNotice;
pub use self::account_service::AccountService;
pub use self::error::{AccountStateError, CreateAccountError, GetAccountError};
