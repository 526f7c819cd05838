//! Account persistence adapters.
//!
//! The in-memory adapter backs tests, demos, and single-process deployments.
//! Durable stores implement the same [`AccountRepository`] port.
//!
//! [`AccountRepository`]: crate::domain::ports::AccountRepository

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
