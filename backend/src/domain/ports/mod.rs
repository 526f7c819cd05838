//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`AccountRepository`], [`AccountNotifier`],
//! [`AccountEventSink`]) describe what the core needs from adapters. Driving
//! ports ([`AccountCommand`], [`AccountQuery`]) describe what callers get.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod account_event_sink;
mod account_notifier;
mod account_query;
mod account_repository;

pub use account_command::{AccountCommand, CreateAccountRequest};
#[cfg(test)]
pub use account_event_sink::MockAccountEventSink;
pub use account_event_sink::{AccountEventSink, NoOpAccountEventSink};
#[cfg(test)]
pub use account_notifier::MockAccountNotifier;
pub use account_notifier::{AccountNotifier, NotificationError};
pub use account_query::AccountQuery;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
