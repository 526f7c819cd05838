//! Account management core.
//!
//! The [`domain`] module holds the account entity, its ports, and the
//! [`domain::AccountService`] that orchestrates persistence and
//! notifications. [`outbound`] provides adapters for those ports, while
//! [`config`], [`telemetry`], and [`bootstrap`] wire everything together.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
