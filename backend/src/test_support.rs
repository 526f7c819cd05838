//! Test utilities for the accounts crate.
//!
//! This module provides shared doubles for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{
    AccountEventSink, AccountNotifier, AccountRepository, AccountRepositoryError,
    NotificationError,
};
use crate::domain::{Account, AccountEvent, AccountId};
use crate::outbound::InMemoryAccountRepository;

/// Fixed instant used by fixtures: 2026-03-14T09:30:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.timestamp_opt(1_773_480_600, 0)
        .single()
        .expect("fixture timestamp is valid")
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    /// Clock that always reports `utc_now`.
    pub fn at(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Default for FixtureClock {
    fn default() -> Self {
        Self::at(fixture_timestamp())
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// One message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotice {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Notifier that accepts and remembers every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotice>>,
}

impl RecordingNotifier {
    /// Snapshot of every message sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentNotice> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages addressed to `to`, oldest first.
    pub fn sent_to(&self, to: &str) -> Vec<SentNotice> {
        self.sent()
            .into_iter()
            .filter(|notice| notice.to == to)
            .collect()
    }
}

#[async_trait]
impl AccountNotifier for RecordingNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentNotice {
                to: to.to_owned(),
                subject: subject.to_owned(),
                body: body.to_owned(),
            });
        Ok(())
    }
}

/// Notifier whose every delivery fails.
#[derive(Debug)]
pub struct FailingNotifier {
    message: String,
    attempts: AtomicUsize,
}

impl FailingNotifier {
    /// Notifier failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of delivery attempts observed.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountNotifier for FailingNotifier {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), NotificationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotificationError::delivery(self.message.clone()))
    }
}

/// Event sink that remembers every recorded event.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<(AccountEvent, String)>>,
}

impl RecordingEventSink {
    /// Snapshot of recorded events with their detail strings.
    pub fn events(&self) -> Vec<(AccountEvent, String)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times `event` was recorded.
    pub fn count(&self, event: AccountEvent) -> usize {
        self.events()
            .iter()
            .filter(|(recorded, _)| *recorded == event)
            .count()
    }
}

impl AccountEventSink for RecordingEventSink {
    fn record(&self, event: AccountEvent, detail: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event, detail.to_owned()));
    }
}

/// In-memory repository that counts writes and can be told to fail them.
#[derive(Debug, Default)]
pub struct CountingAccountRepository {
    inner: InMemoryAccountRepository,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl CountingAccountRepository {
    /// Empty repository accepting writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent `save` calls fail with a storage error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Underlying store.
    pub fn inner(&self) -> &InMemoryAccountRepository {
        &self.inner
    }
}

#[async_trait]
impl AccountRepository for CountingAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AccountRepositoryError::storage("injected save failure"));
        }
        self.inner.save(account).await?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, id: &AccountId) -> Result<Account, AccountRepositoryError> {
        self.inner.get(id).await
    }

    async fn exists(&self, email: &str) -> Result<bool, AccountRepositoryError> {
        self.inner.exists(email).await
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountRepositoryError> {
        self.inner.delete(id).await
    }
}
