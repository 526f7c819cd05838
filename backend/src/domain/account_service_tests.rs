//! Tests for the account service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    AccountRepositoryError, MockAccountEventSink, MockAccountNotifier, MockAccountRepository,
};
use crate::domain::AccountValidationError;
use crate::test_support::{FixtureClock, fixture_timestamp};

type TestService = AccountService<MockAccountRepository, MockAccountNotifier>;

fn make_service(
    repo: MockAccountRepository,
    notifier: MockAccountNotifier,
    events: MockAccountEventSink,
) -> TestService {
    AccountService::new(
        Arc::new(repo),
        Arc::new(notifier),
        Arc::new(events),
        Arc::new(FixtureClock::at(fixture_timestamp())),
    )
}

fn stored_account(active: bool) -> Account {
    let mut account = Account::new(
        AccountId::random(),
        "Alice",
        "alice@example.com",
        30,
        fixture_timestamp(),
    );
    if !active {
        account.deactivate();
    }
    account
}

#[tokio::test]
async fn create_account_persists_and_welcomes_new_account() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists()
        .withf(|email| email == "alice@example.com")
        .times(1)
        .return_once(|_| Ok(false));
    repo.expect_save()
        .withf(|account: &Account| {
            account.name() == "Alice" && account.email() == "alice@example.com" && account.is_active()
        })
        .times(1)
        .return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send_welcome()
        .withf(|account: &Account| account.email() == "alice@example.com")
        .times(1)
        .return_once(|_| Ok(()));

    let mut events = MockAccountEventSink::new();
    events.expect_record().times(0);

    let service = make_service(repo, notifier, events);
    let account = service
        .create_account(CreateAccountRequest::new("Alice", "alice@example.com", 30))
        .await
        .expect("account created");

    assert_eq!(account.name(), "Alice");
    assert_eq!(account.email(), "alice@example.com");
    assert_eq!(account.age(), 30);
    assert!(account.is_active());
    assert_eq!(account.created_at(), fixture_timestamp());
}

#[tokio::test]
async fn create_account_rejects_duplicate_email_without_saving() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(true));
    repo.expect_save().times(0);

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send_welcome().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .create_account(CreateAccountRequest::new("X", "a@b.com", 30))
        .await
        .expect_err("duplicate email");

    assert_eq!(error, CreateAccountError::duplicate_email("a@b.com"));
}

#[rstest]
#[case("", "bob@x.com", 30, AccountValidationError::EmptyName)]
#[case("Bob", "", 30, AccountValidationError::EmptyEmail)]
#[case("Bob", "bob@x.com", -1, AccountValidationError::NegativeAge { age: -1 })]
#[tokio::test]
async fn create_account_rejects_invalid_input_without_saving(
    #[case] name: &'static str,
    #[case] email: &'static str,
    #[case] age: i32,
    #[case] expected: AccountValidationError,
) {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_save().times(0);

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send_welcome().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .create_account(CreateAccountRequest::new(name, email, age))
        .await
        .expect_err("validation failure");

    assert_eq!(error, CreateAccountError::Validation(expected));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn create_account_accepts_age_zero() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_save().times(1).return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send_welcome()
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let account = service
        .create_account(CreateAccountRequest::new("Bob", "bob@x.com", 0))
        .await
        .expect("age zero is valid");

    assert_eq!(account.age(), 0);
}

#[tokio::test]
async fn create_account_accepts_whitespace_only_name() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_save()
        .withf(|account: &Account| account.name() == "   ")
        .times(1)
        .return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send_welcome()
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let account = service
        .create_account(CreateAccountRequest::new("   ", "x@y.com", 20))
        .await
        .expect("whitespace is a non-empty name");

    assert_eq!(account.display_name(), "    (x@y.com)");
}

#[tokio::test]
async fn create_account_propagates_save_failure_and_skips_welcome() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(AccountRepositoryError::storage("disk full")));

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send_welcome().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .create_account(CreateAccountRequest::new("Alice", "alice@example.com", 30))
        .await
        .expect_err("save failure");

    assert_eq!(
        error,
        CreateAccountError::Persistence(AccountRepositoryError::storage("disk full"))
    );
    assert!(error.is_retryable());
}

#[tokio::test]
async fn create_account_propagates_uniqueness_check_fault() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists()
        .times(1)
        .return_once(|_| Err(AccountRepositoryError::storage("index offline")));
    repo.expect_save().times(0);

    let service = make_service(repo, MockAccountNotifier::new(), MockAccountEventSink::new());
    let error = service
        .create_account(CreateAccountRequest::new("Alice", "alice@example.com", 30))
        .await
        .expect_err("exists failure");

    assert!(matches!(error, CreateAccountError::Persistence(_)));
}

#[tokio::test]
async fn create_account_isolates_welcome_failure() {
    let mut repo = MockAccountRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_save().times(1).return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send_welcome()
        .times(1)
        .return_once(|_| Err(NotificationError::delivery("smtp unreachable")));

    let mut events = MockAccountEventSink::new();
    events
        .expect_record()
        .withf(|event, detail| {
            *event == AccountEvent::WelcomeDeliveryFailed
                && detail.contains("smtp unreachable")
                && !detail.contains("alice@example.com")
        })
        .times(1)
        .return_const(());

    let service = make_service(repo, notifier, events);
    let account = service
        .create_account(CreateAccountRequest::new("Alice", "alice@example.com", 30))
        .await
        .expect("welcome failure does not fail creation");

    assert!(account.is_active());
}

#[tokio::test]
async fn get_account_returns_stored_record() {
    let stored = stored_account(true);
    let id = stored.id();
    let expected = stored.clone();

    let mut repo = MockAccountRepository::new();
    repo.expect_get()
        .withf(move |requested| *requested == id)
        .times(1)
        .return_once(move |_| Ok(stored));

    let service = make_service(repo, MockAccountNotifier::new(), MockAccountEventSink::new());
    let account = service.get_account(&id).await.expect("account found");

    assert_eq!(account, expected);
}

#[tokio::test]
async fn get_account_propagates_not_found() {
    let id = AccountId::random();
    let mut repo = MockAccountRepository::new();
    repo.expect_get()
        .times(1)
        .return_once(move |_| Err(AccountRepositoryError::not_found(id)));

    let service = make_service(repo, MockAccountNotifier::new(), MockAccountEventSink::new());
    let error = service.get_account(&id).await.expect_err("missing account");

    assert_eq!(error, GetAccountError::NotFound { id });
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn deactivate_account_saves_inactive_record_and_notifies(#[case] initially_active: bool) {
    let stored = stored_account(initially_active);
    let id = stored.id();

    let mut repo = MockAccountRepository::new();
    repo.expect_get().times(1).return_once(move |_| Ok(stored));
    repo.expect_save()
        .withf(move |account: &Account| account.id() == id && !account.is_active())
        .times(1)
        .return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send()
        .withf(|to, subject, body| {
            to == "alice@example.com"
                && subject == "Account Deactivated"
                && body == "Hello Alice, your account has been deactivated."
        })
        .times(1)
        .return_once(|_, _, _| Ok(()));

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    service
        .deactivate_account(&id)
        .await
        .expect("deactivation succeeds");
}

#[tokio::test]
async fn deactivate_account_propagates_not_found_without_side_effects() {
    let id = AccountId::random();
    let mut repo = MockAccountRepository::new();
    repo.expect_get()
        .times(1)
        .return_once(move |_| Err(AccountRepositoryError::not_found(id)));
    repo.expect_save().times(0);

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .deactivate_account(&id)
        .await
        .expect_err("missing account");

    assert_eq!(error, AccountStateError::NotFound { id });
}

#[tokio::test]
async fn deactivate_account_propagates_save_failure_and_skips_notice() {
    let stored = stored_account(true);
    let id = stored.id();

    let mut repo = MockAccountRepository::new();
    repo.expect_get().times(1).return_once(move |_| Ok(stored));
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(AccountRepositoryError::storage("write timeout")));

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .deactivate_account(&id)
        .await
        .expect_err("save failure");

    assert!(matches!(error, AccountStateError::Persistence(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn deactivate_account_isolates_notice_failure() {
    let stored = stored_account(true);
    let id = stored.id();

    let mut repo = MockAccountRepository::new();
    repo.expect_get().times(1).return_once(move |_| Ok(stored));
    repo.expect_save().times(1).return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send()
        .times(1)
        .return_once(|_, _, _| Err(NotificationError::delivery("mailbox full")));

    let mut events = MockAccountEventSink::new();
    events
        .expect_record()
        .withf(move |event, detail| {
            *event == AccountEvent::DeactivationNoticeFailed
                && detail == format!("account {id}: notification delivery failed: mailbox full")
        })
        .times(1)
        .return_const(());

    let service = make_service(repo, notifier, events);
    service
        .deactivate_account(&id)
        .await
        .expect("notice failure does not fail deactivation");
}

#[tokio::test]
async fn deactivate_account_refuses_to_write_back_invalid_record() {
    let invalid = Account::new(AccountId::random(), "", "ghost@example.com", 30, fixture_timestamp());
    let id = invalid.id();

    let mut repo = MockAccountRepository::new();
    repo.expect_get().times(1).return_once(move |_| Ok(invalid));
    repo.expect_save().times(0);

    let mut notifier = MockAccountNotifier::new();
    notifier.expect_send().times(0);

    let service = make_service(repo, notifier, MockAccountEventSink::new());
    let error = service
        .deactivate_account(&id)
        .await
        .expect_err("invalid stored record");

    assert_eq!(
        error,
        AccountStateError::Validation(AccountValidationError::EmptyName)
    );
}

#[tokio::test]
async fn activate_account_restores_active_flag_and_sends_reactivation_notice() {
    let stored = stored_account(false);
    let id = stored.id();

    let mut repo = MockAccountRepository::new();
    repo.expect_get().times(1).return_once(move |_| Ok(stored));
    repo.expect_save()
        .withf(|account: &Account| account.is_active())
        .times(1)
        .return_once(|_| Ok(()));

    let mut notifier = MockAccountNotifier::new();
    notifier
        .expect_send()
        .withf(|_, subject, _| subject == "Account Reactivated")
        .times(1)
        .return_once(|_, _, _| Err(NotificationError::delivery("bounced")));

    let mut events = MockAccountEventSink::new();
    events
        .expect_record()
        .withf(|event, _| *event == AccountEvent::ReactivationNoticeFailed)
        .times(1)
        .return_const(());

    let service = make_service(repo, notifier, events);
    service
        .activate_account(&id)
        .await
        .expect("activation succeeds");
}
