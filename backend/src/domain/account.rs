//! Account data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Age at which an account holder counts as an adult.
pub const ADULT_AGE: i32 = 18;

/// Label shown in place of an account's display name when no name is set.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous User";

/// Validation failures reported by [`Account::validate`].
///
/// Exactly one variant is reported per check; fields are inspected in the
/// order name, email, age so the reported failure is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountValidationError {
    /// Name is the empty string.
    #[error("name cannot be empty")]
    EmptyName,
    /// Email is the empty string.
    #[error("email cannot be empty")]
    EmptyEmail,
    /// Age is below zero.
    #[error("age cannot be negative (got {age})")]
    NegativeAge {
        /// Rejected age value.
        age: i32,
    },
}

impl AccountValidationError {
    /// Name of the field that violated its invariant.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
            Self::NegativeAge { .. } => "age",
        }
    }

    /// Human-readable reason suitable for surfacing to callers.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Errors returned when parsing an [`AccountId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountIdError {
    /// Input was empty.
    #[error("account id must not be empty")]
    Empty,
    /// Input was not a UUID.
    #[error("account id must be a valid UUID: {value}")]
    Invalid {
        /// Rejected input.
        value: String,
    },
}

/// Opaque account identifier backed by a UUID.
///
/// Identifiers are assigned once at creation and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Parse an identifier from its textual UUID form.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::AccountId;
    ///
    /// let id = AccountId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, AccountIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(AccountIdError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AccountIdError::Invalid {
                value: raw.to_owned(),
            })
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Account record owned by the account service.
///
/// ## Invariants
/// - `name` and `email` are non-empty. Whitespace counts as content.
/// - `age` is zero or greater.
/// - `id` and `created_at` never change after construction.
///
/// Construction does not validate; the service calls [`Account::validate`]
/// before every write. Deserialisation always validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountDto", into = "AccountDto")]
pub struct Account {
    id: AccountId,
    name: String,
    email: String,
    age: i32,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Build an active account from its parts.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::{Account, AccountId};
    /// use chrono::Utc;
    ///
    /// let account = Account::new(AccountId::random(), "Ada", "ada@example.com", 36, Utc::now());
    /// assert!(account.is_active());
    /// assert!(account.validate().is_ok());
    /// ```
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            active: true,
            created_at,
        }
    }

    /// Check the account invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if self.email.is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        if self.age < 0 {
            return Err(AccountValidationError::NegativeAge { age: self.age });
        }
        Ok(())
    }

    /// Stable account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Account holder's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address; unique across accounts.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in whole years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Whether the account is currently active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the holder is at least [`ADULT_AGE`].
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Mark the account inactive. Returns `true` when the flag changed.
    pub fn deactivate(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    /// Mark the account active. Returns `true` when the flag changed.
    pub fn activate(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    /// Label used in greetings and listings.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::{Account, AccountId};
    /// use chrono::Utc;
    ///
    /// let account = Account::new(AccountId::random(), "Ada", "ada@example.com", 36, Utc::now());
    /// assert_eq!(account.display_name(), "Ada (ada@example.com)");
    ///
    /// let anonymous = Account::new(AccountId::random(), "", "x@example.com", 20, Utc::now());
    /// assert_eq!(anonymous.display_name(), "Anonymous User");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            return ANONYMOUS_DISPLAY_NAME.to_owned();
        }
        format!("{} ({})", self.name, self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct AccountDto {
    id: AccountId,
    name: String,
    email: String,
    age: i32,
    active: bool,
    created_at: DateTime<Utc>,
}

impl From<Account> for AccountDto {
    fn from(value: Account) -> Self {
        let Account {
            id,
            name,
            email,
            age,
            active,
            created_at,
        } = value;
        Self {
            id,
            name,
            email,
            age,
            active,
            created_at,
        }
    }
}

impl TryFrom<AccountDto> for Account {
    type Error = AccountValidationError;

    fn try_from(value: AccountDto) -> Result<Self, Self::Error> {
        let AccountDto {
            id,
            name,
            email,
            age,
            active,
            created_at,
        } = value;
        let account = Self {
            id,
            name,
            email,
            age,
            active,
            created_at,
        };
        account.validate()?;
        Ok(account)
    }
}
