use crate::domain::validation::ValidationError;

use chrono::{DateTime, NaiveDate};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account username submitted to `user/authenticate`.
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct Username(String);

impl Username {
    /// Form field name used by the API (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Account password submitted to `user/authenticate`.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The value is
/// redacted from `Debug` output.
pub struct Password(SecretString);

impl Password {
    /// Form field name used by the API (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the password as provided.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// Short-lived token sent verbatim in the `Authorization` header.
///
/// Invariant: non-empty. Redacted from `Debug` output.
pub struct AccessToken(SecretString);

impl AccessToken {
    /// JSON field name returned by the API (`access_token`).
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the raw token.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// Long-lived token exchanged at `user/refresh_token` for a new [`AccessToken`].
///
/// Invariant: non-empty. Redacted from `Debug` output.
pub struct RefreshToken(SecretString);

impl RefreshToken {
    /// Form/JSON field name used by the API (`refresh_token`).
    pub const FIELD: &'static str = "refresh_token";

    /// Create a validated [`RefreshToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the raw token.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Client identifier issued alongside the tokens, required for a refresh.
///
/// Invariant: not blank. The value is sent back exactly as issued.
pub struct ClientId(String);

impl ClientId {
    /// Form/JSON field name used by the API (`client_id`).
    pub const FIELD: &'static str = "client_id";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the client id as issued.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Incident the message refers to (`incident_id`).
///
/// Opaque to the client: forwarded byte for byte, blank values included.
pub struct IncidentId(String);

impl IncidentId {
    /// Form field name used by the API (`incident_id`).
    pub const FIELD: &'static str = "incident_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Activity code selecting the message template (`activity_code`).
///
/// Opaque to the client: forwarded byte for byte, blank values included.
pub struct ActivityCode(String);

impl ActivityCode {
    /// Form field name used by the API (`activity_code`).
    pub const FIELD: &'static str = "activity_code";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Deliverable phone number (`phone_number`).
///
/// Invariant: ten ASCII digits, or eleven starting with `1`; the ten-digit national part
/// is not one digit repeated (`5555555555`, `15555555555`). Input is not normalized.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Form field name used by the API (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Digits in a national number.
    pub const NATIONAL_LEN: usize = 10;

    /// Validate `input` against the delivery policy.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber { input });
        }

        let national = match input.len() {
            Self::NATIONAL_LEN => Some(input.as_str()),
            len if len == Self::NATIONAL_LEN + 1 && input.starts_with('1') => Some(&input[1..]),
            _ => None,
        };

        match national {
            Some(national) if !is_single_repeated_digit(national) => Ok(Self(input)),
            _ => Err(ValidationError::InvalidPhoneNumber { input }),
        }
    }

    /// Borrow the number exactly as it will be sent.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_single_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Date the incident was logged (`event_date`), derived from a UNIX timestamp in UTC.
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Form field name used by the API (`event_date`).
    pub const FIELD: &'static str = "event_date";

    /// Wire format of the date (`YYYY-MM-DD`).
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Convert a UNIX timestamp (seconds) to its UTC calendar date.
    pub fn from_unix(timestamp: i64) -> Result<Self, ValidationError> {
        let date = DateTime::from_timestamp(timestamp, 0)
            .ok_or(ValidationError::EventDateOutOfRange { timestamp })?
            .date_naive();
        Ok(Self(date))
    }

    /// The date formatted for the wire.
    pub fn to_form_value(self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}
