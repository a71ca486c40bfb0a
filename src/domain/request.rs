use crate::domain::validation::ValidationError;
use crate::domain::value::{ActivityCode, EventDate, IncidentId, Password, PhoneNumber, Username};

#[derive(Debug, Clone)]
/// Username/password pair submitted to `user/authenticate`.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replace the stored parts with any override that is itself a valid value.
    ///
    /// Empty overrides are ignored and keep the current value.
    pub(crate) fn apply_overrides(&mut self, username: Option<&str>, password: Option<&str>) {
        if let Some(username) = username.and_then(|value| Username::new(value).ok()) {
            self.username = username;
        }
        if let Some(password) = password.and_then(|value| Password::new(value).ok()) {
            self.password = password;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single `sms/message/deliver` call.
pub struct DeliveryRequest {
    phone_number: PhoneNumber,
    incident_id: IncidentId,
    activity_code: ActivityCode,
    event_date: EventDate,
}

impl DeliveryRequest {
    pub fn new(
        phone_number: PhoneNumber,
        incident_id: IncidentId,
        activity_code: ActivityCode,
        event_date: EventDate,
    ) -> Self {
        Self {
            phone_number,
            incident_id,
            activity_code,
            event_date,
        }
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn incident_id(&self) -> &IncidentId {
        &self.incident_id
    }

    pub fn activity_code(&self) -> &ActivityCode {
        &self.activity_code
    }

    pub fn event_date(&self) -> EventDate {
        self.event_date
    }
}
