use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    EventDateOutOfRange { timestamp: i64 },
    InvalidBaseUri { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::EventDateOutOfRange { timestamp } => {
                write!(f, "event date out of range: {timestamp}")
            }
            Self::InvalidBaseUri { input, reason } => {
                write!(f, "invalid base uri {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "username" };
        assert_eq!(err.to_string(), "username must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "555".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: 555");

        let err = ValidationError::EventDateOutOfRange {
            timestamp: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("event date out of range: {}", i64::MAX)
        );

        let err = ValidationError::InvalidBaseUri {
            input: "nope".to_owned(),
            reason: "relative URL without a base".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base uri \"nope\": relative URL without a base"
        );
    }
}
