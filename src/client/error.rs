use std::error::Error as StdError;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DeliveryClient`](crate::DeliveryClient).
///
/// Failures from the HTTP collaborator are passed through untouched, with two
/// exceptions: a rejected refresh becomes [`AuthError::RefreshFailed`], and a rejected
/// delivery becomes either a re-authentication or a [`DeliveryError`].
pub enum SmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Token acquisition failed or the re-authentication budget ran out.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The delivery endpoint rejected the request for a reason other than the token.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmsError {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn is_delivery_error(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }

    pub(crate) fn parse(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Parse(Box::new(err))
    }
}

#[derive(Debug, thiserror::Error)]
/// Failures to obtain or keep a usable access token.
pub enum AuthError {
    /// `user/refresh_token` answered with a non-2xx status.
    #[error("Unable to refresh token: {source}")]
    RefreshFailed { source: Box<SmsError> },

    /// The access token was rejected on `attempts` delivery attempts in a row.
    #[error("Authentication Error: Too many retries")]
    TooManyRetries { attempts: u32 },
}

#[derive(Debug, thiserror::Error)]
/// Rejections of `sms/message/deliver` that a new login cannot fix.
///
/// The API reports no structured reason, so the status and raw body are kept.
pub enum DeliveryError {
    #[error("Unknown Delivery Error")]
    Unknown { status: u16, body: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_api_vocabulary() {
        let err = SmsError::from(AuthError::TooManyRetries { attempts: 3 });
        assert_eq!(err.to_string(), "Authentication Error: Too many retries");
        assert!(err.is_auth_error());

        let err = SmsError::from(DeliveryError::Unknown {
            status: 403,
            body: None,
        });
        assert_eq!(err.to_string(), "Unknown Delivery Error");
        assert!(err.is_delivery_error());

        let err = SmsError::from(AuthError::RefreshFailed {
            source: Box::new(SmsError::HttpStatus {
                status: 400,
                body: Some("invalid_grant".to_owned()),
            }),
        });
        assert_eq!(
            err.to_string(),
            "Unable to refresh token: unexpected HTTP status: 400"
        );
        assert!(StdError::source(&err).is_some());
    }
}
