use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{AccessToken, AuthTokens, ClientId, Credentials, Password, RefreshToken, Username};

pub const AUTHENTICATE_PATH: &str = "user/authenticate";

#[derive(Debug, Clone, Deserialize)]
struct AuthenticateJsonResponse {
    access_token: String,
    client_id: TransportScalar,
    refresh_token: String,
}

pub fn encode_authenticate_form(credentials: &Credentials) -> Vec<(String, String)> {
    vec![
        (
            Username::FIELD.to_owned(),
            credentials.username().as_str().to_owned(),
        ),
        (
            Password::FIELD.to_owned(),
            credentials.password().expose().to_owned(),
        ),
    ]
}

pub fn decode_authenticate_json_response(json: &str) -> Result<AuthTokens, TransportError> {
    let parsed: AuthenticateJsonResponse = serde_json::from_str(json)?;
    Ok(AuthTokens {
        access_token: AccessToken::new(parsed.access_token)?,
        client_id: ClientId::new(parsed.client_id.into_string())?,
        refresh_token: RefreshToken::new(parsed.refresh_token)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::ValidationError;

    use super::*;

    #[test]
    fn encode_sends_username_and_password() {
        let credentials = Credentials::new("alice", "s3cret").unwrap();
        assert_eq!(
            encode_authenticate_form(&credentials),
            vec![
                ("username".to_owned(), "alice".to_owned()),
                ("password".to_owned(), "s3cret".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_reads_all_three_tokens() {
        let json = r#"
        {
          "access_token": "acc-1",
          "client_id": 1234,
          "refresh_token": "ref-1",
          "expires_in": 3600
        }
        "#;

        let tokens = decode_authenticate_json_response(json).unwrap();
        assert_eq!(tokens.access_token.expose(), "acc-1");
        assert_eq!(tokens.client_id.as_str(), "1234");
        assert_eq!(tokens.refresh_token.expose(), "ref-1");
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = decode_authenticate_json_response(r#"{"access_token":"acc-1"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_rejects_empty_token() {
        let json = r#"{"access_token":"","client_id":"c","refresh_token":"r"}"#;
        let err = decode_authenticate_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::Invalid(ValidationError::Empty {
                field: AccessToken::FIELD
            })
        ));
    }
}
