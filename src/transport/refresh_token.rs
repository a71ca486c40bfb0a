use serde::Deserialize;

use super::TransportError;
use crate::domain::{AccessToken, ClientId, RefreshToken};

pub const REFRESH_TOKEN_PATH: &str = "user/refresh_token";

#[derive(Debug, Clone, Deserialize)]
struct RefreshTokenJsonResponse {
    access_token: String,
}

pub fn encode_refresh_token_form(
    client_id: Option<&ClientId>,
    refresh_token: &RefreshToken,
) -> Vec<(String, String)> {
    let client_id = client_id.map(ClientId::as_str).unwrap_or_default();
    vec![
        (ClientId::FIELD.to_owned(), client_id.to_owned()),
        (
            RefreshToken::FIELD.to_owned(),
            refresh_token.expose().to_owned(),
        ),
    ]
}

pub fn decode_refresh_token_json_response(json: &str) -> Result<AccessToken, TransportError> {
    let parsed: RefreshTokenJsonResponse = serde_json::from_str(json)?;
    Ok(AccessToken::new(parsed.access_token)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sends_client_id_and_refresh_token() {
        let client_id = ClientId::new("c-9").unwrap();
        let refresh = RefreshToken::new("ref-9").unwrap();
        assert_eq!(
            encode_refresh_token_form(Some(&client_id), &refresh),
            vec![
                ("client_id".to_owned(), "c-9".to_owned()),
                ("refresh_token".to_owned(), "ref-9".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_sends_blank_client_id_when_unknown() {
        let refresh = RefreshToken::new("ref-9").unwrap();
        let params = encode_refresh_token_form(None, &refresh);
        assert_eq!(params[0], ("client_id".to_owned(), String::new()));
    }

    #[test]
    fn decode_reads_access_token_only() {
        let token =
            decode_refresh_token_json_response(r#"{"access_token":"acc-2","refresh_token":"x"}"#)
                .unwrap();
        assert_eq!(token.expose(), "acc-2");
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_refresh_token_json_response("<html>"),
            Err(TransportError::Json(_))
        ));
    }
}
