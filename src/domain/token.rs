use crate::domain::value::{AccessToken, ClientId, RefreshToken};

#[derive(Debug, Clone, Default)]
/// Tokens cached by the client between calls.
///
/// Nothing here tracks expiry: an expired access token is only discovered when the API
/// rejects it.
pub struct TokenState {
    pub access_token: Option<AccessToken>,
    pub refresh_token: Option<RefreshToken>,
    pub client_id: Option<ClientId>,
}

impl TokenState {
    /// Whether an access token is cached.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replace every field with a freshly issued token set.
    pub(crate) fn store(&mut self, tokens: &AuthTokens) {
        self.access_token = Some(tokens.access_token.clone());
        self.refresh_token = Some(tokens.refresh_token.clone());
        self.client_id = Some(tokens.client_id.clone());
    }
}

#[derive(Debug, Clone)]
/// Token set returned by `user/authenticate`.
pub struct AuthTokens {
    pub access_token: AccessToken,
    pub client_id: ClientId,
    pub refresh_token: RefreshToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_overwrites_all_fields() {
        let mut state = TokenState::default();
        assert!(!state.is_authenticated());

        state.store(&AuthTokens {
            access_token: AccessToken::new("a1").unwrap(),
            client_id: ClientId::new("c1").unwrap(),
            refresh_token: RefreshToken::new("r1").unwrap(),
        });
        state.store(&AuthTokens {
            access_token: AccessToken::new("a2").unwrap(),
            client_id: ClientId::new("c2").unwrap(),
            refresh_token: RefreshToken::new("r2").unwrap(),
        });

        assert!(state.is_authenticated());
        assert_eq!(state.access_token.as_ref().unwrap().expose(), "a2");
        assert_eq!(state.refresh_token.as_ref().unwrap().expose(), "r2");
        assert_eq!(state.client_id.as_ref().unwrap().as_str(), "c2");
    }
}
