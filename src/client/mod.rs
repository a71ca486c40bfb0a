//! Client layer: token lifecycle, delivery retry policy, and transport orchestration.

mod error;
mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AccessToken, ActivityCode, AuthTokens, ClientId, Credentials, DeliveryRequest,
    DeliveryResponse, EventDate, IncidentId, PhoneNumber, RefreshToken, TokenState,
    ValidationError,
};
use crate::transport::{
    AUTHENTICATE_PATH, DELIVER_PATH, REFRESH_TOKEN_PATH, decode_authenticate_json_response,
    decode_deliver_json_response, decode_refresh_token_json_response, encode_authenticate_form,
    encode_deliver_form, encode_refresh_token_form,
};

pub use error::{AuthError, DeliveryError, SmsError};
pub use http::{BoxFuture, HttpResponse, HttpTransport, TransportFailure};

use http::ReqwestTransport;

/// Delivery attempts allowed per call while the token keeps expiring, unless configured
/// otherwise.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

const CONTENT_TYPE: &str = "Content-Type";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const AUTHORIZATION: &str = "Authorization";

/// Whether a rejected response means the access token expired or was revoked.
///
/// The API gives no structured signal for this; it answers `401` with a body that
/// mentions `Token` (case-sensitive). Any other `401` is a hard failure.
pub fn is_token_expired(status: u16, body: &str) -> bool {
    status == 401 && body.contains("Token")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Settings fixed when the client is built.
pub struct ClientConfig {
    base_uri: Url,
    retry_attempts: u32,
}

impl ClientConfig {
    /// Base URI every endpoint path is resolved against (always ends with `/`).
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Maximum delivery attempts within one delivery while the access token keeps being
    /// rejected. Each attempt but the last is followed by a login; `0` behaves like `1`.
    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }
}

#[derive(Clone)]
/// Builder for [`DeliveryClient`].
///
/// Use this to seed previously issued tokens, change the retry budget, or customize
/// the HTTP transport.
pub struct DeliveryClientBuilder {
    base_uri: String,
    credentials: Credentials,
    access_token: Option<String>,
    refresh_token: Option<String>,
    client_id: Option<String>,
    retry_attempts: u32,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl DeliveryClientBuilder {
    /// Create a builder with no cached tokens and the default retry budget.
    pub fn new(base_uri: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_uri: base_uri.into(),
            credentials,
            access_token: None,
            refresh_token: None,
            client_id: None,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Seed an access token obtained earlier. A blank value is treated as absent.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Seed a refresh token obtained earlier. A blank value is treated as absent.
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Seed the client id that was issued with the refresh token.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Maximum delivery attempts while the token keeps expiring (default: 3).
    ///
    /// A budget of `n` allows at most `n - 1` logins triggered by expired tokens.
    pub fn retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    /// Set an HTTP client timeout applied to each request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through a custom [`HttpTransport`] instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`DeliveryClient`].
    pub fn build(self) -> Result<DeliveryClient, SmsError> {
        let base_uri = parse_base_uri(&self.base_uri)?;

        let tokens = TokenState {
            access_token: non_blank(self.access_token).map(AccessToken::new).transpose()?,
            refresh_token: non_blank(self.refresh_token)
                .map(RefreshToken::new)
                .transpose()?,
            client_id: non_blank(self.client_id).map(ClientId::new).transpose()?,
        };

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(DeliveryClient {
            config: ClientConfig {
                base_uri,
                retry_attempts: self.retry_attempts,
            },
            credentials: self.credentials,
            tokens,
            http,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_base_uri(input: &str) -> Result<Url, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidBaseUri {
        input: input.to_owned(),
        reason,
    };

    let mut url = Url::parse(input.trim()).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be a base".to_owned()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Clone)]
/// Client for the SMS delivery API.
///
/// Holds the account credentials and the cached tokens. Tokens are obtained lazily on
/// the first delivery, and a delivery rejected for an expired token triggers a fresh
/// login and another attempt, for at most [`ClientConfig::retry_attempts`] attempts.
///
/// Every operation that can touch the cached tokens takes `&mut self`; share a client
/// between tasks only behind a lock, or give each task its own.
pub struct DeliveryClient {
    config: ClientConfig,
    credentials: Credentials,
    tokens: TokenState,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for DeliveryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryClient")
            .field("config", &self.config)
            .field("username", &self.credentials.username())
            .field("authenticated", &self.tokens.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl DeliveryClient {
    /// Create a client with the default configuration.
    ///
    /// For seeded tokens or a custom retry budget, use [`DeliveryClient::builder`].
    pub fn new(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SmsError> {
        let credentials = Credentials::new(username, password)?;
        Self::builder(base_uri, credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(base_uri: impl Into<String>, credentials: Credentials) -> DeliveryClientBuilder {
        DeliveryClientBuilder::new(base_uri, credentials)
    }

    /// Settings the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Tokens currently cached by the client.
    pub fn tokens(&self) -> &TokenState {
        &self.tokens
    }

    /// Log in at `user/authenticate` and replace every cached token.
    ///
    /// A non-empty `username` or `password` replaces the stored credential before the
    /// request is made. Failures are returned as produced by the transport.
    #[tracing::instrument(name = "DeliveryClient::authenticate", skip_all)]
    pub async fn authenticate(
        &mut self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthTokens, SmsError> {
        self.credentials.apply_overrides(username, password);

        let params = encode_authenticate_form(&self.credentials);
        let response = self.post(AUTHENTICATE_PATH, params).await?;
        let tokens = decode_authenticate_json_response(&response.body).map_err(SmsError::parse)?;

        self.tokens.store(&tokens);
        debug!(client_id = tokens.client_id.as_str(), "stored new token set");
        Ok(tokens)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Without a cached refresh token this performs a full [`authenticate`]. Only the
    /// access token is replaced on success.
    ///
    /// [`authenticate`]: DeliveryClient::authenticate
    #[tracing::instrument(name = "DeliveryClient::refresh", skip_all)]
    pub async fn refresh(&mut self) -> Result<(), SmsError> {
        let Some(refresh_token) = self.tokens.refresh_token.clone() else {
            debug!("no refresh token cached, logging in again");
            self.authenticate(None, None).await?;
            return Ok(());
        };

        let params = encode_refresh_token_form(self.tokens.client_id.as_ref(), &refresh_token);
        let response = match self.post(REFRESH_TOKEN_PATH, params).await {
            Ok(response) => response,
            Err(err @ SmsError::HttpStatus { .. }) => {
                return Err(AuthError::RefreshFailed {
                    source: Box::new(err),
                }
                .into());
            }
            Err(err) => return Err(err),
        };

        let access_token =
            decode_refresh_token_json_response(&response.body).map_err(SmsError::parse)?;
        self.tokens.access_token = Some(access_token);
        debug!("stored refreshed access token");
        Ok(())
    }

    /// Deliver an SMS for an incident event.
    ///
    /// Returns `Ok(None)` without any network call when `phone_number` is not a
    /// deliverable number (see [`PhoneNumber::parse`]); such input is routine and not
    /// treated as an error. `event_date` is a UNIX timestamp, sent as its UTC date.
    ///
    /// Errors:
    /// - [`SmsError::Validation`] for a timestamp outside the representable date range,
    /// - [`SmsError::Auth`] when the token keeps expiring past the retry budget,
    /// - [`SmsError::Delivery`] for any other rejection of the delivery,
    /// - anything else as raised while logging in or talking to the server.
    #[tracing::instrument(
        name = "DeliveryClient::deliver",
        skip_all,
        fields(incident_id = incident_id)
    )]
    pub async fn deliver(
        &mut self,
        phone_number: &str,
        incident_id: &str,
        activity_code: &str,
        event_date: i64,
    ) -> Result<Option<DeliveryResponse>, SmsError> {
        let phone_number = match PhoneNumber::parse(phone_number) {
            Ok(phone_number) => phone_number,
            Err(_) => {
                debug!("phone number is not deliverable, skipping");
                return Ok(None);
            }
        };

        let request = DeliveryRequest::new(
            phone_number,
            IncidentId::new(incident_id),
            ActivityCode::new(activity_code),
            EventDate::from_unix(event_date)?,
        );

        self.deliver_request(request).await.map(Some)
    }

    /// Deliver an already validated request.
    ///
    /// Logs in first when no access token is cached. A delivery rejected with an
    /// expired token (see [`is_token_expired`]) triggers a full login and another
    /// attempt with the same payload. The rejection that brings the attempt count to
    /// [`ClientConfig::retry_attempts`] fails with [`AuthError::TooManyRetries`] instead.
    pub async fn deliver_request(
        &mut self,
        request: DeliveryRequest,
    ) -> Result<DeliveryResponse, SmsError> {
        if !self.tokens.is_authenticated() {
            self.authenticate(None, None).await?;
        }

        let params = encode_deliver_form(&request);
        let mut attempts = 0;
        loop {
            match self.post(DELIVER_PATH, params.clone()).await {
                Ok(response) => {
                    return decode_deliver_json_response(&response.body).map_err(SmsError::parse);
                }
                Err(SmsError::HttpStatus { status, body }) => {
                    if !is_token_expired(status, body.as_deref().unwrap_or_default()) {
                        return Err(DeliveryError::Unknown { status, body }.into());
                    }
                    attempts += 1;
                    if attempts >= self.config.retry_attempts {
                        return Err(AuthError::TooManyRetries { attempts }.into());
                    }
                    warn!(
                        attempt = attempts,
                        budget = self.config.retry_attempts,
                        "access token rejected, logging in again"
                    );
                    self.authenticate(None, None).await?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Headers sent with every request.
    ///
    /// `Authorization` carries the bare access token and is omitted entirely while no
    /// token is cached.
    pub fn build_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(CONTENT_TYPE.to_owned(), FORM_CONTENT_TYPE.to_owned())];
        if let Some(token) = self.tokens.access_token.as_ref() {
            headers.push((AUTHORIZATION.to_owned(), token.expose().to_owned()));
        }
        headers
    }

    fn endpoint(&self, path: &str) -> Result<Url, SmsError> {
        self.config.base_uri.join(path).map_err(|err| {
            ValidationError::InvalidBaseUri {
                input: self.config.base_uri.to_string(),
                reason: err.to_string(),
            }
            .into()
        })
    }

    async fn post(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, SmsError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post_form(url.as_str(), self.build_headers(), params)
            .await
            .map_err(SmsError::Transport)?;

        if !response.is_success() {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}
