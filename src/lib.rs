//! Typed Rust client for the Tripmate SMS delivery API.
//!
//! The crate is split into a domain layer of validated types, a transport layer for the
//! wire format of each endpoint, and a client layer that owns the token lifecycle.
//!
//! ```rust,no_run
//! use tripmate_sms::DeliveryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tripmate_sms::SmsError> {
//!     let mut client = DeliveryClient::new("https://sms.example.com/api/", "user", "pass")?;
//!     match client.deliver("4155551234", "1042", "DISPATCHED", 1_714_564_800).await? {
//!         Some(result) => println!("delivered: {}", result.as_json()),
//!         None => println!("not a deliverable number"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AuthError, ClientConfig, DEFAULT_RETRY_ATTEMPTS, DeliveryClient, DeliveryClientBuilder,
    DeliveryError, HttpResponse, HttpTransport, SmsError, is_token_expired,
};
pub use domain::{
    AccessToken, ActivityCode, AuthTokens, ClientId, Credentials, DeliveryRequest,
    DeliveryResponse, EventDate, IncidentId, Password, PhoneNumber, RefreshToken, TokenState,
    Username, ValidationError,
};
