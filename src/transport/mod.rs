//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod authenticate;
mod deliver;
mod refresh_token;
mod scalar;

use crate::domain::ValidationError;

pub use authenticate::{
    AUTHENTICATE_PATH, decode_authenticate_json_response, encode_authenticate_form,
};
pub use deliver::{DELIVER_PATH, decode_deliver_json_response, encode_deliver_form};
pub use refresh_token::{
    REFRESH_TOKEN_PATH, decode_refresh_token_json_response, encode_refresh_token_form,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value in response: {0}")]
    Invalid(#[from] ValidationError),
}
