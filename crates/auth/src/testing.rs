//! Token fixtures for unit tests

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

/// Sign claims with HS256 the way the backend would
pub(crate) fn mint(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"recruit-test-secret"),
    )
    .expect("Failed to encode JWT")
}

/// Build a token around an arbitrary payload string, unsigned
pub(crate) fn raw_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}
