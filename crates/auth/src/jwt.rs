//! Compact token decoding and expiry checks
//!
//! Tokens are read, never verified: the signature segment is ignored and the
//! backend remains the authority on whether a credential is genuine.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use serde_json::Value;

use crate::claims::DecodedPayload;
use crate::error::{DecodeError, GuardError};

/// Standard alphabet, padding optional, lenient trailing bits
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Reads token payloads
pub struct TokenCodec;

impl TokenCodec {
    /// Decode the payload segment of a `header.payload.signature` token
    pub fn decode(token: &str) -> Result<DecodedPayload, DecodeError> {
        let segment = token.split('.').nth(1).ok_or(DecodeError::MissingPayload)?;

        let standard = segment.replace('-', "+").replace('_', "/");
        let bytes = PAYLOAD_ENGINE.decode(standard.as_bytes())?;

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(claims) => Ok(DecodedPayload::new(claims)),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    /// True only when `exp` is present and strictly after `now`
    pub fn is_live(payload: &DecodedPayload, now: i64) -> bool {
        payload.exp().is_some_and(|exp| exp > now)
    }

    /// Decode and require liveness in one step
    pub fn decode_live(token: &str, now: i64) -> Result<DecodedPayload, GuardError> {
        let payload = Self::decode(token).map_err(|e| {
            tracing::debug!(error = %e, "Token decode failed");
            GuardError::MalformedToken(e)
        })?;

        if !Self::is_live(&payload, now) {
            tracing::debug!(exp = ?payload.exp(), now, "Token is not live");
            return Err(GuardError::ExpiredToken);
        }

        Ok(payload)
    }
}
