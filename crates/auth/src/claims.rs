//! Decoded token payload

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Claims carried in a token's payload segment, unverified
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedPayload(Map<String, Value>);

impl DecodedPayload {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    /// Expiry in epoch seconds
    ///
    /// Fractional values are rounded up so that `exp > now` against an
    /// integer clock keeps its strict meaning. Non-numeric values count as
    /// absent.
    pub fn exp(&self) -> Option<i64> {
        let exp = self.0.get("exp")?;
        exp.as_i64()
            .or_else(|| exp.as_f64().map(|secs| secs.ceil() as i64))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Nested credential carried by invitation tokens
    pub fn auth_token(&self) -> Option<&str> {
        self.get_str("authToken").filter(|token| !token.is_empty())
    }

    /// Deserialize the payload into a typed claims struct
    pub fn claims<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}
