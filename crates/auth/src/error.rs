//! Token and guard errors

use thiserror::Error;

/// Failure to turn a compact token into a payload
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("payload segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Reasons a guard refuses to render its protected view
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("malformed token: {0}")]
    MalformedToken(#[from] DecodeError),

    #[error("no credential present")]
    MissingToken,

    #[error("token is expired or carries no expiry")]
    ExpiredToken,

    #[error("navigation target has no query component")]
    MissingQueryComponent,

    #[error("handoff token carries no nested authToken")]
    MissingNestedToken,
}

impl GuardError {
    /// Stable code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            GuardError::MalformedToken(_) => "MALFORMED_TOKEN",
            GuardError::MissingToken => "MISSING_TOKEN",
            GuardError::ExpiredToken => "EXPIRED_TOKEN",
            GuardError::MissingQueryComponent => "MISSING_QUERY_COMPONENT",
            GuardError::MissingNestedToken => "MISSING_NESTED_TOKEN",
        }
    }

    /// Message shown to a user arriving through an invitation link
    pub fn handoff_message(&self) -> &'static str {
        match self {
            GuardError::MalformedToken(_) | GuardError::MissingNestedToken => {
                ERROR_PROCESSING_TOKEN
            }
            GuardError::MissingToken
            | GuardError::ExpiredToken
            | GuardError::MissingQueryComponent => INVALID_OR_EXPIRED_TOKEN,
        }
    }
}

/// Shown when the dashboard guard turns a user away
pub const SIGN_IN_REQUIRED: &str = "You must sign in to continue";

/// Shown when an invitation link is missing, incomplete, or stale
pub const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";

/// Shown when an invitation token cannot be read at all
pub const ERROR_PROCESSING_TOKEN: &str = "Error processing token";
