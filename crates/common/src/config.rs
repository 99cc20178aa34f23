//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the dashboard guard sends unauthenticated users
    pub login_path: String,

    /// Where the registration guard sends users with an unusable invitation link
    pub registration_fallback_path: String,

    /// File backing the durable session store
    pub session_file: PathBuf,

    /// Notification sink (tracing, mock)
    pub notify_provider: String,

    /// Runtime configuration
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            registration_fallback_path: "/".to_string(),
            session_file: PathBuf::from(".recruit/session.json"),
            notify_provider: "tracing".to_string(),
            rust_log: "recruit=debug".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let config = Self {
            login_path: env::var("RECRUIT_LOGIN_PATH").unwrap_or(defaults.login_path),
            registration_fallback_path: env::var("RECRUIT_REGISTRATION_FALLBACK_PATH")
                .unwrap_or(defaults.registration_fallback_path),
            session_file: env::var("RECRUIT_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            notify_provider: env::var("NOTIFY_PROVIDER").unwrap_or(defaults.notify_provider),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        config.validate()?;

        Ok(config)
    }

    /// Reject configurations whose redirect targets could never be navigated to
    pub fn validate(&self) -> std::result::Result<(), Error> {
        if self.login_path.trim().is_empty() {
            return Err(Error::Configuration(
                "RECRUIT_LOGIN_PATH must not be empty".to_string(),
            ));
        }
        if self.registration_fallback_path.trim().is_empty() {
            return Err(Error::Configuration(
                "RECRUIT_REGISTRATION_FALLBACK_PATH must not be empty".to_string(),
            ));
        }
        if self.session_file.as_os_str().is_empty() {
            return Err(Error::Configuration(
                "RECRUIT_SESSION_FILE must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
