//! Guard configuration

use recruit_common::Config;

/// Redirect targets for the two guards
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub login_path: String,
    pub registration_fallback_path: String,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            login_path: config.login_path.clone(),
            registration_fallback_path: config.registration_fallback_path.clone(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
