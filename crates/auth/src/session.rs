//! Typed view over the persisted credential slots

use crate::store::{CredentialKey, SessionStore};

/// Credentials captured from an invitation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub temp_token: String,
    pub auth_token: String,
}

impl Handoff {
    /// Slot writes for the pair, invitation token first
    pub fn entries(&self) -> [(CredentialKey, &str); 2] {
        [
            (CredentialKey::TempToken, &self.temp_token),
            (CredentialKey::AuthToken, &self.auth_token),
        ]
    }
}

/// Session credentials backed by a `SessionStore`
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist the primary credential returned by a successful login
    pub fn sign_in(&self, token: &str) {
        self.store.set(CredentialKey::Token.as_str(), token);
        tracing::info!("Session token stored");
    }

    pub fn sign_out(&self) {
        self.store.remove(CredentialKey::Token.as_str());
        tracing::info!("Session token cleared");
    }

    pub fn primary_token(&self) -> Option<String> {
        self.store.get(CredentialKey::Token.as_str())
    }

    pub fn store_handoff(&self, handoff: &Handoff) {
        for (key, value) in handoff.entries() {
            self.store.set(key.as_str(), value);
        }
    }

    /// Both handoff slots, or `None` if either is missing
    pub fn handoff(&self) -> Option<Handoff> {
        let temp_token = self.store.get(CredentialKey::TempToken.as_str())?;
        let auth_token = self.store.get(CredentialKey::AuthToken.as_str())?;
        Some(Handoff {
            temp_token,
            auth_token,
        })
    }

    /// Clear the handoff pair once the registration form has been submitted
    pub fn complete_registration(&self) {
        self.store.remove(CredentialKey::TempToken.as_str());
        self.store.remove(CredentialKey::AuthToken.as_str());
        tracing::info!("Registration handoff credentials cleared");
    }

    /// `Authorization` header value for the registration form's API calls
    pub fn registration_bearer(&self) -> Option<String> {
        self.handoff()
            .map(|handoff| format!("Bearer {}", handoff.auth_token))
    }
}
