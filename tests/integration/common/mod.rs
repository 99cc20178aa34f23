//! Common test utilities and fixtures for integration tests
//!
//! - Temporary on-disk session stores
//! - Token minting with the test signing secret
//! - Application setup over a shared store and a capturing notifier

use std::env;
use std::sync::Once;

use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use recruit_app::RouteTable;
use recruit_auth::{AuthConfig, FileStore, Session};
use recruit_common::Config;
use recruit_notify::MockNotifier;
use serde_json::{json, Value};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Test environment configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub jwt_secret: String,
}

impl TestConfig {
    pub fn from_env() -> Self {
        INIT.call_once(|| {
            dotenvy::from_filename(".env.test").ok();
        });

        Self {
            jwt_secret: env::var("TEST_JWT_SECRET")
                .unwrap_or_else(|_| "test_secret_key_for_testing_only".to_string()),
        }
    }
}

/// Mints tokens the way the backend would
pub struct TokenFactory {
    key: EncodingKey,
}

#[allow(dead_code)]
impl TokenFactory {
    pub fn new() -> Self {
        let config = TestConfig::from_env();
        Self {
            key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn mint(&self, claims: Value) -> String {
        encode(&Header::default(), &claims, &self.key).expect("Failed to encode JWT")
    }

    /// Dashboard session token expiring `ttl` seconds from now
    pub fn session(&self, ttl: i64) -> String {
        self.mint(json!({
            "sub": "recruiter-1",
            "role": "recruiter",
            "exp": Utc::now().timestamp() + ttl,
        }))
    }

    /// Invitation token expiring `ttl` seconds from now, and its nested credential
    pub fn invitation(&self, ttl: i64) -> (String, String) {
        let now = Utc::now().timestamp();
        let auth_token = self.mint(json!({
            "sub": "applicant-42",
            "scope": "registration",
            "exp": now + 86_400,
        }));
        let token = self.mint(json!({
            "email": "applicant@example.com",
            "authToken": auth_token,
            "exp": now + ttl,
        }));
        (token, auth_token)
    }
}

/// Application over a temporary on-disk session
#[allow(dead_code)]
pub struct TestApp {
    pub dir: TempDir,
    pub config: Config,
    pub routes: RouteTable<FileStore, MockNotifier>,
    pub session: Session<FileStore>,
    pub notifier: MockNotifier,
    pub tokens: TokenFactory,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = Config {
            session_file: dir.path().join("session.json"),
            notify_provider: "mock".to_string(),
            ..Config::default()
        };
        let (routes, session, notifier) = Self::build(&config)?;

        Ok(Self {
            dir,
            config,
            routes,
            session,
            notifier,
            tokens: TokenFactory::new(),
        })
    }

    fn build(
        config: &Config,
    ) -> Result<(RouteTable<FileStore, MockNotifier>, Session<FileStore>, MockNotifier)> {
        let store = FileStore::open(&config.session_file)?;
        let notifier = MockNotifier::new();
        let routes = RouteTable::new(store.clone(), notifier.clone(), &AuthConfig::from(config));
        Ok((routes, Session::new(store), notifier))
    }

    /// Simulate a page reload: reopen the store from disk with fresh guards
    pub fn reload(&mut self) -> Result<()> {
        let (routes, session, notifier) = Self::build(&self.config)?;
        self.routes = routes;
        self.session = session;
        self.notifier = notifier;
        Ok(())
    }

    pub fn registration_link(token: &str) -> String {
        format!("#/formPostulante?token={}", token)
    }
}
