//! Recruit application composition root
//!
//! Wires the durable session store, the notification sink, and the route
//! table together from configuration.

use std::sync::Arc;

use recruit_auth::{AuthConfig, FileStore, Session};
use recruit_common::Config;
use recruit_notify::{Notifier, NotifierFactory};

pub mod routes;

pub use routes::{RouteAccess, RouteTable, DASHBOARD_PREFIX, REGISTRATION_PATH};

/// Composed application
pub struct App {
    pub routes: RouteTable<FileStore, Arc<dyn Notifier>>,
    pub session: Session<FileStore>,
}

/// Build the application from configuration
pub fn create_app(config: &Config) -> Result<App, anyhow::Error> {
    config.validate()?;

    // Open the durable session store
    let store = FileStore::open(&config.session_file).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open session store {}: {}",
            config.session_file.display(),
            e
        )
    })?;

    // Create notification sink from configuration
    let notifier: Arc<dyn Notifier> = Arc::from(NotifierFactory::create(&config.notify_provider)?);

    let auth_config = AuthConfig::from(config);
    let routes = RouteTable::new(store.clone(), notifier, &auth_config);

    Ok(App {
        routes,
        session: Session::new(store),
    })
}
