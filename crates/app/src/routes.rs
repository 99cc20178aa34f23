//! Route table
//!
//! Maps in-app paths to the guard protecting them. Each guard instance lives
//! as long as the table, so its debounce state carries across navigations
//! within the same route; leaving a route resets its guard the way
//! unmounting the protected view would.

use recruit_auth::{
    AuthConfig, Clock, GuardDecision, Navigation, PersistentAccessGuard, RouteGuard,
    SessionStore, SystemClock, TransientTokenHandoffGuard,
};
use recruit_notify::Notifier;

/// Dashboard area root; everything under it requires a session
pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// Public registration form reached from invitation links
pub const REGISTRATION_PATH: &str = "/formPostulante";

/// Which guard, if any, protects a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Dashboard,
    Registration,
}

pub struct RouteTable<S, N, C = SystemClock> {
    dashboard: PersistentAccessGuard<S, N, C>,
    registration: TransientTokenHandoffGuard<S, N, C>,
    dashboard_prefixes: Vec<String>,
    registration_path: String,
    active: Option<RouteAccess>,
}

impl<S, N> RouteTable<S, N>
where
    S: SessionStore + Clone,
    N: Notifier + Clone,
{
    pub fn new(store: S, notifier: N, config: &AuthConfig) -> Self {
        Self::with_clock(store, notifier, SystemClock, config)
    }
}

impl<S, N, C> RouteTable<S, N, C>
where
    S: SessionStore + Clone,
    N: Notifier + Clone,
    C: Clock + Clone,
{
    pub fn with_clock(store: S, notifier: N, clock: C, config: &AuthConfig) -> Self {
        Self {
            dashboard: PersistentAccessGuard::with_clock(
                store.clone(),
                notifier.clone(),
                clock.clone(),
                config.login_path.clone(),
            ),
            registration: TransientTokenHandoffGuard::with_clock(
                store,
                notifier,
                clock,
                config.registration_fallback_path.clone(),
            ),
            dashboard_prefixes: vec![DASHBOARD_PREFIX.to_string()],
            registration_path: REGISTRATION_PATH.to_string(),
            active: None,
        }
    }

    /// Require a session for another path prefix
    pub fn protect_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.dashboard_prefixes.push(prefix.into());
        self
    }

    pub fn classify(&self, path: &str) -> RouteAccess {
        if matches_route(path, &self.registration_path) {
            RouteAccess::Registration
        } else if self
            .dashboard_prefixes
            .iter()
            .any(|prefix| matches_route(path, prefix))
        {
            RouteAccess::Dashboard
        } else {
            RouteAccess::Public
        }
    }

    /// Route most recently navigated to
    pub fn active(&self) -> Option<RouteAccess> {
        self.active
    }

    /// Resolve a navigation target to a render-or-redirect decision
    pub fn navigate(&mut self, target: &str) -> GuardDecision {
        let navigation = Navigation::parse(target);
        let access = self.classify(navigation.path());

        if let Some(previous) = self.active.filter(|previous| *previous != access) {
            self.reset(previous);
        }
        self.active = Some(access);

        let decision = match access {
            RouteAccess::Public => GuardDecision::Allow,
            RouteAccess::Dashboard => self.dashboard.activate(&navigation),
            RouteAccess::Registration => self.registration.activate(&navigation),
        };

        tracing::info!(
            path = navigation.path(),
            access = ?access,
            decision = %decision,
            "Navigation resolved"
        );

        decision
    }

    fn reset(&mut self, access: RouteAccess) {
        match access {
            RouteAccess::Public => {}
            RouteAccess::Dashboard => self.dashboard.reset(),
            RouteAccess::Registration => self.registration.reset(),
        }
    }
}

/// `path` is `route` itself or lies beneath it
fn matches_route(path: &str, route: &str) -> bool {
    let route = route.trim_end_matches('/');
    match path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
