//! Guard for the authenticated dashboard

use recruit_notify::{Notification, Notifier};

use crate::clock::{Clock, SystemClock};
use crate::error::{GuardError, SIGN_IN_REQUIRED};
use crate::guard::{Activation, Effect, Evaluation, GuardDecision, RouteGuard};
use crate::jwt::TokenCodec;
use crate::navigation::Navigation;
use crate::store::{CredentialKey, SessionStore};

/// Lets the dashboard render only while a live `token` is stored
///
/// A stored token that is malformed or expired is removed. An absent token
/// is left alone. Either way the user is told to sign in, once per guard
/// lifecycle, and sent to the login path.
pub struct PersistentAccessGuard<S, N, C = SystemClock> {
    store: S,
    notifier: N,
    clock: C,
    login_path: String,
    activation: Activation,
}

impl<S, N> PersistentAccessGuard<S, N>
where
    S: SessionStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N, login_path: impl Into<String>) -> Self {
        Self::with_clock(store, notifier, SystemClock, login_path)
    }
}

impl<S, N, C> PersistentAccessGuard<S, N, C>
where
    S: SessionStore,
    N: Notifier,
    C: Clock,
{
    pub fn with_clock(store: S, notifier: N, clock: C, login_path: impl Into<String>) -> Self {
        Self {
            store,
            notifier,
            clock,
            login_path: login_path.into(),
            activation: Activation::default(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    fn check(&self, token: Option<&str>) -> Result<(), GuardError> {
        let token = token.ok_or(GuardError::MissingToken)?;
        TokenCodec::decode_live(token, self.clock.now())?;
        Ok(())
    }
}

impl<S, N, C> RouteGuard for PersistentAccessGuard<S, N, C>
where
    S: SessionStore,
    N: Notifier,
    C: Clock,
{
    fn evaluate(&self, navigation: &Navigation) -> Evaluation {
        let token = self.store.get(CredentialKey::Token.as_str());
        let input = match &token {
            Some(token) => format!("token:{}", token),
            None => "absent".to_string(),
        };

        match self.check(token.as_deref()) {
            Ok(()) => {
                tracing::debug!(path = navigation.path(), "Dashboard access allowed");
                Evaluation::allow(input)
            }
            Err(error) => {
                tracing::debug!(
                    path = navigation.path(),
                    code = error.error_code(),
                    "Dashboard access refused"
                );

                let discard = !matches!(error, GuardError::MissingToken);
                let mut evaluation = Evaluation::redirect(input, &self.login_path, error);
                if discard {
                    evaluation = evaluation.with_effect(Effect::Remove(CredentialKey::Token));
                }
                evaluation.with_effect(Effect::Notify(Notification::warning(SIGN_IN_REQUIRED)))
            }
        }
    }

    fn activate(&mut self, navigation: &Navigation) -> GuardDecision {
        let evaluation = self.evaluate(navigation);
        self.activation
            .commit(evaluation, &self.store, &self.notifier)
    }

    fn reset(&mut self) {
        self.activation.reset();
    }
}
