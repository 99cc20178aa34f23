//! Guard for the public registration page
//!
//! Invitation links arrive as `#/formPostulante?token=<jwt>`. A live
//! invitation token is kept as `tempToken` and the `authToken` nested in
//! its payload is kept alongside it for the registration form's own API
//! calls. Anything else sends the visitor to the fallback path.

use recruit_notify::{Notification, Notifier};

use crate::clock::{Clock, SystemClock};
use crate::error::GuardError;
use crate::guard::{Activation, Effect, Evaluation, GuardDecision, RouteGuard};
use crate::jwt::TokenCodec;
use crate::navigation::Navigation;
use crate::session::Handoff;
use crate::store::SessionStore;

/// Query parameter carrying the invitation token
pub const TOKEN_PARAM: &str = "token";

pub struct TransientTokenHandoffGuard<S, N, C = SystemClock> {
    store: S,
    notifier: N,
    clock: C,
    fallback_path: String,
    activation: Activation,
}

impl<S, N> TransientTokenHandoffGuard<S, N>
where
    S: SessionStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N, fallback_path: impl Into<String>) -> Self {
        Self::with_clock(store, notifier, SystemClock, fallback_path)
    }
}

impl<S, N, C> TransientTokenHandoffGuard<S, N, C>
where
    S: SessionStore,
    N: Notifier,
    C: Clock,
{
    pub fn with_clock(
        store: S,
        notifier: N,
        clock: C,
        fallback_path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
            fallback_path: fallback_path.into(),
            activation: Activation::default(),
        }
    }

    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    fn check(&self, navigation: &Navigation) -> Result<Handoff, GuardError> {
        if !navigation.has_query() {
            return Err(GuardError::MissingQueryComponent);
        }

        let token = navigation
            .query_param(TOKEN_PARAM)
            .filter(|token| !token.is_empty())
            .ok_or(GuardError::MissingToken)?;

        let payload = TokenCodec::decode_live(token, self.clock.now())?;
        let auth_token = payload.auth_token().ok_or(GuardError::MissingNestedToken)?;

        Ok(Handoff {
            temp_token: token.to_string(),
            auth_token: auth_token.to_string(),
        })
    }
}

impl<S, N, C> RouteGuard for TransientTokenHandoffGuard<S, N, C>
where
    S: SessionStore,
    N: Notifier,
    C: Clock,
{
    fn evaluate(&self, navigation: &Navigation) -> Evaluation {
        let input = navigation.target().to_string();

        match self.check(navigation) {
            Ok(handoff) => {
                tracing::info!(
                    path = navigation.path(),
                    auth_token_len = handoff.auth_token.len(),
                    "Invitation token accepted"
                );
                let mut evaluation = Evaluation::allow(input);
                for (key, value) in handoff.entries() {
                    evaluation = evaluation.with_effect(Effect::Store {
                        key,
                        value: value.to_string(),
                    });
                }
                evaluation
            }
            Err(error) => {
                tracing::warn!(
                    path = navigation.path(),
                    code = error.error_code(),
                    error = %error,
                    "Invitation token rejected"
                );
                let message = error.handoff_message();
                Evaluation::redirect(input, &self.fallback_path, error)
                    .with_effect(Effect::Notify(Notification::error(message)))
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
