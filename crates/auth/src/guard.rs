//! Route guard decisions and the once-per-activation commit phase
//!
//! Guards split their work in two. `evaluate` reads credentials and returns a
//! decision together with the side effects it implies, touching nothing.
//! `activate` evaluates and then commits those effects through `Activation`,
//! which applies writes and notifications at most once per distinct
//! (input, decision) pair, repeats removals whenever the store still holds
//! the discarded credential, and debounces user notifications for the
//! lifetime of the guard instance.

use recruit_notify::{Notification, Notifier};

use crate::error::GuardError;
use crate::navigation::Navigation;
use crate::store::{CredentialKey, SessionStore};

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view
    Allow,
    /// Navigate away to the given path instead
    Redirect(String),
}

impl GuardDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(target) => Some(target),
        }
    }
}

impl std::fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardDecision::Allow => write!(f, "allow"),
            GuardDecision::Redirect(target) => write!(f, "redirect {}", target),
        }
    }
}

/// Side effect implied by an evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Store { key: CredentialKey, value: String },
    Remove(CredentialKey),
}

/// A decision plus the effects that committing it would apply
#[derive(Debug)]
pub struct Evaluation {
    pub decision: GuardDecision,
    pub effects: Vec<Effect>,
    /// Why the guard refused, if it did
    pub error: Option<GuardError>,
    /// Fingerprint of the inputs the decision was made from
    input: String,
}

impl Evaluation {
    pub(crate) fn allow(input: String) -> Self {
        Self {
            decision: GuardDecision::Allow,
            effects: Vec::new(),
            error: None,
            input,
        }
    }

    pub(crate) fn redirect(input: String, target: &str, error: GuardError) -> Self {
        Self {
            decision: GuardDecision::Redirect(target.to_string()),
            effects: Vec::new(),
            error: Some(error),
            input,
        }
    }

    pub(crate) fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A decision unit gating one protected view
pub trait RouteGuard {
    /// Decide without touching the store or the notifier
    fn evaluate(&self, navigation: &Navigation) -> Evaluation;

    /// Evaluate, then commit the resulting effects
    fn activate(&mut self, navigation: &Navigation) -> GuardDecision;

    /// Start a fresh lifecycle, as when the protected view is unmounted
    fn reset(&mut self);
}

/// Per-instance commit state
#[derive(Debug, Default)]
pub(crate) struct Activation {
    notified: bool,
    committed: Option<(String, GuardDecision)>,
}

impl Activation {
    pub(crate) fn commit<S, N>(
        &mut self,
        evaluation: Evaluation,
        store: &S,
        notifier: &N,
    ) -> GuardDecision
    where
        S: SessionStore,
        N: Notifier,
    {
        let Evaluation {
            decision,
            effects,
            input,
            ..
        } = evaluation;

        let unchanged = matches!(
            &self.committed,
            Some((last_input, last_decision)) if *last_input == input && *last_decision == decision
        );
        if unchanged {
            tracing::trace!(decision = %decision, "Inputs unchanged, effects already applied");
        }

        for effect in effects {
            match effect {
                // Removals apply on every activation, unchanged inputs or not.
                Effect::Remove(key) => {
                    if store.get(key.as_str()).is_some() {
                        tracing::debug!(key = %key, "Removing credential");
                        store.remove(key.as_str());
                    }
                }
                _ if unchanged => {}
                Effect::Store { key, value } => store.set(key.as_str(), &value),
                Effect::Notify(notification) if self.notified => {
                    tracing::debug!(
                        message = %notification.message,
                        "Notification already shown by this guard, suppressing"
                    );
                }
                Effect::Notify(notification) => {
                    notifier.send(&notification);
                    self.notified = true;
                }
            }
        }

        if unchanged {
            return decision;
        }

        if decision.is_allow() {
            self.notified = false;
        }

        self.committed = Some((input, decision.clone()));
        decision
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
