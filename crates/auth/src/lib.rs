//! Session guards for the Recruit front end
//!
//! Decides, for every navigation, whether a protected view may render, and
//! manages the handoff of invitation credentials from the public
//! registration link to the registration form.

mod claims;
mod clock;
mod config;
mod error;
mod guard;
mod handoff;
mod jwt;
mod navigation;
mod persistent;
mod session;
mod store;

#[cfg(test)]
mod testing;

pub use claims::DecodedPayload;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AuthConfig;
pub use error::{
    DecodeError, GuardError, ERROR_PROCESSING_TOKEN, INVALID_OR_EXPIRED_TOKEN, SIGN_IN_REQUIRED,
};
pub use guard::{Effect, Evaluation, GuardDecision, RouteGuard};
pub use handoff::{TransientTokenHandoffGuard, TOKEN_PARAM};
pub use jwt::TokenCodec;
pub use navigation::Navigation;
pub use persistent::PersistentAccessGuard;
pub use session::{Handoff, Session};
pub use store::{CredentialKey, FileStore, MemoryStore, SessionStore};
