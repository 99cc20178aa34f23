//! Dashboard session integration tests
//!
//! Exercises the dashboard guard through the route table with a durable
//! session store, including reloads between navigations.

use recruit_auth::{GuardDecision, SIGN_IN_REQUIRED};
use recruit_notify::Severity;

use crate::common::TestApp;

mod common;

fn login() -> GuardDecision {
    GuardDecision::Redirect("/login".to_string())
}

#[test_log::test]
fn test_signed_in_user_reaches_dashboard() {
    let mut app = TestApp::new().unwrap();
    let token = app.tokens.session(3600);
    app.session.sign_in(&token);

    assert_eq!(app.routes.navigate("#/dashboard"), GuardDecision::Allow);
    assert_eq!(app.routes.navigate("#/dashboard/talents/12"), GuardDecision::Allow);
    assert_eq!(app.notifier.count(), 0);
    assert_eq!(app.session.primary_token(), Some(token));
}

#[test]
fn test_session_survives_reload() {
    let mut app = TestApp::new().unwrap();
    let token = app.tokens.session(3600);
    app.session.sign_in(&token);

    app.reload().unwrap();

    assert_eq!(app.routes.navigate("#/dashboard"), GuardDecision::Allow);
}

#[test]
fn test_anonymous_user_is_sent_to_login_once() {
    let mut app = TestApp::new().unwrap();

    for _ in 0..3 {
        assert_eq!(app.routes.navigate("#/dashboard"), login());
    }

    assert_eq!(app.notifier.count(), 1);
    let notification = app.notifier.last().unwrap();
    assert_eq!(notification.message, SIGN_IN_REQUIRED);
    assert_eq!(notification.severity, Severity::Warning);
}

#[test]
fn test_expired_session_is_discarded_on_disk() {
    let mut app = TestApp::new().unwrap();
    app.session.sign_in(&app.tokens.session(-1));

    assert_eq!(app.routes.navigate("#/dashboard"), login());

    app.reload().unwrap();
    assert_eq!(app.session.primary_token(), None);
}

#[test]
fn test_sign_out_locks_dashboard() {
    let mut app = TestApp::new().unwrap();
    app.session.sign_in(&app.tokens.session(3600));
    assert!(app.routes.navigate("#/dashboard").is_allow());

    app.session.sign_out();

    assert_eq!(app.routes.navigate("#/dashboard"), login());
    assert_eq!(app.notifier.count(), 1);
}

#[test]
fn test_handoff_credentials_do_not_open_dashboard() {
    let mut app = TestApp::new().unwrap();
    let (token, _) = app.tokens.invitation(3600);
    app.routes.navigate(&TestApp::registration_link(&token));

    assert_eq!(app.routes.navigate("#/dashboard"), login());
    assert!(app.session.handoff().is_some());
}

#[test]
fn test_public_pages_render_without_session() {
    let mut app = TestApp::new().unwrap();

    assert_eq!(app.routes.navigate("#/login"), GuardDecision::Allow);
    assert_eq!(app.routes.navigate("#/"), GuardDecision::Allow);
    assert_eq!(app.notifier.count(), 0);
}
