//! Invitation handoff workflow integration tests
//!
//! Follows an applicant from the invitation link through the registration
//! form to completion, against an on-disk session store.

use recruit_auth::{GuardDecision, Handoff, ERROR_PROCESSING_TOKEN, INVALID_OR_EXPIRED_TOKEN};
use recruit_notify::Severity;

use crate::common::TestApp;

mod common;

#[test_log::test]
fn test_invitation_link_hands_off_credentials() {
    let mut app = TestApp::new().unwrap();
    let (token, auth_token) = app.tokens.invitation(3600);

    let decision = app.routes.navigate(&TestApp::registration_link(&token));

    assert_eq!(decision, GuardDecision::Allow);
    assert_eq!(app.notifier.count(), 0);
    assert_eq!(
        app.session.handoff(),
        Some(Handoff {
            temp_token: token,
            auth_token: auth_token.clone(),
        })
    );
    assert_eq!(
        app.session.registration_bearer(),
        Some(format!("Bearer {}", auth_token))
    );
}

#[test]
fn test_handoff_survives_reload() {
    let mut app = TestApp::new().unwrap();
    let (token, auth_token) = app.tokens.invitation(3600);
    app.routes.navigate(&TestApp::registration_link(&token));

    app.reload().unwrap();

    let handoff = app.session.handoff().expect("handoff should persist");
    assert_eq!(handoff.temp_token, token);
    assert_eq!(handoff.auth_token, auth_token);
}

#[test]
fn test_completing_registration_clears_pair() {
    let mut app = TestApp::new().unwrap();
    let (token, _) = app.tokens.invitation(3600);
    app.routes.navigate(&TestApp::registration_link(&token));

    app.session.complete_registration();
    app.reload().unwrap();

    assert_eq!(app.session.handoff(), None);
    assert_eq!(app.session.registration_bearer(), None);
}

#[test]
fn test_expired_invitation_redirects_without_writes() {
    let mut app = TestApp::new().unwrap();
    let (token, _) = app.tokens.invitation(-60);

    let decision = app.routes.navigate(&TestApp::registration_link(&token));

    assert_eq!(decision, GuardDecision::Redirect("/".to_string()));
    assert_eq!(app.session.handoff(), None);
    let notification = app.notifier.last().unwrap();
    assert_eq!(notification.message, INVALID_OR_EXPIRED_TOKEN);
    assert_eq!(notification.severity, Severity::Error);
    assert!(!app.config.session_file.exists());
}

#[test]
fn test_link_without_query_redirects() {
    let mut app = TestApp::new().unwrap();

    let decision = app.routes.navigate("#/formPostulante");

    assert_eq!(decision, GuardDecision::Redirect("/".to_string()));
    assert_eq!(app.notifier.last().unwrap().message, INVALID_OR_EXPIRED_TOKEN);
}

#[test]
fn test_link_with_other_params_redirects() {
    let mut app = TestApp::new().unwrap();

    let decision = app.routes.navigate("#/formPostulante?foo=bar");

    assert_eq!(decision, GuardDecision::Redirect("/".to_string()));
    assert_eq!(app.session.handoff(), None);
}

#[test]
fn test_tampered_link_reports_processing_error() {
    let mut app = TestApp::new().unwrap();

    let decision = app
        .routes
        .navigate("#/formPostulante?token=eyJhbGciOiJIUzI1NiJ9.@@@@.sig");

    assert_eq!(decision, GuardDecision::Redirect("/".to_string()));
    assert_eq!(app.notifier.last().unwrap().message, ERROR_PROCESSING_TOKEN);
}

#[test]
fn test_rerendering_rejected_link_notifies_once() {
    let mut app = TestApp::new().unwrap();
    let (token, _) = app.tokens.invitation(-60);
    let link = TestApp::registration_link(&token);

    for _ in 0..4 {
        app.routes.navigate(&link);
    }

    assert_eq!(app.notifier.count(), 1);
}

#[test]
fn test_second_invitation_replaces_first() {
    let mut app = TestApp::new().unwrap();
    let (first, _) = app.tokens.invitation(3600);
    let (second, second_auth) = app.tokens.invitation(7200);

    app.routes.navigate(&TestApp::registration_link(&first));
    app.routes.navigate(&TestApp::registration_link(&second));

    let handoff = app.session.handoff().unwrap();
    assert_eq!(handoff.temp_token, second);
    assert_eq!(handoff.auth_token, second_auth);
}
