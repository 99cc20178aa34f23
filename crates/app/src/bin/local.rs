// Recruit - Local session guard tool
//
// Resolves navigation targets against the on-disk session the same way the
// front end does, and manipulates that session for manual testing.

use tracing::{error, info};

use recruit_app::create_app;
use recruit_auth::{CredentialKey, GuardDecision, SessionStore};
use recruit_common::Config;

const USAGE: &str = "usage: recruit-local <command>

commands:
  navigate <target>       resolve a target such as '#/formPostulante?token=...'
  sign-in <token>         store a dashboard session token
  sign-out                remove the dashboard session token
  complete-registration   clear the invitation handoff credentials
  status                  show which credential slots are filled";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        anyhow::bail!(USAGE);
    };

    // RUST_LOG is part of the configuration, so load it before the subscriber
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with_writer(std::io::stderr)
        .init();

    info!(session_file = %config.session_file.display(), "Configuration loaded");

    let mut app = create_app(&config).map_err(|e| {
        error!("Failed to create application: {}", e);
        e
    })?;

    match (command.as_str(), args.get(1)) {
        ("navigate", Some(target)) => match app.routes.navigate(target) {
            GuardDecision::Allow => println!("allow"),
            GuardDecision::Redirect(path) => println!("redirect {}", path),
        },
        ("sign-in", Some(token)) => {
            app.session.sign_in(token);
            println!("signed in");
        }
        ("sign-out", None) => {
            app.session.sign_out();
            println!("signed out");
        }
        ("complete-registration", None) => {
            app.session.complete_registration();
            println!("registration credentials cleared");
        }
        ("status", None) => {
            for key in [
                CredentialKey::Token,
                CredentialKey::TempToken,
                CredentialKey::AuthToken,
            ] {
                let state = match app.session.store().get(key.as_str()) {
                    Some(_) => "set",
                    None => "empty",
                };
                println!("{:<10} {}", key.as_str(), state);
            }
        }
        _ => anyhow::bail!(USAGE),
    }

    Ok(())
}
