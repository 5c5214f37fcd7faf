//! Helpdesk login - command-line driver for the login form
//!
//! Reads an email and a password from stdin and runs them through the login
//! screen's validation and dispatch.

use anyhow::Result;
use helpdesk_login::auth::TracingAuthDispatcher;
use helpdesk_login::config::AppConfig;
use helpdesk_login::login::{LoginScreen, EMAIL_FIELD, PASSWORD_FIELD};
use helpdesk_login::navigation::TracingNavigator;
use helpdesk_login::state::{SubmissionResult, Validity};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helpdesk_login=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()?;
    let mut screen = LoginScreen::new(
        &config,
        TracingAuthDispatcher::new(),
        TracingNavigator::new(),
    )?;
    screen.on_focus();

    if let Some(base_url) = screen.base_url() {
        println!("Signing in to {base_url}");
    }
    if let Some(url) = screen.signup_url() {
        println!("No account yet? {url}");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let email = prompt(&mut lines, "Email: ")?;
    screen.set_email(&email);
    if let Some(Validity::Invalid(message)) = screen.blur(EMAIL_FIELD) {
        eprintln!("{message}");
    }

    let password = prompt(&mut lines, "Password: ")?;
    screen.set_password(&password);
    screen.blur(PASSWORD_FIELD);

    match screen.submit() {
        SubmissionResult::Accepted(payload) => {
            let email = payload
                .get(EMAIL_FIELD)
                .map(String::as_str)
                .unwrap_or_default();
            println!("Logging in as {email}");
            Ok(())
        }
        SubmissionResult::Blocked => {
            for (name, state) in screen.form().field_states() {
                if let Some(error) = state.error {
                    eprintln!("{name}: {error}");
                }
            }
            std::process::exit(1);
        }
    }
}

/// Print `label` and read one line, treating end of input as empty
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}
