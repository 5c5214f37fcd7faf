//! Auth store used by the command-line driver

use super::traits::{AuthDispatcher, LoginCredentials};
use std::cell::{Cell, RefCell};

/// Records dispatched logins and reports them through `tracing`.
///
/// Stands in for the networked auth store; nothing is sent anywhere.
#[derive(Debug, Default)]
pub struct TracingAuthDispatcher {
    logging_in: Cell<bool>,
    last_email: RefCell<Option<String>>,
}

impl TracingAuthDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Email of the most recent login request
    pub fn last_email(&self) -> Option<String> {
        self.last_email.borrow().clone()
    }
}

impl AuthDispatcher for TracingAuthDispatcher {
    fn do_login(&self, credentials: LoginCredentials) {
        tracing::info!("Dispatching login for {}", credentials.email);
        self.logging_in.set(true);
        *self.last_email.borrow_mut() = Some(credentials.email);
    }

    fn reset_auth(&self) {
        tracing::debug!("Resetting auth state");
        self.logging_in.set(false);
    }

    fn is_logging_in(&self) -> bool {
        self.logging_in.get()
    }
}
