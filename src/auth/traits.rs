//! Trait abstraction for the auth store to enable mocking in tests

use std::fmt;

/// Credentials forwarded to the auth store after a successful submission
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Auth store operations used by the login screen.
///
/// Dispatch is fire-and-forget: the store owns the request, its failures and
/// the "logging in" indicator.
#[cfg_attr(test, mockall::automock)]
pub trait AuthDispatcher {
    /// Start a login request
    fn do_login(&self, credentials: LoginCredentials);

    /// Clear any previous auth error or in-flight state
    fn reset_auth(&self);

    /// Whether a login request is in flight
    fn is_logging_in(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = LoginCredentials {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        };
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("user@example.com"));
        assert!(!debug_str.contains("secret"));
    }
}
