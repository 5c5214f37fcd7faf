//! Login screen logic: validation, auth dispatch and navigation triggers

use crate::auth::{AuthDispatcher, LoginCredentials};
use crate::config::{AppConfig, LoginMessages};
use crate::navigation::{routes, Navigator};
use crate::state::{
    FieldState, FormError, FormField, FormValidationController, SubmissionResult, ValidationRule,
    Validity,
};

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

/// Deployment flavor that shows the signup link
pub const SIGNUP_APP_NAME: &str = "WiseWoot";

/// Build the email/password form with the given messages
pub fn login_form(messages: &LoginMessages) -> Result<FormValidationController, FormError> {
    FormValidationController::new(vec![
        FormField::new(EMAIL_FIELD)
            .rule(ValidationRule::required(&messages.email_required))
            .rule(ValidationRule::email(&messages.email_invalid)),
        FormField::new(PASSWORD_FIELD).rule(ValidationRule::required(&messages.password_required)),
    ])
}

/// State and actions behind the login screen
pub struct LoginScreen<A, N> {
    form: FormValidationController,
    config: AppConfig,
    auth: A,
    navigator: N,
}

impl<A: AuthDispatcher, N: Navigator> LoginScreen<A, N> {
    pub fn new(config: &AppConfig, auth: A, navigator: N) -> Result<Self, FormError> {
        Ok(Self {
            form: login_form(&config.messages)?,
            config: config.clone(),
            auth,
            navigator,
        })
    }

    /// Screen gained focus: start over, and ask for an installation if none is set
    pub fn on_focus(&mut self) {
        self.auth.reset_auth();
        self.form.reset();
        if !self.config.has_installation_url() {
            self.navigator.navigate_to(routes::CONFIGURE_URL);
        }
    }

    pub fn set_email(&mut self, email: &str) {
        self.form.set_field_value(EMAIL_FIELD, email);
    }

    pub fn set_password(&mut self, password: &str) {
        self.form.set_field_value(PASSWORD_FIELD, password);
    }

    pub fn blur(&mut self, field: &str) -> Option<Validity> {
        self.form.blur(field)
    }

    /// Validate and, when the form passes, dispatch the login request once
    pub fn submit(&mut self) -> SubmissionResult {
        let auth = &self.auth;
        self.form.submit(|payload| {
            let credentials = LoginCredentials {
                email: payload.get(EMAIL_FIELD).cloned().unwrap_or_default(),
                password: payload.get(PASSWORD_FIELD).cloned().unwrap_or_default(),
            };
            auth.do_login(credentials);
        })
    }

    /// Loading indicator, owned by the auth store
    pub fn is_logging_in(&self) -> bool {
        self.auth.is_logging_in()
    }

    pub fn forgot_password(&self) {
        self.navigator.navigate_to(routes::RESET_PASSWORD);
    }

    pub fn change_url(&self) {
        self.navigator.navigate_to(routes::CONFIGURE_URL);
    }

    /// Signup link target, only offered for the signup flavor
    pub fn signup_url(&self) -> Option<&str> {
        if self.config.app_name.as_deref() == Some(SIGNUP_APP_NAME) {
            self.config.help_url.as_deref()
        } else {
            None
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.config
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        self.form.get_field_state(name)
    }

    pub fn form(&self) -> &FormValidationController {
        &self.form
    }
}
