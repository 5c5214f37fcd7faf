//! Declarative validation rules

use regex::Regex;
use std::sync::OnceLock;

/// Email matcher used by the login form.
///
/// Accepts `local@domain.tld` and requires at least one dot in the domain part.
pub const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Message of the first failing rule
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(message) => Some(message),
        }
    }
}

/// A predicate over a field value together with the message shown when it fails
#[derive(Debug, Clone)]
pub enum ValidationRule {
    /// Fails when the trimmed value is empty
    Required { message: String },
    /// Fails when a non-empty value does not match `regex`
    Pattern { regex: Regex, message: String },
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        ValidationRule::Required {
            message: message.into(),
        }
    }

    /// Compile `pattern` into a pattern rule
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(ValidationRule::Pattern {
            regex: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Pattern rule backed by [`EMAIL_PATTERN`]
    pub fn email(message: impl Into<String>) -> Self {
        ValidationRule::Pattern {
            regex: email_regex().clone(),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationRule::Required { message } | ValidationRule::Pattern { message, .. } => {
                message
            }
        }
    }

    /// Evaluate the rule, returning the failure message when it does not hold.
    ///
    /// Pattern rules pass on blank input so that an empty value only ever
    /// reports the required message.
    pub fn check(&self, value: &str) -> Result<(), &str> {
        let blank = value.trim().is_empty();
        let holds = match self {
            ValidationRule::Required { .. } => !blank,
            ValidationRule::Pattern { regex, .. } => blank || regex.is_match(value),
        };
        if holds {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}
