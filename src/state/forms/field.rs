//! Form field value objects

use super::rule::{ValidationRule, Validity};
use serde::Serialize;

/// Where a field is in its edit/validate lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Not yet blurred or submitted
    #[default]
    Untouched,
    /// Blurred or submitted, awaiting validation
    Touched,
    Valid,
    Invalid,
}

/// Read-only snapshot handed to the display layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
    pub status: FieldStatus,
}

/// Represents a single form field with its rules, value and derived error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    initial_value: String,
    value: String,
    rules: Vec<ValidationRule>,
    error: Option<String>,
    status: FieldStatus,
}

impl FormField {
    /// Create a new field with an empty initial value
    pub fn new(name: &str) -> Self {
        Self::with_value(name, String::new())
    }

    /// Create a new field with an initial value
    pub fn with_value(name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.to_string(),
            initial_value: value.clone(),
            value,
            rules: Vec::new(),
            error: None,
            status: FieldStatus::Untouched,
        }
    }

    /// Append a rule; rules run in the order they are added
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value without revalidating
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn is_touched(&self) -> bool {
        self.status != FieldStatus::Untouched
    }

    /// Mark the field as touched (blur or submit attempt)
    pub fn touch(&mut self) {
        if self.status == FieldStatus::Untouched {
            self.status = FieldStatus::Touched;
        }
    }

    /// Run every rule in order, stopping at the first failure
    pub fn validate(&mut self) -> Validity {
        let failure = self
            .rules
            .iter()
            .find_map(|rule| rule.check(&self.value).err())
            .map(str::to_string);

        self.status = if failure.is_some() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        };
        self.error = failure.clone();

        match failure {
            Some(message) => Validity::Invalid(message),
            None => Validity::Valid,
        }
    }

    /// Restore the initial value and forget any validation
    pub fn reset(&mut self) {
        self.value = self.initial_value.clone();
        self.error = None;
        self.status = FieldStatus::Untouched;
    }

    pub fn state(&self) -> FieldState {
        FieldState {
            value: self.value.clone(),
            error: self.error.clone(),
            status: self.status,
        }
    }
}
