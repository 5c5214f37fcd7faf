//! Field registry with gated submission

use super::config::FormConfig;
use super::error::FormError;
use super::field::{FieldState, FormField};
use super::rule::Validity;
use std::collections::{BTreeMap, HashSet};

/// Field values forwarded on a successful submission, keyed by field name
pub type Payload = BTreeMap<String, String>;

/// Outcome of [`FormValidationController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// At least one field failed validation
    Blocked,
    Accepted(Payload),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }
}

/// Owns the fields of one form, their values and derived errors
#[derive(Debug, Clone, Default)]
pub struct FormValidationController {
    fields: Vec<FormField>,
    submit_count: u32,
}

impl FormValidationController {
    /// Build a controller from fields in display order
    pub fn new(fields: Vec<FormField>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.is_empty() {
                return Err(FormError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }

        Ok(Self {
            fields,
            submit_count: 0,
        })
    }

    pub fn from_config(config: FormConfig) -> Result<Self, FormError> {
        let fields = config
            .fields
            .into_iter()
            .map(|field| field.into_field())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(fields)
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Store a new value for `name`. Unknown names are ignored.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) {
        match self.field_mut(name) {
            Some(field) => field.set_value(value.into()),
            None => tracing::debug!("Ignoring value for unknown field {name:?}"),
        }
    }

    /// Blur event: touch the field and validate it
    pub fn blur(&mut self, name: &str) -> Option<Validity> {
        let field = self.field_mut(name)?;
        field.touch();
        Some(field.validate())
    }

    /// Validate one field, returning `None` for unknown names
    pub fn validate_field(&mut self, name: &str) -> Option<Validity> {
        let Some(field) = self.field_mut(name) else {
            tracing::debug!("Cannot validate unknown field {name:?}");
            return None;
        };
        let validity = field.validate();
        tracing::trace!("Validated {name}: {validity:?}");
        Some(validity)
    }

    /// Validate every field; true iff all of them pass
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            if !field.validate().is_valid() {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Validate everything and hand the values to `on_valid` if the form passes.
    ///
    /// `on_valid` runs at most once and only for an accepted submission.
    pub fn submit<F>(&mut self, on_valid: F) -> SubmissionResult
    where
        F: FnOnce(&Payload),
    {
        self.submit_count += 1;
        for field in &mut self.fields {
            field.touch();
        }

        if !self.validate_all() {
            let invalid: Vec<&str> = self
                .fields
                .iter()
                .filter(|f| f.error().is_some())
                .map(|f| f.name.as_str())
                .collect();
            tracing::debug!("Submission blocked, invalid fields: {invalid:?}");
            return SubmissionResult::Blocked;
        }

        let payload = self.values();
        on_valid(&payload);
        tracing::debug!("Submission accepted with {} field(s)", payload.len());
        SubmissionResult::Accepted(payload)
    }

    pub fn get_field_state(&self, name: &str) -> Option<FieldState> {
        self.field(name).map(FormField::state)
    }

    /// Snapshots of every field in declaration order
    pub fn field_states(&self) -> Vec<(&str, FieldState)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.state()))
            .collect()
    }

    /// Current values of all fields
    pub fn values(&self) -> Payload {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value().to_string()))
            .collect()
    }

    /// Number of submit attempts since construction or the last reset
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Return every field to its initial value and untouched status
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.submit_count = 0;
    }
}
